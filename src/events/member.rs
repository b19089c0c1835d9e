use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

/// A collaborator was added to, removed from, or changed in a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberEvent {
    pub action: String,
    pub member: GitHubUser,
    pub repository: Repository,
    pub sender: GitHubUser,
}
