use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarEvent {
    pub action: String,
    // null when the star was removed
    pub starred_at: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
}
