use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForkEvent {
    pub forkee: Repository,
    pub repository: Repository,
    pub sender: GitHubUser,
}
