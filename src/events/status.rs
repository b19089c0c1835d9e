use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

/// The status of a commit changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub id: u64,
    pub sha: String,
    pub name: String,
    pub context: String,
    pub state: String,
    pub description: Option<String>,
    pub target_url: Option<String>,
    #[serde(default)]
    pub branches: Vec<StatusBranch>,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBranch {
    pub name: String,
    pub commit: StatusCommit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCommit {
    pub sha: String,
}
