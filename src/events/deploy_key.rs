use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployKeyEvent {
    pub action: String,
    pub key: DeployKey,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployKey {
    pub id: u64,
    pub key: String,
    pub title: String,
    pub read_only: bool,
    pub verified: Option<bool>,
}
