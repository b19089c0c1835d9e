use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentEvent {
    pub deployment: Deployment,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub sha: String,
    pub r#ref: String,
    pub task: String,
    pub environment: String,
    pub description: Option<String>,
    pub creator: Option<GitHubUser>,
}
