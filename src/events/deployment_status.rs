use serde::{Deserialize, Serialize};

use crate::events::{Deployment, GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStatusEvent {
    pub deployment_status: DeploymentStatus,
    pub deployment: Deployment,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub id: u64,
    pub state: String,
    pub description: Option<String>,
    pub environment: Option<String>,
    // GitHub sends an empty string rather than null here, so this can't be a `Url`
    pub target_url: Option<String>,
}
