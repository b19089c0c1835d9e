use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectColumnEvent {
    pub action: String,
    pub project_column: ProjectColumn,
    pub repository: Option<Repository>,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectColumn {
    pub id: u64,
    pub name: String,
}
