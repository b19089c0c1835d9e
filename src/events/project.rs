use serde::{Deserialize, Serialize};
use url::Url;

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEvent {
    pub action: String,
    pub project: Project,
    // missing for organization projects
    pub repository: Option<Repository>,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub number: u64,
    pub name: String,
    pub body: Option<String>,
    pub state: String,
    pub html_url: Url,
}
