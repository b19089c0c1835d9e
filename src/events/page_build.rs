use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

/// A GitHub Pages build attempt, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBuildEvent {
    pub id: u64,
    pub build: PageBuild,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBuild {
    pub status: String,
    pub error: PageBuildError,
    pub pusher: Option<GitHubUser>,
    pub commit: Option<String>,
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBuildError {
    pub message: Option<String>,
}
