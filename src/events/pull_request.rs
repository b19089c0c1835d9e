use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, PullRequest, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub number: u64,
    pub pull_request: PullRequest,
    pub assignee: Option<GitHubUser>,
    pub repository: Repository,
    pub sender: GitHubUser,
}
