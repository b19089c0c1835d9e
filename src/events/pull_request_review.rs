use serde::{Deserialize, Serialize};
use url::Url;

use crate::events::{GitHubUser, PullRequest, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestReviewEvent {
    pub action: String,
    pub pull_request: PullRequest,
    pub review: Review,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub state: String,
    pub body: Option<String>,
    pub user: GitHubUser,
    pub html_url: Url,
}
