use serde::{Deserialize, Serialize};
use url::Url;

use crate::events::{GitHubUser, PullRequest, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestReviewCommentEvent {
    pub action: String,
    pub pull_request: PullRequest,
    pub comment: ReviewComment,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    pub id: u64,
    pub pull_request_review_id: Option<u64>,
    pub html_url: Url,
    pub body: String,
    pub user: GitHubUser,
    pub path: String,
    pub commit_id: String,
    // null once the comment is outdated
    pub position: Option<u64>,
}
