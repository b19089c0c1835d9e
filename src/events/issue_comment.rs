use serde::{Deserialize, Serialize};

use crate::events::{ChangedFrom, Comment, GitHubUser, Issue, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCommentEvent {
    pub action: String,
    pub issue: Issue,
    pub comment: Comment,
    pub changes: Option<CommentChanges>,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentChanges {
    pub body: Option<ChangedFrom>,
}
