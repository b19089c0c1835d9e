use serde::{Deserialize, Serialize};

use crate::events::{Comment, GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitCommentEvent {
    pub action: String,
    pub comment: Comment,
    pub repository: Repository,
    pub sender: GitHubUser,
}
