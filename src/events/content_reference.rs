use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReferenceEvent {
    pub action: String,
    pub content_reference: ContentReference,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReference {
    pub id: u64,
    pub node_id: String,
    /// The URL that was posted in the issue or pull request body.
    pub reference: String,
}
