use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDispatchEvent {
    /// The `event_type` given when the dispatch was created.
    pub action: String,
    pub branch: Option<String>,
    // free-form, chosen by whoever sent the dispatch
    #[serde(default)]
    pub client_payload: Value,
    pub repository: Repository,
    pub sender: GitHubUser,
}
