use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingEvent {
    pub zen: String,
    pub hook_id: u64,
    // missing for organization hooks
    pub repository: Option<Repository>,
    pub sender: GitHubUser,
}
