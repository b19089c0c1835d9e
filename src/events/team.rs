use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::events::{GitHubUser, Organization, Repository, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamEvent {
    pub action: String,
    pub team: Team,
    // shape depends on which team attribute was edited
    pub changes: Option<Value>,
    // only set for 'added_to_repository' and 'removed_from_repository'
    pub repository: Option<Repository>,
    pub organization: Option<Organization>,
    pub sender: GitHubUser,
}
