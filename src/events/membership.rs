use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipEvent {
    pub action: String,
    pub scope: String,
    pub member: GitHubUser,
    pub team: Team,
    pub sender: GitHubUser,
}
