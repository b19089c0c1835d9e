use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Organization};

/// An organization blocked or unblocked a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgBlockEvent {
    pub action: String,
    pub blocked_user: GitHubUser,
    pub organization: Organization,
    pub sender: GitHubUser,
}
