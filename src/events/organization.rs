use serde::{Deserialize, Serialize};

use crate::events::GitHubUser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationEvent {
    pub action: String,
    pub sender: GitHubUser,

    // When 'member_invited', 'user' should be set
    pub invitation: Option<OrganizationInvitation>,
    pub user: Option<GitHubUser>,

    // Otherwise, 'user' is accessed through 'membership'
    pub membership: Option<OrganizationMembership>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationInvitation {
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationMembership {
    pub role: String,
    pub user: GitHubUser,
}
