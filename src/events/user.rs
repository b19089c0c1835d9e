use serde::{Deserialize, Serialize};

use crate::events::GitHubUser;

/// A user account was created or deleted on a GitHub Enterprise instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEvent {
    pub action: String,
    pub user: GitHubUser,
    pub sender: GitHubUser,
}
