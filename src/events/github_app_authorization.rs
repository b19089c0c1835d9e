use serde::{Deserialize, Serialize};

use crate::events::GitHubUser;

/// A user revoked their authorization of a GitHub App. The only action is 'revoked'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubAppAuthorizationEvent {
    pub action: String,
    pub sender: GitHubUser,
}
