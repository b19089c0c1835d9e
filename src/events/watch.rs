use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

/// Someone starred the repository. The only action is 'started'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchEvent {
    pub action: String,
    pub repository: Repository,
    pub sender: GitHubUser,
}
