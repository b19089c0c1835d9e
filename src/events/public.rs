use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

/// A private repository was made public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicEvent {
    pub repository: Repository,
    pub sender: GitHubUser,
}
