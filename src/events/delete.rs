use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, RefType, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteEvent {
    pub r#ref: String,
    pub ref_type: RefType,
    pub repository: Repository,
    pub sender: GitHubUser,
}
