use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, RefType, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEvent {
    pub r#ref: String,
    pub ref_type: RefType,
    pub master_branch: String,
    pub description: Option<String>,
    pub repository: Repository,
    pub sender: GitHubUser,
}
