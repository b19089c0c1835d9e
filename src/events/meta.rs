use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

/// The webhook itself was deleted. The only action is 'deleted'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaEvent {
    pub action: String,
    pub hook_id: u64,
    pub hook: Hook,
    pub repository: Option<Repository>,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hook {
    pub id: u64,
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub events: Vec<String>,
}
