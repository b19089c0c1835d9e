use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDispatchEvent {
    // null when the workflow doesn't declare any input
    pub inputs: Option<Map<String, Value>>,
    pub r#ref: String,
    /// Path of the workflow file, relative to the repository root.
    pub workflow: String,
    pub repository: Repository,
    pub sender: GitHubUser,
}
