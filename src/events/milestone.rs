use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Milestone, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    pub action: String,
    pub milestone: Milestone,
    pub repository: Repository,
    pub sender: GitHubUser,
}
