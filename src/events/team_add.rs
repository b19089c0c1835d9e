use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository, Team};

/// A repository was added to a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAddEvent {
    pub team: Team,
    pub repository: Repository,
    pub sender: GitHubUser,
}
