use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Installation, InstallationRepository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationRepositoriesEvent {
    pub action: String,
    pub installation: Installation,
    pub repository_selection: String,
    #[serde(default)]
    pub repositories_added: Vec<InstallationRepository>,
    #[serde(default)]
    pub repositories_removed: Vec<InstallationRepository>,
    pub sender: GitHubUser,
}
