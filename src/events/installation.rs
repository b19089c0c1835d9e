use serde::{Deserialize, Serialize};

use crate::events::GitHubUser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationEvent {
    pub action: String,
    pub installation: Installation,
    pub repositories: Option<Vec<InstallationRepository>>,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    pub id: u64,
    pub app_id: u64,
    pub account: GitHubUser,
    pub target_type: String,
    pub repository_selection: Option<String>,
}

/// The short repository form used by app installation payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationRepository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
}
