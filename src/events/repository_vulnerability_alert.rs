use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryVulnerabilityAlertEvent {
    pub action: String,
    pub alert: VulnerabilityAlert,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityAlert {
    pub id: u64,
    pub affected_range: String,
    pub affected_package_name: String,
    pub external_reference: Option<String>,
    pub external_identifier: Option<String>,
    pub fixed_in: Option<String>,
}
