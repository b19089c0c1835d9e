use serde::{Deserialize, Serialize};
use url::Url;

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageEvent {
    pub action: String,
    pub package: Package,
    pub repository: Option<Repository>,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: u64,
    pub name: String,
    pub package_type: String,
    pub html_url: Url,
    pub owner: Option<GitHubUser>,
    pub package_version: Option<PackageVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageVersion {
    pub id: u64,
    pub version: String,
    pub html_url: Option<Url>,
}
