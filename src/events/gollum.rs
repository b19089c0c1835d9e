use serde::{Deserialize, Serialize};
use url::Url;

use crate::events::{GitHubUser, Repository};

/// One or more wiki pages were created or updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GollumEvent {
    pub pages: Vec<WikiPage>,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPage {
    pub page_name: String,
    pub title: String,
    pub action: String,
    pub sha: String,
    pub html_url: Url,
}
