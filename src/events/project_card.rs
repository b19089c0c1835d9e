use serde::{Deserialize, Serialize};
use url::Url;

use crate::events::{GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCardEvent {
    pub action: String,
    pub project_card: ProjectCard,
    pub repository: Option<Repository>,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: u64,
    pub column_id: u64,
    pub note: Option<String>,
    // set when the card refers to an issue or pull request
    pub content_url: Option<Url>,
}
