use serde::{Deserialize, Serialize};

use crate::events::{ChangedFrom, GitHubUser, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEvent {
    pub action: String,
    pub repository: Repository,
    pub sender: GitHubUser,
    // only set for 'edited' and 'renamed'
    pub changes: Option<RepositoryChanges>,
}

/// Which attributes changed, one key per attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryChanges {
    // 'renamed'
    pub repository: Option<RepositoryChangesName>,
    // 'edited'
    pub description: Option<ChangedFrom<Option<String>>>,
    pub default_branch: Option<ChangedFrom>,
    pub homepage: Option<ChangedFrom<Option<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryChangesName {
    pub name: ChangedFrom,
}
