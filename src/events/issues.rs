use serde::{Deserialize, Serialize};

use crate::events::{GitHubUser, Issue, Repository};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuesEvent {
    pub action: String,
    pub issue: Issue,
    pub changes: Option<IssueChanges>,
    pub assignee: Option<GitHubUser>,
    pub repository: Repository,
    pub sender: GitHubUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueChanges {
    pub title: Option<ChangedFrom>,
    pub body: Option<ChangedFrom>,
}

/// Previous value of an edited field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangedFrom<T = String> {
    pub from: T,
}
