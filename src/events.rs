//! Webhook payloads describing the event that triggered a workflow run.
//!
//! https://docs.github.com/en/webhooks/webhook-events-and-payloads

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize, Serializer};
use url::Url;

use crate::{error::DecodeError, utils::shorten_content};

mod check_run;
mod check_suite;
mod commit_comment;
mod content_reference;
mod create;
mod delete;
mod deploy_key;
mod deployment;
mod deployment_status;
mod fork;
mod github_app_authorization;
mod gollum;
mod installation;
mod installation_repositories;
mod issue_comment;
mod issues;
mod label;
mod marketplace_purchase;
mod member;
mod membership;
mod meta;
mod milestone;
mod org_block;
mod organization;
mod package;
mod page_build;
mod ping;
mod project;
mod project_card;
mod project_column;
mod public;
mod pull_request;
mod pull_request_review;
mod pull_request_review_comment;
mod push;
mod release;
mod repository;
mod repository_dispatch;
mod repository_vulnerability_alert;
mod star;
mod status;
mod team;
mod team_add;
mod user;
mod watch;
mod workflow_dispatch;
mod workflow_run;

pub use check_run::*;
pub use check_suite::*;
pub use commit_comment::*;
pub use content_reference::*;
pub use create::*;
pub use delete::*;
pub use deploy_key::*;
pub use deployment::*;
pub use deployment_status::*;
pub use fork::*;
pub use github_app_authorization::*;
pub use gollum::*;
pub use installation::*;
pub use installation_repositories::*;
pub use issue_comment::*;
pub use issues::*;
pub use label::*;
pub use marketplace_purchase::*;
pub use member::*;
pub use membership::*;
pub use meta::*;
pub use milestone::*;
pub use org_block::*;
pub use organization::*;
pub use package::*;
pub use page_build::*;
pub use ping::*;
pub use project::*;
pub use project_card::*;
pub use project_column::*;
pub use public::*;
pub use pull_request::*;
pub use pull_request_review::*;
pub use pull_request_review_comment::*;
pub use push::*;
pub use release::*;
pub use repository::*;
pub use repository_dispatch::*;
pub use repository_vulnerability_alert::*;
pub use star::*;
pub use status::*;
pub use team::*;
pub use team_add::*;
pub use user::*;
pub use watch::*;
pub use workflow_dispatch::*;
pub use workflow_run::*;

/// Declares [`EventType`] and [`GitHubEvent`] from a single table, so an event name can never be
/// accepted without a matching payload shape.
macro_rules! github_events {
    ($($variant:ident($payload:ty) => $name:literal,)+) => {
        /// Name of a webhook event, as found in `GITHUB_EVENT_NAME`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventType {
            $($variant,)+
        }

        impl EventType {
            /// Every event type the decoder knows about.
            pub const ALL: &'static [EventType] = &[$(EventType::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(EventType::$variant => $name,)+
                }
            }
        }

        impl FromStr for EventType {
            type Err = DecodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(EventType::$variant),)+
                    _ => Err(DecodeError::UnknownEvent(s.to_owned())),
                }
            }
        }

        /// A decoded webhook payload, tagged by its event type.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum GitHubEvent {
            $($variant($payload),)+
        }

        impl GitHubEvent {
            /// Deserializes `bytes` as the payload of an `event_type` event.
            pub fn decode(event_type: EventType, bytes: &[u8]) -> Result<Self, DecodeError> {
                let event = match event_type {
                    $(EventType::$variant => serde_json::from_slice(bytes).map(GitHubEvent::$variant),)+
                };

                event.map_err(|source| DecodeError::Json {
                    event: event_type,
                    source,
                })
            }

            pub fn event_type(&self) -> EventType {
                match self {
                    $(GitHubEvent::$variant(_) => EventType::$variant,)+
                }
            }

            /// The user that triggered the event.
            pub fn sender(&self) -> &GitHubUser {
                match self {
                    $(GitHubEvent::$variant(event) => &event.sender,)+
                }
            }
        }
    };
}

github_events! {
    CheckRun(CheckRunEvent) => "check_run",
    CheckSuite(CheckSuiteEvent) => "check_suite",
    CommitComment(CommitCommentEvent) => "commit_comment",
    ContentReference(ContentReferenceEvent) => "content_reference",
    Create(CreateEvent) => "create",
    Delete(DeleteEvent) => "delete",
    Deployment(DeploymentEvent) => "deployment",
    DeploymentStatus(DeploymentStatusEvent) => "deployment_status",
    DeployKey(DeployKeyEvent) => "deploy_key",
    Fork(ForkEvent) => "fork",
    GitHubAppAuthorization(GitHubAppAuthorizationEvent) => "github_app_authorization",
    Gollum(GollumEvent) => "gollum",
    Installation(InstallationEvent) => "installation",
    InstallationRepositories(InstallationRepositoriesEvent) => "installation_repositories",
    IssueComment(IssueCommentEvent) => "issue_comment",
    Issues(IssuesEvent) => "issues",
    Label(LabelEvent) => "label",
    MarketplacePurchase(MarketplacePurchaseEvent) => "marketplace_purchase",
    Member(MemberEvent) => "member",
    Membership(MembershipEvent) => "membership",
    Meta(MetaEvent) => "meta",
    Milestone(MilestoneEvent) => "milestone",
    OrgBlock(OrgBlockEvent) => "org_block",
    Organization(OrganizationEvent) => "organization",
    Package(PackageEvent) => "package",
    PageBuild(PageBuildEvent) => "page_build",
    Ping(PingEvent) => "ping",
    Project(ProjectEvent) => "project",
    ProjectCard(ProjectCardEvent) => "project_card",
    ProjectColumn(ProjectColumnEvent) => "project_column",
    Public(PublicEvent) => "public",
    PullRequest(PullRequestEvent) => "pull_request",
    PullRequestReview(PullRequestReviewEvent) => "pull_request_review",
    PullRequestReviewComment(PullRequestReviewCommentEvent) => "pull_request_review_comment",
    Push(PushEvent) => "push",
    Release(ReleaseEvent) => "release",
    Repository(RepositoryEvent) => "repository",
    RepositoryDispatch(RepositoryDispatchEvent) => "repository_dispatch",
    RepositoryVulnerabilityAlert(RepositoryVulnerabilityAlertEvent) => "repository_vulnerability_alert",
    Star(StarEvent) => "star",
    Status(StatusEvent) => "status",
    Team(TeamEvent) => "team",
    TeamAdd(TeamAddEvent) => "team_add",
    User(UserEvent) => "user",
    Watch(WatchEvent) => "watch",
    WorkflowDispatch(WorkflowDispatchEvent) => "workflow_dispatch",
    WorkflowRun(WorkflowRunEvent) => "workflow_run",
}

/// Looks up `event_name` and decodes `bytes` as the matching payload.
pub fn parse_webhook(event_name: &str, bytes: &[u8]) -> Result<GitHubEvent, DecodeError> {
    let event_type = event_name.parse()?;
    GitHubEvent::decode(event_type, bytes)
}

impl Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Display for GitHubEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.event_type(), self.sender().login)?;

        match self {
            GitHubEvent::Push(event) => {
                let count = event.commits.len();
                let plural = if count == 1 { "" } else { "s" };
                write!(f, " pushed {} commit{} to {}", count, plural, event.r#ref)?;
                if let Some(head) = &event.head_commit {
                    write!(f, ": {}", shorten_content(head.title()))?;
                }
                Ok(())
            }
            GitHubEvent::PullRequest(event) => write!(f, " {} {}", event.action, event.pull_request),
            GitHubEvent::Issues(event) => write!(f, " {} issue {}", event.action, event.issue),
            GitHubEvent::IssueComment(event) => {
                write!(f, " {} a comment on {}", event.action, event.issue)
            }
            GitHubEvent::Create(event) => write!(f, " created {} {}", event.ref_type, event.r#ref),
            GitHubEvent::Delete(event) => write!(f, " deleted {} {}", event.ref_type, event.r#ref),
            GitHubEvent::Release(event) => {
                write!(f, " {} release {}", event.action, event.release.tag_name)
            }
            GitHubEvent::WorkflowDispatch(event) => {
                write!(f, " dispatched {} on {}", event.workflow, event.r#ref)
            }
            GitHubEvent::WorkflowRun(event) => write!(
                f,
                " {} run #{} of {}",
                event.action,
                event.workflow_run.run_number,
                event.workflow_run.name.as_deref().unwrap_or("a workflow"),
            ),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    Branch,
    Tag,
    Repository,
}

impl Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RefType::Branch => "branch",
            RefType::Tag => "tag",
            RefType::Repository => "repository",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub login: String,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: Url,
    pub owner: GitHubUser,
    pub default_branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub html_url: Url,
    pub title: String,
    pub user: GitHubUser,
    pub state: String,
    pub milestone: Option<Milestone>,
    // an issue can be a PR, in this case the object contains a `pull_request` key with urls to the
    // PR
    pub pull_request: Option<PullRequestLinks>,
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({})", self.number, shorten_content(&self.title))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub html_url: Url,
    pub body: String,
    pub user: GitHubUser,
    pub commit_id: Option<String>,
    pub path: Option<String>,
    pub position: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub html_url: Url,
    pub title: String,
    pub user: GitHubUser,
    #[serde(default)]
    pub requested_reviewers: Vec<GitHubUser>,
    pub base: PrRef,
    pub head: PrRef,
    pub merged: Option<bool>,
}

impl Display for PullRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PR #{}: {} by {}",
            self.number,
            shorten_content(&self.title),
            self.user.login
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrRef {
    pub r#ref: String,
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestLinks {
    pub html_url: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub id: u64,
    pub description: Option<String>,
    pub privacy: Option<String>,
    pub permission: Option<String>,
    pub html_url: Option<Url>,
}
