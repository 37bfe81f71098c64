//! Typed trigger events.
//!
//! This module defines the typed representation of the events the evaluator
//! can be invoked for. Only two event kinds can carry a command:
//!
//! - `issue_comment` - a comment on an issue or PR conversation tab
//! - `pull_request` - a PR lifecycle event, where the PR description is the
//!   command-bearing text
//!
//! Anything else never triggers and is dropped by the payload parser.

mod parser;

pub use parser::{ParseError, parse_event};

use crate::types::{CommentId, PrNumber, RepoId};

/// A parsed trigger event.
///
/// One value of this type exists per run. It is constructed once from the
/// runtime's payload file and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// An issue or PR comment was created.
    ///
    /// Note: In GitHub's API, PR comments on the conversation tab are
    /// delivered as `issue_comment` events, not review-comment events.
    IssueComment(IssueCommentEvent),

    /// A pull request event; the PR description carries the command text.
    PullRequest(PullRequestEvent),
}

/// An issue/PR comment event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCommentEvent {
    /// The repository the comment was posted in.
    pub repo: RepoId,

    /// The issue or PR number the comment is on.
    pub number: PrNumber,

    /// Whether the comment is on a pull request rather than a plain issue.
    ///
    /// Commands are only valid on PRs; plain issue comments never trigger.
    pub is_pull_request: bool,

    /// The comment ID (reaction target).
    pub comment_id: CommentId,

    /// The comment body text.
    pub body: Option<String>,

    /// The commenter's relationship to the repository (e.g. `OWNER`,
    /// `MEMBER`, `CONTRIBUTOR`), as reported by the platform.
    pub author_association: Option<String>,
}

/// A pull request event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// The repository the PR belongs to.
    pub repo: RepoId,

    /// The PR number.
    pub number: PrNumber,

    /// The PR description.
    pub body: Option<String>,

    /// The PR author's relationship to the repository.
    pub author_association: Option<String>,
}

impl TriggerEvent {
    /// Returns the repository this event belongs to.
    pub fn repo(&self) -> &RepoId {
        match self {
            TriggerEvent::IssueComment(e) => &e.repo,
            TriggerEvent::PullRequest(e) => &e.repo,
        }
    }

    /// Returns the issue/PR number this event is about.
    pub fn number(&self) -> PrNumber {
        match self {
            TriggerEvent::IssueComment(e) => e.number,
            TriggerEvent::PullRequest(e) => e.number,
        }
    }

    /// Returns the author association of whoever wrote the command text.
    pub fn author_association(&self) -> Option<&str> {
        match self {
            TriggerEvent::IssueComment(e) => e.author_association.as_deref(),
            TriggerEvent::PullRequest(e) => e.author_association.as_deref(),
        }
    }
}
