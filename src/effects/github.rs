//! GitHub API effect types.
//!
//! These types describe GitHub API operations as data, without executing
//! them. The interpreter in the `github` module executes them against the
//! actual GitHub API.

use crate::types::{CommentId, PrNumber, RunId};

/// GitHub reaction types.
///
/// These correspond to the reactions available on GitHub comments and
/// issues/PRs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    /// +1 / thumbs up
    ThumbsUp,
    /// -1 / thumbs down
    ThumbsDown,
    /// Laugh
    Laugh,
    /// Hooray / tada
    Hooray,
    /// Confused
    Confused,
    /// Heart
    Heart,
    /// Rocket
    Rocket,
    /// Eyes
    Eyes,
}

impl Reaction {
    /// Returns the GitHub API content string for this reaction.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Reaction::ThumbsUp => "+1",
            Reaction::ThumbsDown => "-1",
            Reaction::Laugh => "laugh",
            Reaction::Hooray => "hooray",
            Reaction::Confused => "confused",
            Reaction::Heart => "heart",
            Reaction::Rocket => "rocket",
            Reaction::Eyes => "eyes",
        }
    }
}

/// A GitHub API effect.
///
/// Each variant describes one API operation. Effects are repo-scoped: the
/// interpreter is constructed with a repository, so effects don't include it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GitHubEffect {
    /// Add a reaction to a comment.
    AddCommentReaction {
        comment_id: CommentId,
        reaction: Reaction,
    },

    /// Add a reaction to an issue or PR itself.
    AddIssueReaction { issue: PrNumber, reaction: Reaction },

    /// Post a new comment on an issue or PR.
    PostComment { issue: PrNumber, body: String },

    /// Cancel a workflow run.
    ///
    /// Used for self-cancellation: the run asks the platform to stop its own
    /// in-progress execution.
    CancelWorkflowRun { run_id: RunId },
}

/// Response from a GitHub effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubResponse {
    /// Response to `AddCommentReaction` / `AddIssueReaction`.
    ReactionAdded,

    /// Response to `PostComment`.
    CommentPosted {
        /// The ID of the newly created comment.
        id: CommentId,
    },

    /// Response to `CancelWorkflowRun`.
    RunCancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_str_values() {
        assert_eq!(Reaction::ThumbsUp.as_api_str(), "+1");
        assert_eq!(Reaction::ThumbsDown.as_api_str(), "-1");
        assert_eq!(Reaction::Laugh.as_api_str(), "laugh");
        assert_eq!(Reaction::Hooray.as_api_str(), "hooray");
        assert_eq!(Reaction::Confused.as_api_str(), "confused");
        assert_eq!(Reaction::Heart.as_api_str(), "heart");
        assert_eq!(Reaction::Rocket.as_api_str(), "rocket");
        assert_eq!(Reaction::Eyes.as_api_str(), "eyes");
    }
}
