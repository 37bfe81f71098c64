//! Event candidacy classification.
//!
//! Decides whether an event can carry a command at all, and which text body
//! to match against. Pure function of the event.

use crate::event::TriggerEvent;

/// The classification of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// The event can never trigger a command (a comment on a plain issue).
    NotACandidate,

    /// The event is a candidate; `body` is the text to match. A candidate
    /// with no body simply fails to match downstream.
    Candidate { body: Option<&'a str> },
}

/// Classifies an event, selecting the command-bearing body.
///
/// Comments on plain issues are never candidates: commands ride on PR
/// comments or on the PR description itself.
pub fn classify(event: &TriggerEvent) -> Classification<'_> {
    match event {
        TriggerEvent::IssueComment(comment) if !comment.is_pull_request => {
            Classification::NotACandidate
        }
        TriggerEvent::IssueComment(comment) => Classification::Candidate {
            body: comment.body.as_deref(),
        },
        TriggerEvent::PullRequest(pr) => Classification::Candidate {
            body: pr.body.as_deref(),
        },
    }
}
