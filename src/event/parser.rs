//! Event payload parser.
//!
//! Parses the raw event JSON supplied by the hosting runtime into a typed
//! [`TriggerEvent`]. The parser is robust against unknown fields and event
//! names.
//!
//! # Parsing Strategy
//!
//! 1. The event kind is determined from the runtime's event-name variable
//! 2. The payload is parsed according to the event kind
//! 3. Unknown event kinds return `Ok(None)` (ignored, not error)
//! 4. Malformed payloads return `Err` with details

use serde::Deserialize;
use thiserror::Error;

use crate::types::{CommentId, PrNumber, RepoId};

use super::{IssueCommentEvent, PullRequestEvent, TriggerEvent};

/// Error type for payload parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization failed (includes missing required fields).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses an event payload into a typed event.
///
/// # Arguments
///
/// * `event_name` - The runtime's event name (e.g., "issue_comment")
/// * `payload` - The raw JSON payload bytes
///
/// # Returns
///
/// * `Ok(Some(event))` - Successfully parsed a known event kind
/// * `Ok(None)` - Unknown event kind (ignored, not an error)
/// * `Err(e)` - Malformed payload or missing required fields
///
/// # Examples
///
/// ```
/// use command_trigger::event::parse_event;
///
/// let payload = br#"{
///     "comment": {
///         "id": 123,
///         "body": "/deploy env=staging",
///         "author_association": "MEMBER"
///     },
///     "issue": {
///         "number": 42,
///         "pull_request": { "url": "..." }
///     },
///     "repository": {
///         "owner": { "login": "owner" },
///         "name": "repo"
///     }
/// }"#;
///
/// let event = parse_event("issue_comment", payload).unwrap();
/// assert!(event.is_some());
/// ```
pub fn parse_event(event_name: &str, payload: &[u8]) -> Result<Option<TriggerEvent>, ParseError> {
    match event_name {
        "issue_comment" => parse_issue_comment(payload).map(|e| Some(TriggerEvent::IssueComment(e))),
        "pull_request" => parse_pull_request(payload).map(|e| Some(TriggerEvent::PullRequest(e))),
        // Unknown event kinds are ignored (not an error)
        _ => Ok(None),
    }
}

// ============================================================================
// Raw payload structures for deserialization
//
// These match GitHub's event JSON structure. We use Option<T> liberally to
// handle missing fields gracefully; the typed event keeps what is genuinely
// optional as Option and the rest as required fields.
// ============================================================================

/// Minimal repository info present in all event payloads.
#[derive(Debug, Deserialize)]
struct RawRepository {
    owner: RawOwner,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawOwner {
    login: String,
}

// ============================================================================
// issue_comment event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawIssueCommentPayload {
    comment: RawComment,
    issue: RawIssue,
    repository: RawRepository,
}

#[derive(Debug, Deserialize)]
struct RawComment {
    id: u64,
    body: Option<String>,
    author_association: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    number: u64,
    // If this field is present, the issue is actually a PR
    pull_request: Option<serde_json::Value>,
}

fn parse_issue_comment(payload: &[u8]) -> Result<IssueCommentEvent, ParseError> {
    let raw: RawIssueCommentPayload = serde_json::from_slice(payload)?;

    Ok(IssueCommentEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        number: PrNumber(raw.issue.number),
        is_pull_request: raw.issue.pull_request.is_some(),
        comment_id: CommentId(raw.comment.id),
        body: raw.comment.body,
        author_association: raw.comment.author_association,
    })
}

// ============================================================================
// pull_request event
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawPullRequestPayload {
    pull_request: RawPullRequest,
    repository: RawRepository,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    number: u64,
    body: Option<String>,
    author_association: Option<String>,
}

fn parse_pull_request(payload: &[u8]) -> Result<PullRequestEvent, ParseError> {
    let raw: RawPullRequestPayload = serde_json::from_slice(payload)?;

    Ok(PullRequestEvent {
        repo: RepoId::new(raw.repository.owner.login, raw.repository.name),
        number: PrNumber(raw.pull_request.number),
        body: raw.pull_request.body,
        author_association: raw.pull_request.author_association,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pr_comment() {
        let payload = br#"{
            "action": "created",
            "comment": {
                "id": 9001,
                "body": "/deploy env=staging",
                "author_association": "MEMBER",
                "user": { "id": 1, "login": "octocat" }
            },
            "issue": {
                "number": 42,
                "pull_request": { "url": "https://api.github.com/repos/o/r/pulls/42" }
            },
            "repository": {
                "owner": { "login": "octo-org" },
                "name": "widgets"
            }
        }"#;

        let event = parse_event("issue_comment", payload).unwrap().unwrap();
        let TriggerEvent::IssueComment(comment) = event else {
            panic!("expected issue comment event");
        };
        assert_eq!(comment.repo, RepoId::new("octo-org", "widgets"));
        assert_eq!(comment.number, PrNumber(42));
        assert!(comment.is_pull_request);
        assert_eq!(comment.comment_id, CommentId(9001));
        assert_eq!(comment.body.as_deref(), Some("/deploy env=staging"));
        assert_eq!(comment.author_association.as_deref(), Some("MEMBER"));
    }

    #[test]
    fn plain_issue_comment_has_no_pull_request_marker() {
        let payload = br#"{
            "comment": { "id": 7, "body": "hello" },
            "issue": { "number": 3 },
            "repository": { "owner": { "login": "o" }, "name": "r" }
        }"#;

        let event = parse_event("issue_comment", payload).unwrap().unwrap();
        let TriggerEvent::IssueComment(comment) = event else {
            panic!("expected issue comment event");
        };
        assert!(!comment.is_pull_request);
        assert_eq!(comment.author_association, None);
    }

    #[test]
    fn parses_pull_request_body() {
        let payload = br#"{
            "action": "opened",
            "pull_request": {
                "number": 5,
                "body": "/release channel=beta",
                "author_association": "OWNER"
            },
            "repository": { "owner": { "login": "o" }, "name": "r" }
        }"#;

        let event = parse_event("pull_request", payload).unwrap().unwrap();
        let TriggerEvent::PullRequest(pr) = event else {
            panic!("expected pull request event");
        };
        assert_eq!(pr.number, PrNumber(5));
        assert_eq!(pr.body.as_deref(), Some("/release channel=beta"));
        assert_eq!(pr.author_association.as_deref(), Some("OWNER"));
    }

    #[test]
    fn unknown_event_kind_is_ignored() {
        assert!(parse_event("push", b"{}").unwrap().is_none());
        assert!(parse_event("workflow_dispatch", b"{}").unwrap().is_none());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(parse_event("issue_comment", b"{").is_err());
        assert!(parse_event("pull_request", b"{\"repository\": {}}").is_err());
    }

    #[test]
    fn null_body_parses_as_none() {
        let payload = br#"{
            "pull_request": { "number": 1, "body": null },
            "repository": { "owner": { "login": "o" }, "name": "r" }
        }"#;

        let event = parse_event("pull_request", payload).unwrap().unwrap();
        let TriggerEvent::PullRequest(pr) = event else {
            panic!("expected pull request event");
        };
        assert_eq!(pr.body, None);
    }
}
