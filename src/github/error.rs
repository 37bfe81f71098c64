//! GitHub API error type.
//!
//! A single failed API call is a contained effect failure, not a run
//! failure, so this type carries what the run report needs: the HTTP status
//! (when the platform returned one) and a human-readable message, with the
//! underlying octocrab error as source.

use std::fmt;

use thiserror::Error;

/// A GitHub API error.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    /// The HTTP status code, if the API responded with one.
    pub status_code: Option<u16>,

    /// A human-readable description of the error.
    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    /// Wraps an octocrab error, extracting the HTTP status where present.
    pub fn from_octocrab(err: octocrab::Error) -> Self {
        let status_code = match &err {
            octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
            _ => None,
        };
        Self {
            status_code,
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Creates an error without an octocrab source.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status_code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error from an unexpected HTTP status.
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status),
            message: message.into(),
            source: None,
        }
    }
}
