//! Effect interpreter traits.
//!
//! These traits define how effects are executed. The real implementations
//! live in the `github` module (octocrab-based API calls) and the `git`
//! module (subprocess git).
//!
//! The trait-based design enables:
//! - Mock interpreters for testing the driver without network or disk
//! - Logging/tracing interpreters
//!
//! # Example (mock for testing)
//!
//! ```ignore
//! struct MockGitHub {
//!     recorded: Mutex<Vec<GitHubEffect>>,
//! }
//!
//! impl GitHubInterpreter for MockGitHub {
//!     type Error = String;
//!
//!     async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
//!         self.recorded.lock().unwrap().push(effect);
//!         Ok(GitHubResponse::ReactionAdded)
//!     }
//! }
//! ```

use std::future::Future;

use super::git::{GitEffect, GitResponse};
use super::github::{GitHubEffect, GitHubResponse};

/// Interprets GitHub effects against the GitHub API.
///
/// Implementations are constructed with a repository, so all effects
/// executed through a single interpreter instance are scoped to it.
pub trait GitHubInterpreter {
    /// The error type returned by this interpreter.
    type Error;

    /// Execute a GitHub effect and return its response.
    ///
    /// One call is one attempt: the caller owns the failure policy, so
    /// implementations must not retry internally.
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<GitHubResponse, Self::Error>> + Send;
}

/// Interprets git effects against a local working directory.
pub trait GitInterpreter {
    /// The error type returned by this interpreter.
    type Error;

    /// Execute a git effect and return its response.
    fn interpret(
        &self,
        effect: GitEffect,
    ) -> impl Future<Output = Result<GitResponse, Self::Error>> + Send;
}
