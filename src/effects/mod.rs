//! Effects-as-data for GitHub and Git operations.
//!
//! This module defines effect types that describe operations without
//! executing them. This enables:
//! - Pure decision logic that selects effects as data
//! - Testability via mock interpreters
//! - Logging/tracing of intended operations
//!
//! The interpreters that execute these effects live in the `github` and
//! `git` modules.

pub mod git;
pub mod github;
pub mod interpreter;

pub use git::{GitEffect, GitResponse};
pub use github::{GitHubEffect, GitHubResponse, Reaction};
pub use interpreter::{GitHubInterpreter, GitInterpreter};
