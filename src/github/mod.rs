//! GitHub API client and effect interpreter.
//!
//! This module provides the implementation for executing GitHub effects via
//! the octocrab library. It implements the `GitHubInterpreter` trait defined
//! in the effects module.
//!
//! Every effect is attempted exactly once: the caller owns the failure
//! policy, so there is no retry layer here.

mod client;
mod error;
mod interpreter;

pub use client::OctocrabClient;
pub use error::GitHubApiError;
