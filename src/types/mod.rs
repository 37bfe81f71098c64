//! Core domain types for the command trigger.
//!
//! This module contains the fundamental identifier types used throughout the
//! application, designed to encode invariants via the type system.

pub mod ids;

pub use ids::{CommentId, ParseRepoIdError, PrNumber, RepoId, RunId};
