//! Command Trigger - evaluates chat-style commands in GitHub events.
//!
//! Given the event one workflow run was started for (a PR comment or a PR
//! body), this library decides whether the event triggers a command, extracts
//! the command's arguments via a named-capture pattern, enforces a role gate,
//! and runs the acknowledge/reply/checkout effects with per-effect failure
//! containment.

pub mod authorize;
pub mod classify;
pub mod config;
pub mod driver;
pub mod effects;
pub mod event;
pub mod git;
pub mod github;
pub mod outputs;
pub mod pattern;
pub mod types;
