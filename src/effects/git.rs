//! Git operation effect types.
//!
//! These types describe the git operations behind the checkout effect as
//! data, without executing them. The interpreter in the `git` module runs
//! them against a local working directory.

use std::path::PathBuf;

use crate::types::{PrNumber, RepoId};

/// A git operation effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GitEffect {
    /// Clone a repository into a destination directory.
    Clone {
        /// The repository to clone.
        repo: RepoId,
        /// The directory to clone into.
        dest: PathBuf,
    },

    /// Fetch a PR's head ref and check it out into a local branch.
    ///
    /// The branch name is derived deterministically from the PR number
    /// (see [`pr_branch_name`]).
    CheckoutPrHead {
        /// The PR whose head to check out.
        pr: PrNumber,
        /// The local branch to create.
        branch: String,
    },
}

/// Response from a git effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitResponse {
    /// Response to `Clone`.
    Cloned,
    /// Response to `CheckoutPrHead`.
    CheckedOut,
}

/// Returns the deterministic local branch name for a PR's head.
pub fn pr_branch_name(pr: PrNumber) -> String {
    format!("pr-{}", pr.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_name_is_derived_from_the_pr_number() {
        assert_eq!(pr_branch_name(PrNumber(42)), "pr-42");
        assert_eq!(pr_branch_name(PrNumber(1)), "pr-1");
    }
}
