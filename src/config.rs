//! Runtime configuration.
//!
//! Two read-once bundles drive a run:
//!
//! - [`Inputs`]: the command configuration the workflow author supplies,
//!   delivered by the runtime as `INPUT_*` environment variables.
//! - [`RunnerContext`]: ambient facts about the run itself (`GITHUB_*`
//!   variables): actor, workspace, repository, run ID, event payload
//!   location and the output file.
//!
//! Both are immutable after construction.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::authorize::ROLE_ALL;
use crate::types::{RepoId, RunId};

/// Errors reading the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required action input is missing.
    #[error("required input `{0}` is not set")]
    MissingInput(&'static str),

    /// A required runtime environment variable is missing.
    #[error("required environment variable `{0}` is not set")]
    MissingEnv(&'static str),

    /// A variable is present but unusable.
    #[error("invalid value for `{name}`: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// The command configuration supplied by the workflow author.
#[derive(Debug, Clone)]
pub struct Inputs {
    /// Credential for the platform API and the authenticated clone.
    pub token: String,

    /// The named-capture pattern to match against the event body.
    pub pattern: String,

    /// Cancel this workflow run when the event does not trigger.
    pub cancel_on_no_match: bool,

    /// Post an acknowledgment comment when the command triggers.
    pub reply_on_trigger: bool,

    /// Author association required to execute the command (`ALL` skips the
    /// check).
    pub required_role: String,

    /// Clone the repository and check out the PR head when triggered.
    pub checkout_on_trigger: bool,
}

impl Inputs {
    /// Reads the inputs from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the inputs through an arbitrary lookup, for tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("INPUT_TOKEN")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingInput("token"))?;
        let pattern = lookup("INPUT_COMMAND")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingInput("command"))?;

        // Boolean inputs are true iff the value is exactly "true"
        let flag = |name: &str| lookup(name).as_deref() == Some("true");

        let required_role = lookup("INPUT_ROLE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ROLE_ALL.to_string());

        Ok(Inputs {
            token,
            pattern,
            cancel_on_no_match: flag("INPUT_CANCEL"),
            reply_on_trigger: flag("INPUT_REPLY"),
            required_role,
            checkout_on_trigger: flag("INPUT_CHECKOUT"),
        })
    }
}

/// Ambient facts about the current run, from the runtime environment.
#[derive(Debug, Clone)]
pub struct RunnerContext {
    /// The user whose action caused the run.
    pub actor: String,

    /// The workspace directory (checkout destination).
    pub workspace: PathBuf,

    /// Home directory, exported to the checkout subprocess.
    pub home: PathBuf,

    /// The repository the workflow runs in.
    pub repository: RepoId,

    /// This workflow run's ID (self-cancellation target).
    pub run_id: RunId,

    /// The name of the event that started the run.
    pub event_name: String,

    /// Path of the event payload JSON file.
    pub event_path: PathBuf,

    /// Path of the output file consumed by downstream steps.
    pub output_path: PathBuf,
}

impl RunnerContext {
    /// Reads the context from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the context through an arbitrary lookup, for tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingEnv(name))
        };

        let repository: RepoId = {
            let raw = required("GITHUB_REPOSITORY")?;
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "GITHUB_REPOSITORY",
                value: raw,
            })?
        };

        let run_id = {
            let raw = required("GITHUB_RUN_ID")?;
            let id: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "GITHUB_RUN_ID",
                value: raw,
            })?;
            RunId(id)
        };

        Ok(RunnerContext {
            actor: required("GITHUB_ACTOR")?,
            workspace: lookup("GITHUB_WORKSPACE")
                .filter(|v| !v.is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
            home: lookup("HOME")
                .filter(|v| !v.is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
            repository,
            run_id,
            event_name: required("GITHUB_EVENT_NAME")?,
            event_path: PathBuf::from(required("GITHUB_EVENT_PATH")?),
            output_path: PathBuf::from(required("GITHUB_OUTPUT")?),
        })
    }

    /// The public URL of this workflow run, used in the trigger reply.
    pub fn workflow_url(&self) -> String {
        format!(
            "https://github.com/{}/actions/runs/{}",
            self.repository, self.run_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_runner_env() -> HashMap<String, String> {
        env_of(&[
            ("GITHUB_ACTOR", "octocat"),
            ("GITHUB_WORKSPACE", "/workspace"),
            ("HOME", "/home/runner"),
            ("GITHUB_REPOSITORY", "octo-org/widgets"),
            ("GITHUB_RUN_ID", "123456"),
            ("GITHUB_EVENT_NAME", "issue_comment"),
            ("GITHUB_EVENT_PATH", "/runner/event.json"),
            ("GITHUB_OUTPUT", "/runner/output"),
        ])
    }

    #[test]
    fn inputs_defaults() {
        let env = env_of(&[
            ("INPUT_TOKEN", "t0ken"),
            ("INPUT_COMMAND", "/deploy env=%{WORD:env}"),
        ]);
        let inputs = Inputs::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(inputs.required_role, ROLE_ALL);
        assert!(!inputs.cancel_on_no_match);
        assert!(!inputs.reply_on_trigger);
        assert!(!inputs.checkout_on_trigger);
    }

    #[test]
    fn boolean_inputs_require_the_exact_word_true() {
        let env = env_of(&[
            ("INPUT_TOKEN", "t"),
            ("INPUT_COMMAND", "/x"),
            ("INPUT_CANCEL", "true"),
            ("INPUT_REPLY", "True"),
            ("INPUT_CHECKOUT", "yes"),
        ]);
        let inputs = Inputs::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert!(inputs.cancel_on_no_match);
        assert!(!inputs.reply_on_trigger);
        assert!(!inputs.checkout_on_trigger);
    }

    #[test]
    fn missing_required_input_is_an_error() {
        let env = env_of(&[("INPUT_COMMAND", "/x")]);
        let err = Inputs::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingInput("token")));
    }

    #[test]
    fn runner_context_parses_repository_and_run_id() {
        let env = full_runner_env();
        let ctx = RunnerContext::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(ctx.repository, RepoId::new("octo-org", "widgets"));
        assert_eq!(ctx.run_id, RunId(123456));
        assert_eq!(
            ctx.workflow_url(),
            "https://github.com/octo-org/widgets/actions/runs/123456"
        );
    }

    #[test]
    fn workspace_and_home_default_to_current_dir() {
        let mut env = full_runner_env();
        env.remove("GITHUB_WORKSPACE");
        env.remove("HOME");
        let ctx = RunnerContext::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(ctx.workspace, PathBuf::from("."));
        assert_eq!(ctx.home, PathBuf::from("."));
    }

    #[test]
    fn malformed_run_id_is_rejected() {
        let mut env = full_runner_env();
        env.insert("GITHUB_RUN_ID".into(), "not-a-number".into());
        let err = RunnerContext::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: "GITHUB_RUN_ID",
                ..
            }
        ));
    }
}
