//! The trigger evaluation driver.
//!
//! One linear decision sequence per run:
//!
//! 1. classify the event (candidate or not, which body)
//! 2. match the body against the configured pattern
//! 3. check the author's role
//! 4. emit outputs, then run the acknowledge/reply/checkout effects
//!
//! Outputs are always emitted before any effect runs, so consumers reading
//! them are never blocked on a slow or failing effect. Each effect failure
//! is caught here, attributed to the effect's name in the run report, and
//! never blocks a sibling effect. Self-cancellation fires only on the
//! non-trigger branches, and only when enabled.


use std::fmt::Display;
use std::io::Write;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::authorize::is_authorized;
use crate::classify::{Classification, classify};
use crate::config::{Inputs, RunnerContext};
use crate::effects::git::pr_branch_name;
use crate::effects::{GitEffect, GitHubEffect, GitHubInterpreter, GitInterpreter, Reaction};
use crate::event::TriggerEvent;
use crate::outputs::OutputWriter;
use crate::pattern::{MatchResult, PatternError, PatternRegistry};

/// An unrecoverable run error.
///
/// Effect failures are not run errors; they are contained and recorded in
/// the [`RunReport`]. What aborts a run is a configuration problem (a
/// pattern that does not compile) or losing the output sink.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configured pattern does not compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The output sink could not be written.
    #[error("failed to write outputs: {0}")]
    Output(#[from] std::io::Error),
}

/// A contained effect failure, attributed by effect name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectFailure {
    /// The effect that failed (`react`, `reply`, `checkout`, `cancel`).
    pub effect: &'static str,
    /// The failure description.
    pub message: String,
}

/// The externally observable result of one run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Whether the event triggered the command.
    pub triggered: bool,

    /// Contained effect failures, in occurrence order.
    pub failures: Vec<EffectFailure>,
}

impl RunReport {
    /// True when no effect failure was recorded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn fail(&mut self, effect: &'static str, err: impl Display) {
        error!(effect, error = %err, "effect failed");
        self.failures.push(EffectFailure {
            effect,
            message: err.to_string(),
        });
    }
}

/// Evaluates one event against one command configuration.
///
/// Generic over the effect interpreters so the decision sequence can be
/// exercised with mocks.
#[derive(Debug)]
pub struct Driver<'a, G, V> {
    inputs: &'a Inputs,
    ctx: &'a RunnerContext,
    github: &'a G,
    git: &'a V,
}

impl<'a, G, V> Driver<'a, G, V>
where
    G: GitHubInterpreter,
    G::Error: Display,
    V: GitInterpreter,
    V::Error: Display,
{
    pub fn new(inputs: &'a Inputs, ctx: &'a RunnerContext, github: &'a G, git: &'a V) -> Self {
        Driver {
            inputs,
            ctx,
            github,
            git,
        }
    }

    /// Runs the decision sequence to completion.
    ///
    /// `event` is `None` when the runtime delivered an event kind that never
    /// carries commands; such runs take the same exit as a plain issue
    /// comment. Always reaches a terminal state; there is no retry loop.
    pub async fn run<W: Write>(
        &self,
        event: Option<&TriggerEvent>,
        patterns: &mut PatternRegistry,
        outputs: &mut OutputWriter<W>,
    ) -> Result<RunReport, RunError> {
        let mut report = RunReport::default();

        let Some(event) = event else {
            info!("event kind does not carry commands");
            self.emit_non_trigger(outputs, &mut report).await?;
            return Ok(report);
        };

        let body = match classify(event) {
            Classification::NotACandidate => {
                info!("not a pull request comment");
                self.emit_non_trigger(outputs, &mut report).await?;
                return Ok(report);
            }
            Classification::Candidate { body } => body.unwrap_or(""),
        };

        let fields = match patterns.extract(body, &self.inputs.pattern)? {
            MatchResult::NoMatch => {
                info!(pattern = %self.inputs.pattern, "body does not match pattern");
                self.emit_non_trigger(outputs, &mut report).await?;
                return Ok(report);
            }
            MatchResult::Matched(fields) => fields,
        };

        if !is_authorized(event.author_association(), &self.inputs.required_role) {
            info!(
                role = %self.inputs.required_role,
                "author does not hold the required role"
            );
            let message = format!(
                "Role {} is required to execute command.",
                self.inputs.required_role
            );
            // The notice is best-effort on a run that is already not
            // triggering; its failure is not recorded.
            if let Err(err) = self.post_comment(event, message).await {
                debug!(error = %err, "could not post the role notice");
            }
            outputs.set_bool("triggered", false)?;
            return Ok(report);
        }

        report.triggered = true;
        outputs.set_bool("triggered", true)?;
        for (name, value) in fields.iter() {
            outputs.set(name, value)?;
        }
        outputs.set("command", &fields.to_json().to_string())?;

        if let Err(err) = self.acknowledge(event).await {
            report.fail("react", err);
        }

        if self.inputs.reply_on_trigger {
            let message = format!("Executed workflow: {}", self.ctx.workflow_url());
            if let Err(err) = self.post_comment(event, message).await {
                report.fail("reply", err);
            }
        }

        if self.inputs.checkout_on_trigger {
            if let Err(err) = self.checkout(event).await {
                report.fail("checkout", err);
            }
        }

        Ok(report)
    }

    /// Terminal handling shared by every non-trigger branch: emit the
    /// outcome, then self-cancel when that policy is enabled.
    async fn emit_non_trigger<W: Write>(
        &self,
        outputs: &mut OutputWriter<W>,
        report: &mut RunReport,
    ) -> Result<(), RunError> {
        outputs.set_bool("triggered", false)?;
        if self.inputs.cancel_on_no_match {
            let effect = GitHubEffect::CancelWorkflowRun {
                run_id: self.ctx.run_id,
            };
            if let Err(err) = self.github.interpret(effect).await {
                report.fail("cancel", err);
            }
        }
        Ok(())
    }

    /// Posts the thumbs-up acknowledgment: on the comment for comment
    /// events, on the issue/PR itself otherwise.
    async fn acknowledge(&self, event: &TriggerEvent) -> Result<(), G::Error> {
        let effect = match event {
            TriggerEvent::IssueComment(comment) => GitHubEffect::AddCommentReaction {
                comment_id: comment.comment_id,
                reaction: Reaction::ThumbsUp,
            },
            TriggerEvent::PullRequest(pr) => GitHubEffect::AddIssueReaction {
                issue: pr.number,
                reaction: Reaction::ThumbsUp,
            },
        };
        self.github.interpret(effect).await?;
        Ok(())
    }

    /// Posts a comment addressed to the acting user.
    async fn post_comment(&self, event: &TriggerEvent, message: String) -> Result<(), G::Error> {
        let effect = GitHubEffect::PostComment {
            issue: event.number(),
            body: format!("@{} {}", self.ctx.actor, message),
        };
        self.github.interpret(effect).await?;
        Ok(())
    }

    /// Clones the event repository into the workspace and checks out the PR
    /// head. The clone failing skips the checkout; both surface as one
    /// `checkout` failure.
    async fn checkout(&self, event: &TriggerEvent) -> Result<(), V::Error> {
        self.git
            .interpret(GitEffect::Clone {
                repo: event.repo().clone(),
                dest: self.ctx.workspace.clone(),
            })
            .await?;
        let pr = event.number();
        self.git
            .interpret(GitEffect::CheckoutPrHead {
                pr,
                branch: pr_branch_name(pr),
            })
            .await?;
        Ok(())
    }
}
