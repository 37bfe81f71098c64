//! GitHub effect interpreter using octocrab.
//!
//! This module implements the `GitHubInterpreter` trait, executing GitHub
//! effects against the real GitHub API via octocrab.
//!
//! Reactions use the low-level REST routes (octocrab has no high-level
//! reactions API); comments and run cancellation go through the typed
//! handlers.

use serde::Serialize;

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse, Reaction};
use crate::types::{CommentId, PrNumber, RunId};

use super::client::OctocrabClient;
use super::error::GitHubApiError;

impl GitHubInterpreter for OctocrabClient {
    type Error = GitHubApiError;

    async fn interpret(&self, effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
        match effect {
            GitHubEffect::AddCommentReaction {
                comment_id,
                reaction,
            } => add_comment_reaction(self, comment_id, reaction).await,
            GitHubEffect::AddIssueReaction { issue, reaction } => {
                add_issue_reaction(self, issue, reaction).await
            }
            GitHubEffect::PostComment { issue, body } => post_comment(self, issue, body).await,
            GitHubEffect::CancelWorkflowRun { run_id } => cancel_workflow_run(self, run_id).await,
        }
    }
}

#[derive(Serialize)]
struct ReactionRequest {
    content: &'static str,
}

async fn add_comment_reaction(
    client: &OctocrabClient,
    comment_id: CommentId,
    reaction: Reaction,
) -> Result<GitHubResponse, GitHubApiError> {
    let url = format!(
        "/repos/{}/{}/issues/comments/{}/reactions",
        client.owner(),
        client.repo_name(),
        comment_id.0
    );

    let result: Result<serde_json::Value, _> = client
        .inner()
        .post(
            &url,
            Some(&ReactionRequest {
                content: reaction.as_api_str(),
            }),
        )
        .await;

    match result {
        Ok(_) => Ok(GitHubResponse::ReactionAdded),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn add_issue_reaction(
    client: &OctocrabClient,
    issue: PrNumber,
    reaction: Reaction,
) -> Result<GitHubResponse, GitHubApiError> {
    let url = format!(
        "/repos/{}/{}/issues/{}/reactions",
        client.owner(),
        client.repo_name(),
        issue.0
    );

    let result: Result<serde_json::Value, _> = client
        .inner()
        .post(
            &url,
            Some(&ReactionRequest {
                content: reaction.as_api_str(),
            }),
        )
        .await;

    match result {
        Ok(_) => Ok(GitHubResponse::ReactionAdded),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn post_comment(
    client: &OctocrabClient,
    issue: PrNumber,
    body: String,
) -> Result<GitHubResponse, GitHubApiError> {
    let result = client
        .inner()
        .issues(client.owner(), client.repo_name())
        .create_comment(issue.0, body)
        .await;

    match result {
        Ok(comment) => Ok(GitHubResponse::CommentPosted {
            id: CommentId(comment.id.into_inner()),
        }),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}

async fn cancel_workflow_run(
    client: &OctocrabClient,
    run_id: RunId,
) -> Result<GitHubResponse, GitHubApiError> {
    let result = client
        .inner()
        .actions()
        .cancel_workflow_run(
            client.owner(),
            client.repo_name(),
            octocrab::models::RunId::from(run_id.0),
        )
        .await;

    match result {
        Ok(()) => Ok(GitHubResponse::RunCancelled),
        Err(e) => Err(GitHubApiError::from_octocrab(e)),
    }
}
