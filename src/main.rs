use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command_trigger::config::{Inputs, RunnerContext};
use command_trigger::driver::{Driver, RunReport};
use command_trigger::event::parse_event;
use command_trigger::git::GitCheckout;
use command_trigger::github::OctocrabClient;
use command_trigger::outputs::OutputWriter;
use command_trigger::pattern::PatternRegistry;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "command_trigger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(report) if report.is_clean() => ExitCode::SUCCESS,
        Ok(report) => {
            // Individual failures were already logged where they happened.
            tracing::error!(failed = report.failures.len(), "run finished with failed effects");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!(error = %err, "run aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<RunReport, Box<dyn std::error::Error>> {
    let ctx = RunnerContext::from_env()?;
    let inputs = Inputs::from_env()?;

    let payload = std::fs::read(&ctx.event_path)?;
    let event = parse_event(&ctx.event_name, &payload)?;

    let github = OctocrabClient::from_token(inputs.token.clone(), ctx.repository.clone())?;
    let git = GitCheckout::new(
        ctx.workspace.clone(),
        inputs.token.clone(),
        ctx.actor.clone(),
        ctx.home.clone(),
    );

    let mut patterns = PatternRegistry::new();
    let mut outputs = OutputWriter::append_to(&ctx.output_path)?;

    let driver = Driver::new(&inputs, &ctx, &github, &git);
    let report = driver
        .run(event.as_ref(), &mut patterns, &mut outputs)
        .await?;

    tracing::info!(triggered = report.triggered, "evaluation complete");
    Ok(report)
}
