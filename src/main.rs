mod action;
mod config;
mod github;
mod http;
mod logger;

use action::{inputs::EnvInputs, outputs::WorkflowCommands};
use anyhow::Result;
use config::Config;
use github::github_client::GithubClient;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = logger::init() {
        eprintln!("Cannot initialize logger: {err}");
    }

    let mut output = WorkflowCommands::from_env();

    let result = execute(&mut output).await;

    action::report(result, &mut output).into()
}

async fn execute(output: &mut WorkflowCommands) -> Result<()> {
    let config = Config::load(&EnvInputs)?;
    log::info!("Using GitHub API at {}", config.api_url);

    let client = GithubClient::new(config.api_url, config.github_token);

    action::run(config.release, &client, output).await?;

    Ok(())
}
