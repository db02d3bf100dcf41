pub mod inputs;
pub mod outputs;

use crate::{
    config::{ConfigError, ReleaseConfig},
    github::{self, normalizer, release::Release, ReleaseCreator},
    http,
};
use anyhow::Result;
use outputs::ActionOutput;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Succeeded => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Normalizes the release inputs, creates the release and publishes its
/// outputs.
///
/// Errors are returned to the caller, which owns the failure report. Outputs
/// are only written once GitHub has answered successfully, and all at once.
pub async fn run(
    release: ReleaseConfig,
    creator: &impl ReleaseCreator,
    output: &mut impl ActionOutput,
) -> Result<Release> {
    let request = normalizer::normalize(release)?;

    let release = github::create_release(&request, creator).await?;

    output.set_outputs(&release.outputs())?;

    Ok(release)
}

/// Turns the result of a run into the step status. A failure is reported once,
/// with the error message unchanged.
pub fn report<T>(result: Result<T>, output: &mut impl ActionOutput) -> Outcome {
    match result {
        Ok(_) => Outcome::Succeeded,
        Err(err) => {
            log::error!("{}", failure_summary(&err));
            output.set_failed(&err.to_string());
            Outcome::Failed
        }
    }
}

fn failure_summary(err: &anyhow::Error) -> &'static str {
    if err.is::<ConfigError>() {
        "Invalid action inputs"
    } else if err.is::<http::Error>() {
        "Cannot create the github release"
    } else {
        "Cannot publish the release outputs"
    }
}
