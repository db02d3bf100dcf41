use crate::action::inputs::Inputs;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),
}

pub struct Config {
    pub api_url: String,
    pub github_token: String,
    pub release: ReleaseConfig,
}

impl Config {
    pub fn load(inputs: &impl Inputs) -> Result<Config, ConfigError> {
        let api_url = inputs.get_input("api_url")?;
        let github_token = inputs.get_required("github_token")?;
        let release = ReleaseConfig::load(inputs)?;

        Ok(Config {
            api_url: Config::api_url_or_default(api_url),
            github_token,
            release,
        })
    }

    fn api_url_or_default(api_url: String) -> String {
        if api_url.is_empty() {
            DEFAULT_API_URL.to_owned()
        } else {
            api_url
        }
    }
}

/// Release inputs exactly as the workflow supplied them. Interpretation of
/// flags, the tag reference and empty optionals happens in
/// [`crate::github::normalizer`].
#[derive(Debug, Clone, Default)]
pub struct ReleaseConfig {
    pub owner: String,
    pub repo: String,
    pub tag: String,
    pub name: String,
    pub notes: String,
    pub draft: String,
    pub prerelease: String,
    pub generate_release_notes: String,
    pub target_commitish: String,
}

impl ReleaseConfig {
    pub fn load(inputs: &impl Inputs) -> Result<ReleaseConfig, ConfigError> {
        Ok(ReleaseConfig {
            owner: inputs.get_required("owner")?,
            repo: inputs.get_required("repo")?,
            tag: inputs.get_required("tag")?,
            name: inputs.get_input("name")?,
            notes: inputs.get_input("notes")?,
            draft: inputs.get_input("draft")?,
            prerelease: inputs.get_input("prerelease")?,
            generate_release_notes: inputs.get_input("generate_release_notes")?,
            target_commitish: inputs.get_input("target_commitish")?,
        })
    }
}
