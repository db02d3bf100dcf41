use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};
use thiserror::Error;

pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const GITHUB_JSON: &str = "application/vnd.github+json";
pub const APP_USER_AGENT: &str = "releaser";

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, GITHUB_JSON)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, APP_USER_AGENT)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("{cause}")]
    Transport {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
