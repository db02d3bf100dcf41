pub mod builder;
pub mod github_client;
pub mod normalizer;
pub mod release;
pub mod request;
pub mod response;
pub mod tag;

use self::{release::Release, request::CreateReleaseRequest, response::ReleaseResponse};
use crate::http::Error;

/// The remote "create release" operation.
#[allow(async_fn_in_trait)]
pub trait ReleaseCreator {
    async fn create_release(
        &self,
        request: &CreateReleaseRequest,
    ) -> Result<ReleaseResponse, Error>;
}

/// Creates the release with a single call to `creator`. Failures are returned
/// untouched; nothing is retried.
pub async fn create_release(
    request: &CreateReleaseRequest,
    creator: &impl ReleaseCreator,
) -> Result<Release, Error> {
    log::debug!(
        "Creating release {} in {}/{}",
        request.tag_name,
        request.owner,
        request.repo
    );

    let response = match creator.create_release(request).await {
        Ok(response) => response,
        Err(err) => {
            if let Error::Api { status, .. } = &err {
                log::error!("GitHub answered with status {}", status);
            }
            return Err(err);
        }
    };

    let release = Release::from(response);

    match serde_json::to_string_pretty(&release) {
        Ok(json) => log::info!("Release: {}", json),
        Err(_) => log::info!("Release: {:?}", release),
    }

    Ok(release)
}
