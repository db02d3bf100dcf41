use super::{
    request::CreateReleaseRequest,
    response::{ErrorResponse, ReleaseResponse},
    ReleaseCreator,
};
use crate::http::{Error, Headers};
use reqwest::Client;

pub struct GithubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        GithubClient {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    fn releases_uri(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases", self.base_url, owner, repo)
    }
}

impl ReleaseCreator for GithubClient {
    async fn create_release(
        &self,
        request: &CreateReleaseRequest,
    ) -> Result<ReleaseResponse, Error> {
        let uri = self.releases_uri(&request.owner, &request.repo);
        log::debug!("POST {}", uri);

        let response = self
            .http
            .post(&uri)
            .github_headers(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|cause| Error::Transport { cause })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        log::debug!("Response: {}", text);

        if !(200..300).contains(&status) {
            return Err(Error::Api {
                status,
                message: error_message(status, &text),
            });
        }

        serde_json::from_str::<ReleaseResponse>(&text)
            .map_err(|cause| Error::ParseResponseError { cause })
    }
}

/// GitHub reports failures as `{"message": ..., "errors": [...]}`; fall back to
/// the raw body, then to the status code.
fn error_message(status: u16, text: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(text) {
        Ok(error) if error.errors.is_empty() => error.message,
        Ok(error) => {
            let details: Vec<String> = error
                .errors
                .iter()
                .map(|e| e.as_str().map(str::to_owned).unwrap_or_else(|| e.to_string()))
                .collect();
            format!("{}: {}", error.message, details.join(", "))
        }
        Err(_) if text.trim().is_empty() => format!("HTTP {}", status),
        Err(_) => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn request(target_commitish: Option<&str>, body: Option<&str>) -> CreateReleaseRequest {
        CreateReleaseRequest {
            owner: "issue-ops".to_string(),
            repo: "releaser".to_string(),
            tag_name: "v1.0.0".to_string(),
            name: "v1.0.0".to_string(),
            draft: false,
            prerelease: false,
            generate_release_notes: true,
            target_commitish: target_commitish.map(str::to_string),
            body: body.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn should_create_release() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/repos/issue-ops/releaser/releases")
            .match_header("authorization", "Bearer token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "releaser")
            .match_body(Matcher::Json(json!({
                "tag_name": "v1.0.0",
                "name": "v1.0.0",
                "draft": false,
                "prerelease": false,
                "generate_release_notes": true
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": 1,
                    "html_url": "https://github.com/issue-ops/releaser/releases/1",
                    "upload_url": "https://github.com/issue-ops/releaser/releases/1/assets",
                    "tag_name": "v1.0.0"
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GithubClient::new(server.url(), "token");
        let response = client.create_release(&request(None, None)).await?;

        mock.assert_async().await;
        assert_eq!(response.id, 1);
        assert_eq!(
            response.html_url,
            "https://github.com/issue-ops/releaser/releases/1"
        );
        assert_eq!(
            response.upload_url,
            "https://github.com/issue-ops/releaser/releases/1/assets"
        );

        Ok(())
    }

    #[tokio::test]
    async fn should_send_optional_fields_when_present() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/repos/issue-ops/releaser/releases")
            .match_body(Matcher::PartialJson(json!({
                "target_commitish": "main",
                "body": "This is a test release"
            })))
            .with_status(201)
            .with_body(r#"{"id":7,"html_url":"h","upload_url":"u"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(format!("{}/", server.url()), "token");
        let response = client
            .create_release(&request(Some("main"), Some("This is a test release")))
            .await?;

        mock.assert_async().await;
        assert_eq!(response.id, 7);

        Ok(())
    }

    #[tokio::test]
    async fn should_surface_github_error_message() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/repos/issue-ops/releaser/releases")
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/rest"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(server.url(), "token");
        let err = client.create_release(&request(None, None)).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.to_string(), "Bad credentials");
        assert!(matches!(err, Error::Api { status: 401, .. }));

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_unexpected_success_body() -> Result<()> {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/repos/issue-ops/releaser/releases")
            .with_status(201)
            .with_body("not json")
            .create_async()
            .await;

        let client = GithubClient::new(server.url(), "token");
        let err = client.create_release(&request(None, None)).await.unwrap_err();

        mock.assert_async().await;
        assert!(matches!(err, Error::ParseResponseError { .. }));

        Ok(())
    }

    #[test]
    fn should_append_validation_errors_to_message() {
        let message = error_message(
            422,
            r#"{"message":"Validation Failed","errors":[{"resource":"Release","code":"already_exists","field":"tag_name"}]}"#,
        );

        assert_eq!(
            message,
            r#"Validation Failed: {"code":"already_exists","field":"tag_name","resource":"Release"}"#
        );
    }

    #[test]
    fn should_fall_back_to_raw_body_or_status() {
        assert_eq!(error_message(502, "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(500, ""), "HTTP 500");
    }
}
