use super::response::ReleaseResponse;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub id: u64,
    pub html_url: String,
    pub upload_url: String,
}

impl Release {
    pub fn new(id: u64, html_url: impl Into<String>, upload_url: impl Into<String>) -> Self {
        Release {
            id,
            html_url: html_url.into(),
            upload_url: upload_url.into(),
        }
    }

    /// Step outputs published for downstream steps, in publication order.
    pub fn outputs(&self) -> [(&'static str, String); 3] {
        [
            ("id", self.id.to_string()),
            ("html_url", self.html_url.to_owned()),
            ("upload_url", self.upload_url.to_owned()),
        ]
    }
}

impl From<ReleaseResponse> for Release {
    fn from(response: ReleaseResponse) -> Self {
        Release::new(response.id, response.html_url, response.upload_url)
    }
}
