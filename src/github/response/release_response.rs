use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseResponse {
    pub id: u64,
    pub html_url: String,
    pub upload_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}
