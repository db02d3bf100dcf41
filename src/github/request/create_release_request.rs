use serde::Serialize;

/// Body of `POST /repos/{owner}/{repo}/releases`.
///
/// `owner` and `repo` address the endpoint and are not serialized. The
/// optional fields are left out of the JSON entirely when absent: GitHub
/// treats an explicit empty `target_commitish` differently from a missing
/// one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateReleaseRequest {
    #[serde(skip)]
    pub owner: String,
    #[serde(skip)]
    pub repo: String,
    pub tag_name: String,
    pub name: String,
    pub draft: bool,
    pub prerelease: bool,
    pub generate_release_notes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_commitish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
