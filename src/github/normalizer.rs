use super::{
    builder::create_release_builder::CreateReleaseBuilder, request::CreateReleaseRequest, tag::Tag,
};
use crate::config::{ConfigError, ReleaseConfig};

/// Turns raw release inputs into the request sent to GitHub.
///
/// Fails before anything is sent when `owner`, `repo` or `tag` is empty.
pub fn normalize(release: ReleaseConfig) -> Result<CreateReleaseRequest, ConfigError> {
    let owner = required("owner", release.owner)?;
    let repo = required("repo", release.repo)?;
    let tag = Tag::from_ref(&required("tag", release.tag)?);

    let request = CreateReleaseBuilder::new(owner, repo, tag)
        .name(release.name)
        .body(release.notes)
        .target_commitish(release.target_commitish)
        .draft(parse_flag(&release.draft))
        .prerelease(parse_flag(&release.prerelease))
        .generate_release_notes(parse_flag(&release.generate_release_notes))
        .build();

    log_request(&request);

    Ok(request)
}

/// Only the exact literal `true` enables a flag; anything else, including
/// `True` or `1`, leaves it off.
pub fn parse_flag(value: &str) -> bool {
    value == "true"
}

fn required(name: &str, value: String) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::MissingInput(name.to_owned()));
    }

    Ok(value)
}

fn log_request(request: &CreateReleaseRequest) {
    log::info!("Running action with the following inputs:");
    log::info!("  owner: {}", request.owner);
    log::info!("  repo: {}", request.repo);
    log::info!("  tag: {}", request.tag_name);
    log::info!("  name: {}", request.name);
    log::info!("  notes: {}", request.body.as_deref().unwrap_or_default());
    log::info!("  draft: {}", request.draft);
    log::info!("  prerelease: {}", request.prerelease);
    log::info!("  generateReleaseNotes: {}", request.generate_release_notes);
    log::info!(
        "  target: {}",
        request.target_commitish.as_deref().unwrap_or_default()
    );
}
