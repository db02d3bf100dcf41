use crate::github::{request::CreateReleaseRequest, tag::Tag};

/// Assembles a [`CreateReleaseRequest`].
///
/// Empty strings handed to the optional setters are treated as "not
/// supplied", and a missing name falls back to the tag.
pub struct CreateReleaseBuilder {
    owner: String,
    repo: String,
    release_tag: Tag,
    release_name: Option<String>,
    target_commitish: Option<String>,
    body: Option<String>,
    draft: bool,
    prerelease: bool,
    generate_release_notes: bool,
}

impl CreateReleaseBuilder {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, release_tag: Tag) -> Self {
        CreateReleaseBuilder {
            owner: owner.into(),
            repo: repo.into(),
            release_tag,
            release_name: None,
            target_commitish: None,
            body: None,
            draft: false,
            prerelease: false,
            generate_release_notes: false,
        }
    }

    pub fn name(mut self, release_name: impl Into<String>) -> Self {
        self.release_name = non_empty(release_name.into());
        self
    }

    pub fn target_commitish(mut self, target_commitish: impl Into<String>) -> Self {
        self.target_commitish = non_empty(target_commitish.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = non_empty(body.into());
        self
    }

    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    pub fn prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    pub fn generate_release_notes(mut self, generate_release_notes: bool) -> Self {
        self.generate_release_notes = generate_release_notes;
        self
    }

    pub fn build(self) -> CreateReleaseRequest {
        let tag_name = self.release_tag.value().to_owned();
        let name = self.release_name.unwrap_or_else(|| tag_name.to_owned());

        CreateReleaseRequest {
            owner: self.owner,
            repo: self.repo,
            tag_name,
            name,
            draft: self.draft,
            prerelease: self.prerelease,
            generate_release_notes: self.generate_release_notes,
            target_commitish: self.target_commitish,
            body: self.body,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
