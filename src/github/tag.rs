const TAG_REF_PREFIX: &str = "refs/tags/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Builds a tag from a raw reference, dropping a leading `refs/tags/`.
    pub fn from_ref(reference: &str) -> Self {
        Tag::new(reference.strip_prefix(TAG_REF_PREFIX).unwrap_or(reference))
    }

    pub fn value(&self) -> &str {
        &self.name
    }
}
