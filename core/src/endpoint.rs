//! REST path descriptors.

/// Identifies a Wordnik REST path: `/api/{kind}.json/{id}/{field}`.
///
/// `field` only makes sense alongside `id`. When `id` is absent the id
/// segment is left empty and a field is still appended, so
/// `Endpoint::new("word").with_field("definitions")` maps to
/// `/api/word.json//definitions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    kind: String,
    id: Option<String>,
    field: Option<String>,
}

impl Endpoint {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: None,
            field: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Path relative to the host. Every segment is percent-encoded.
    pub fn path(&self) -> String {
        let kind = urlencoding::encode(&self.kind);
        let id = self.id.as_deref().map(urlencoding::encode).unwrap_or_default();
        match self.field.as_deref().map(urlencoding::encode) {
            Some(field) => format!("/api/{kind}.json/{id}/{field}"),
            None => format!("/api/{kind}.json/{id}"),
        }
    }
}
