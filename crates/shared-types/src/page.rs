use serde::{Deserialize, Serialize};

/// Document metadata a layout applies to the pages it wraps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Metadata for the authentication views.
    pub fn auth() -> Self {
        Self::new(
            "Authentication",
            "Authentication forms built using the components.",
        )
    }
}
