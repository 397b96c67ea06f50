use serde::{Deserialize, Serialize};

/// Suffix of documents whose citations carry a page number
pub const PAGED_DOCUMENT_SUFFIX: &str = ".pdf";

/// A reference to a source document.
///
/// Two citations refer to the same document when their `source` is equal; the page
/// number is not part of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Citation {
    pub fn new(source: impl Into<String>, page: Option<u32>) -> Self {
        Self { source: source.into(), page }
    }

    /// Whether the source is a page-oriented document
    pub fn is_paged(&self) -> bool {
        self.source.to_lowercase().ends_with(PAGED_DOCUMENT_SUFFIX)
    }

    /// Human-readable label: the path, plus `(page No.N)` for paged documents that have a page.
    ///
    /// The page is shown exactly as the backend supplied it.
    pub fn display_label(&self) -> String {
        match self.page {
            Some(page) if self.is_paged() => format!("{}(page No.{})", self.source, page),
            _ => self.source.clone(),
        }
    }
}
