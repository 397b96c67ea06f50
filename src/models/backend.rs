use serde::{Deserialize, Serialize};

/// A document handle returned by the retrieval step.
///
/// The backend sends the loader's metadata object (`{"metadata": {"source": .., "page": ..}}`);
/// only the source path and the optional page are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument", into = "RawDocument")]
pub struct RetrievedDocument {
    pub source: String,
    pub page: Option<u32>,
}

impl RetrievedDocument {
    pub fn new(source: impl Into<String>, page: Option<u32>) -> Self {
        Self { source: source.into(), page }
    }
}

#[derive(Serialize, Deserialize)]
struct RawDocument {
    metadata: RawMetadata,
}

#[derive(Serialize, Deserialize)]
struct RawMetadata {
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}

impl From<RawDocument> for RetrievedDocument {
    fn from(raw: RawDocument) -> Self {
        Self { source: raw.metadata.source, page: raw.metadata.page }
    }
}

impl From<RetrievedDocument> for RawDocument {
    fn from(doc: RetrievedDocument) -> Self {
        Self { metadata: RawMetadata { source: doc.source, page: doc.page } }
    }
}

/// Result of one call to the answer backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendAnswer {
    pub answer: String,
    #[serde(default)]
    pub context: Vec<RetrievedDocument>,
    /// Set by the backend adapter when no usable grounding material was found
    #[serde(default)]
    pub no_match: bool,
}
