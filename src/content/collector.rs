use std::collections::HashSet;

use super::normalizer::citation_from_document;
use crate::models::{Citation, RetrievedDocument};

/// Collect citations from `documents` in order, keeping only the first occurrence of each
/// source path and dropping every document whose path equals `exclude`.
///
/// Order is preserved because the backend ranks documents by relevance.
pub fn collect_candidates(documents: &[RetrievedDocument], exclude: Option<&str>) -> Vec<Citation> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
    let mut citations = Vec::new();

    for document in documents {
        let source = document.source.as_str();
        if exclude == Some(source) || !seen.insert(source) {
            continue;
        }
        citations.push(citation_from_document(document));
    }

    citations
}
