use super::collector::collect_candidates;
use super::normalizer::citation_from_document;
use crate::config::Messages;
use crate::models::{BackendAnswer, SearchResult, SecondaryCandidates};

/// Build a document search record.
///
/// No match when the backend flagged it or returned no documents. Otherwise the first
/// document is the primary hit and the rest, deduplicated and without the primary's path,
/// become secondary candidates. The secondary section is absent when no candidate remains.
pub fn build_search_result(answer: &BackendAnswer, messages: &Messages) -> SearchResult {
    let Some((first, rest)) = answer.context.split_first() else {
        return SearchResult::no_match(&messages.no_doc_match);
    };
    if answer.no_match {
        return SearchResult::no_match(&messages.no_doc_match);
    }

    let primary = citation_from_document(first);
    let candidates = collect_candidates(rest, Some(primary.source.as_str()));
    let secondary = (!candidates.is_empty()).then(|| SecondaryCandidates {
        intro: messages.secondary_intro.clone(),
        citations: candidates,
    });

    SearchResult::found(&messages.search_intro, primary, secondary)
}
