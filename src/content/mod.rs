//! Content builders: turn a backend answer into a [`ContentRecord`].
//!
//! - [`normalizer`] - document handle to [`Citation`](crate::models::Citation)
//! - [`collector`] - order-preserving, duplicate-free citation lists
//! - [`search`] - document search records (primary hit + candidates)
//! - [`inquiry`] - grounded answer records (answer + sources)
//!
//! The active mode is always passed in by the caller. Nothing in this module keeps or reads
//! session state.

pub mod collector;
pub mod inquiry;
pub mod normalizer;
pub mod search;

pub use collector::collect_candidates;
pub use inquiry::build_grounded_answer;
pub use normalizer::citation_from_document;
pub use search::build_search_result;

use crate::config::Messages;
use crate::models::{AnswerMode, BackendAnswer, ContentRecord};

/// Build the record for `answer` using the builder that belongs to `mode`
pub fn build_content(mode: AnswerMode, answer: &BackendAnswer, messages: &Messages) -> ContentRecord {
    match mode {
        AnswerMode::DocumentSearch => {
            ContentRecord::DocumentSearch(build_search_result(answer, messages))
        }
        AnswerMode::Inquiry => ContentRecord::Inquiry(build_grounded_answer(answer, messages)),
    }
}
