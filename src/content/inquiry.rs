use super::collector::collect_candidates;
use crate::config::Messages;
use crate::models::{BackendAnswer, GroundedAnswer, SourceSection};

/// Build a grounded answer record.
///
/// The answer text is kept verbatim. Sources are attached whenever the backend did not flag
/// a no-match, even if deduplication leaves the list empty.
pub fn build_grounded_answer(answer: &BackendAnswer, messages: &Messages) -> GroundedAnswer {
    let sources = (!answer.no_match).then(|| SourceSection {
        label: messages.sources_label.clone(),
        citations: collect_candidates(&answer.context, None),
    });

    GroundedAnswer { answer: answer.answer.clone(), sources }
}
