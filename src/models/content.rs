use serde::{Deserialize, Serialize};

use super::{AnswerMode, Citation};

/// Payload of one assistant turn.
///
/// The variant is fixed when the record is built and alone decides how the record is
/// rendered, both right after the answer and on every later replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ContentRecord {
    DocumentSearch(SearchResult),
    Inquiry(GroundedAnswer),
}

impl ContentRecord {
    pub fn mode(&self) -> AnswerMode {
        match self {
            ContentRecord::DocumentSearch(_) => AnswerMode::DocumentSearch,
            ContentRecord::Inquiry(_) => AnswerMode::Inquiry,
        }
    }

    /// All citations carried by the record, in display order
    pub fn citations(&self) -> Vec<&Citation> {
        match self {
            ContentRecord::DocumentSearch(result) => result
                .primary
                .iter()
                .chain(result.secondary.iter().flat_map(|s| s.citations.iter()))
                .collect(),
            ContentRecord::Inquiry(answer) => {
                answer.sources.iter().flat_map(|s| s.citations.iter()).collect()
            }
        }
    }
}

/// Document search outcome: one primary hit plus lower-ranked candidates, or no match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub no_match: bool,
    /// Intro sentence for the primary hit, or the fallback message when `no_match` is set
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<Citation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<SecondaryCandidates>,
}

impl SearchResult {
    pub fn found(
        intro: impl Into<String>,
        primary: Citation,
        secondary: Option<SecondaryCandidates>,
    ) -> Self {
        Self { no_match: false, message: intro.into(), primary: Some(primary), secondary }
    }

    pub fn no_match(message: impl Into<String>) -> Self {
        Self { no_match: true, message: message.into(), primary: None, secondary: None }
    }
}

/// Secondary candidates are only attached when at least one exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryCandidates {
    pub intro: String,
    pub citations: Vec<Citation>,
}

/// Grounded answer: the generated text and, unless the backend found nothing, its sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<SourceSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSection {
    pub label: String,
    pub citations: Vec<Citation>,
}
