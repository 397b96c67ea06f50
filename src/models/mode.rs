use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The two ways a query can be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    /// Locate internal documents related to the query
    #[value(name = "search")]
    DocumentSearch,
    /// Answer the query using internal documents as grounding
    #[value(name = "inquiry")]
    Inquiry,
}

impl AnswerMode {
    pub const ALL: [AnswerMode; 2] = [AnswerMode::DocumentSearch, AnswerMode::Inquiry];

    pub fn label(self) -> &'static str {
        match self {
            AnswerMode::DocumentSearch => "Document search",
            AnswerMode::Inquiry => "Internal inquiry",
        }
    }

    /// Wire name used when talking to the answer backend
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerMode::DocumentSearch => "document_search",
            AnswerMode::Inquiry => "inquiry",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            AnswerMode::DocumentSearch => AnswerMode::Inquiry,
            AnswerMode::Inquiry => AnswerMode::DocumentSearch,
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
