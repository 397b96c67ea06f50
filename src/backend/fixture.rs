//! Canned answers loaded from a JSON file.
//!
//! ```json
//! {
//!   "responses": [
//!     { "query": "leave policy", "mode": "inquiry",
//!       "answer": "Ten days.", "context": [{ "metadata": { "source": "leave.pdf", "page": 4 } }] }
//!   ],
//!   "default": { "answer": "No matching documents found.", "context": [] },
//!   "fail": ["backend down"]
//! }
//! ```
//!
//! A response without `mode` matches both modes. Queries listed in `fail` produce a backend
//! error, which lets callers exercise the failure path without a network.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{AnswerBackend, BackendError, classify};
use crate::config::BackendConfig;
use crate::models::{AnswerMode, BackendAnswer};

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    responses: Vec<FixtureResponse>,
    #[serde(default)]
    default: Option<BackendAnswer>,
    #[serde(default)]
    fail: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FixtureResponse {
    query: String,
    #[serde(default)]
    mode: Option<AnswerMode>,
    #[serde(flatten)]
    answer: BackendAnswer,
}

pub struct FixtureBackend {
    fixture: FixtureFile,
    config: BackendConfig,
}

impl FixtureBackend {
    pub fn from_file(path: &Path, config: BackendConfig) -> Result<Self, BackendError> {
        let content = fs::read_to_string(path).map_err(|e| {
            BackendError::Fixture(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content, config)
    }

    pub fn from_json(json: &str, config: BackendConfig) -> Result<Self, BackendError> {
        let fixture: FixtureFile = serde_json::from_str(json)?;
        Ok(Self { fixture, config })
    }
}

impl AnswerBackend for FixtureBackend {
    fn answer(&self, query: &str, mode: AnswerMode) -> Result<BackendAnswer, BackendError> {
        let query = query.trim();
        if self.fixture.fail.iter().any(|q| q.trim() == query) {
            return Err(BackendError::Fixture(format!("scripted failure for query '{}'", query)));
        }

        let answer = self
            .fixture
            .responses
            .iter()
            .find(|r| r.query.trim() == query && r.mode.is_none_or(|m| m == mode))
            .map(|r| r.answer.clone())
            .or_else(|| self.fixture.default.clone())
            .ok_or_else(|| BackendError::Fixture(format!("no response for query '{}'", query)))?;

        Ok(classify(answer, self.config.no_match_answer(mode)))
    }
}
