//! The answer backend: retrieval plus generation, behind one blocking call.
//!
//! The core only sees [`AnswerBackend`]. Two implementations ship with the crate:
//!
//! - [`HttpBackend`] - talks JSON to the retrieval service
//! - [`FixtureBackend`] - canned answers from a JSON file, for offline use and tests
//!
//! Both decide `no_match` once, here, so the content builders never compare answer text.

pub mod fixture;
pub mod http;

pub use fixture::FixtureBackend;
pub use http::HttpBackend;

use thiserror::Error;

use crate::models::{AnswerMode, BackendAnswer};

#[derive(Debug, Error)]
pub enum BackendError {
    /// Request could not be sent or the response body could not be read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response was not a valid answer record
    #[error("invalid backend response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Fixture file could not be used
    #[error("fixture error: {0}")]
    Fixture(String),
}

/// Single blocking call that answers `query` in `mode`
pub trait AnswerBackend {
    fn answer(&self, query: &str, mode: AnswerMode) -> Result<BackendAnswer, BackendError>;
}

impl<B: AnswerBackend + ?Sized> AnswerBackend for Box<B> {
    fn answer(&self, query: &str, mode: AnswerMode) -> Result<BackendAnswer, BackendError> {
        (**self).answer(query, mode)
    }
}

/// Flag `answer` as a no-match when its text is exactly the backend's sentinel for `mode`
pub fn classify(mut answer: BackendAnswer, sentinel: &str) -> BackendAnswer {
    if answer.answer == sentinel {
        answer.no_match = true;
    }
    answer
}
