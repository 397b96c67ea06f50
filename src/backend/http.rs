use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::debug;

use super::{AnswerBackend, BackendError, classify};
use crate::config::BackendConfig;
use crate::models::{AnswerMode, BackendAnswer};

const ANSWER_ENDPOINT: &str = "answer";

#[derive(Serialize)]
struct AnswerRequest<'a> {
    query: &'a str,
    mode: AnswerMode,
}

/// Backend reached over HTTP: `POST {url}/answer` with `{"query", "mode"}`
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), ANSWER_ENDPOINT)
    }
}

impl AnswerBackend for HttpBackend {
    fn answer(&self, query: &str, mode: AnswerMode) -> Result<BackendAnswer, BackendError> {
        let url = self.endpoint();
        debug!(%url, mode = mode.as_str(), "requesting answer");

        let response = self.client.post(&url).json(&AnswerRequest { query, mode }).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16(), body });
        }

        let answer: BackendAnswer = serde_json::from_str(&body)?;
        Ok(classify(answer, self.config.no_match_answer(mode)))
    }
}
