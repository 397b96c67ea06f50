//! One chat session: backend call, content building, persistence.
//!
//! Interactions are strictly serialized. [`ChatSession::submit`] either appends a complete
//! user/assistant pair to the log or leaves the log exactly as it was.

use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::backend::{AnswerBackend, BackendError};
use crate::config::Messages;
use crate::content::build_content;
use crate::conversation::{ConversationLog, HistoryStore};
use crate::models::{AnswerMode, ContentRecord, Turn};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("backend call failed: {0}")]
    Backend(#[from] BackendError),

    #[error("failed to persist conversation: {0:#}")]
    History(#[source] anyhow::Error),
}

impl ChatError {
    /// Text shown to the user for this failure
    pub fn user_message(&self, messages: &Messages) -> String {
        match self {
            ChatError::EmptyQuery => messages.empty_query.clone(),
            ChatError::Backend(_) => messages.error_message(&messages.backend_error),
            ChatError::History(_) => messages.error_message(&messages.history_error),
        }
    }
}

pub struct ChatSession<B: AnswerBackend> {
    backend: B,
    log: ConversationLog,
    store: Option<HistoryStore>,
    messages: Messages,
    session_id: String,
}

impl<B: AnswerBackend> ChatSession<B> {
    /// Start a session on top of an existing log (possibly empty)
    pub fn new(backend: B, log: ConversationLog, messages: Messages) -> Self {
        Self { backend, log, store: None, messages, session_id: Uuid::new_v4().to_string() }
    }

    /// Persist every new exchange to `store`
    pub fn with_store(mut self, store: HistoryStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Answer `query` in `mode` and record the exchange.
    ///
    /// The returned record is the one now stored as the last assistant turn.
    pub fn submit(&mut self, query: &str, mode: AnswerMode) -> Result<&ContentRecord, ChatError> {
        if query.trim().is_empty() {
            return Err(ChatError::EmptyQuery);
        }
        info!(query = query, application_mode = mode.as_str(), "query received");

        let answer = self.backend.answer(query, mode).inspect_err(|e| {
            error!(error = %e, application_mode = mode.as_str(), "failed to get an answer");
        })?;

        let content = build_content(mode, &answer, &self.messages);
        info!(
            application_mode = mode.as_str(),
            content = %serde_json::to_string(&content).unwrap_or_default(),
            "answer built"
        );

        let user = Turn::user(query, self.session_id.as_str());
        let assistant = Turn::assistant(content, self.session_id.as_str());

        if let Some(store) = &self.store {
            store.append(&[user.clone(), assistant.clone()]).map_err(|e| {
                error!(error = %format!("{:#}", e), "failed to save conversation");
                ChatError::History(e)
            })?;
        }

        self.log.append_exchange(user, assistant);
        self.log.last_content().ok_or_else(|| {
            ChatError::History(anyhow::anyhow!("assistant turn missing after append"))
        })
    }
}
