//! Docs Assistant - chat front-end for internal document search and grounded Q&A
//!
//! Every assistant turn is stored as a mode-tagged [`ContentRecord`](models::ContentRecord)
//! and redrawn from that record alone. The crate provides:
//!
//! - Content builders turning a backend answer into a record (primary hit and candidates
//!   for document search, answer and sources for inquiries)
//! - A renderer and replay loop that reproduce a stored conversation exactly
//! - An append-only JSONL conversation log
//! - HTTP and fixture answer backends
//! - A `ratatui` chat screen and one-shot CLI commands
//!
//! # Example
//!
//! ```
//! use docs_assistant::config::Messages;
//! use docs_assistant::content::build_content;
//! use docs_assistant::models::{AnswerMode, BackendAnswer, RetrievedDocument};
//! use docs_assistant::render::{LineBuffer, render_record};
//!
//! let answer = BackendAnswer {
//!     answer: "See the handbook.".to_string(),
//!     context: vec![RetrievedDocument::new("handbook.pdf", Some(5))],
//!     no_match: false,
//! };
//! let record = build_content(AnswerMode::DocumentSearch, &answer, &Messages::default());
//!
//! let mut buffer = LineBuffer::new();
//! render_record(&record, &mut buffer)?;
//! assert_eq!(buffer.lines().len(), 2);
//! # Ok::<(), docs_assistant::render::RenderError>(())
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod content;
pub mod conversation;
pub mod logging;
pub mod models;
pub mod render;
pub mod session;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use content::build_content;
pub use conversation::{ConversationLog, HistoryStore};
pub use models::{AnswerMode, Citation, ContentRecord, Turn};
pub use render::{render_record, replay};
pub use session::ChatSession;
