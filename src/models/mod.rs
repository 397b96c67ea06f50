//! Data models for the document assistant.
//!
//! This module defines the data structures shared by the builders, the renderer and the
//! conversation log:
//!
//! - [`AnswerMode`] - Which of the two answer modes produced a turn
//! - [`Citation`] - A normalized reference to a source document
//! - [`RetrievedDocument`] / [`BackendAnswer`] - What the answer backend hands back
//! - [`ContentRecord`] - The mode-tagged payload of one assistant turn
//! - [`Turn`] - One entry of the persisted conversation
//!
//! Everything here derives serde so that a turn written to disk reads back identically.
//! Custom deserializers for timestamps and session IDs live in `conversation::deserializers`.

pub mod backend;
pub mod citation;
pub mod content;
pub mod mode;
pub mod turn;

pub use backend::{BackendAnswer, RetrievedDocument};
pub use citation::Citation;
pub use content::{ContentRecord, GroundedAnswer, SearchResult, SecondaryCandidates, SourceSection};
pub use mode::AnswerMode;
pub use turn::{Role, Turn};
