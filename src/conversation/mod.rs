//! The conversation log and its on-disk form.
//!
//! # Error Handling Strategy
//!
//! The persisted log is the only record of what the assistant showed, and replay trusts it
//! completely. Unlike a best-effort index, loading therefore does **not** skip malformed
//! lines: the first line that fails to parse aborts the load with its line number.
//!
//! Writes are append-only. A user turn and its assistant turn are written together; if the
//! write or the sync fails, the file is truncated back to its previous length, so an exchange
//! is stored whole or not at all.

pub mod deserializers;
pub mod log;
pub mod stats;
pub mod store;

pub use log::ConversationLog;
pub use stats::ConversationStats;
pub use store::HistoryStore;
