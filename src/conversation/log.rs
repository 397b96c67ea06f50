use crate::models::{ContentRecord, Turn};
use crate::render::{DisplaySink, RenderError, replay};

/// Append-only sequence of turns owned by one session.
///
/// Turns are only ever added in user/assistant pairs; nothing is edited, removed or
/// reordered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap turns that were read back from storage
    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append one exchange
    pub fn append_exchange(&mut self, user: Turn, assistant: Turn) {
        self.turns.reserve(2);
        self.turns.push(user);
        self.turns.push(assistant);
    }

    /// Most recent assistant record
    pub fn last_content(&self) -> Option<&ContentRecord> {
        self.turns.iter().rev().find_map(Turn::content)
    }

    /// Redraw every turn onto `sink`
    pub fn replay(&self, sink: &mut dyn DisplaySink) -> Result<(), RenderError> {
        replay(&self.turns, sink)
    }
}
