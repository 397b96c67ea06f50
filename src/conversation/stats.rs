use crate::models::{AnswerMode, ContentRecord, Role, Turn};

/// Turn counts for the `stats` command
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversationStats {
    pub total_turns: usize,
    pub user_turns: usize,
    pub assistant_turns: usize,
    pub search_answers: usize,
    pub inquiry_answers: usize,
    /// Search answers that found no document
    pub no_match_answers: usize,
}

impl ConversationStats {
    pub fn from_turns(turns: &[Turn]) -> Self {
        let mut stats = Self { total_turns: turns.len(), ..Self::default() };

        for turn in turns {
            match turn.role() {
                Role::User => stats.user_turns += 1,
                Role::Assistant => stats.assistant_turns += 1,
            }
            let Some(content) = turn.content() else { continue };
            match content.mode() {
                AnswerMode::DocumentSearch => stats.search_answers += 1,
                AnswerMode::Inquiry => stats.inquiry_answers += 1,
            }
            if let ContentRecord::DocumentSearch(result) = content
                && result.no_match
            {
                stats.no_match_answers += 1;
            }
        }

        stats
    }
}
