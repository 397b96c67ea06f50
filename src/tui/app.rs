//! TUI application state and event handling.
//!
//! The `App` owns the [`ChatSession`] and the current mode selection, and runs the main
//! event loop via `run()`:
//!
//! - **Mode selector**: Tab flips between document search and inquiry. The selection is
//!   handed to `ChatSession::submit` per call; replay never looks at it.
//! - **Submission**: Enter marks a query pending. The next loop iteration draws the waiting
//!   indicator first, then makes the blocking backend call.
//! - **Replay**: the conversation pane is rebuilt from the log before every draw. A log that
//!   fails to render ends the loop with an error.
//! - **Status messages**: transient feedback (errors, confirmations) with expiry.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::text::Line;
use tracing::error;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, conversation_lines, render_ui};
use crate::backend::AnswerBackend;
use crate::models::AnswerMode;
use crate::render::LineBuffer;
use crate::session::ChatSession;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 8000;
/// Maximum input length in characters
const MAX_INPUT_CHARS: usize = 2000;
const PAGE_ROWS: u16 = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App<B: AnswerBackend> {
    session: ChatSession<B>,
    mode: AnswerMode,
    input: String,
    scroll_from_bottom: u16,
    should_quit: bool,
    pending_query: Option<String>,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<B: AnswerBackend> App<B> {
    pub fn new(session: ChatSession<B>, mode: AnswerMode) -> Self {
        Self {
            session,
            mode,
            input: String::new(),
            scroll_from_bottom: 0,
            should_quit: false,
            pending_query: None,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    pub fn session(&self) -> &ChatSession<B> {
        &self.session
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Replay the whole log into styled lines
    fn build_conversation(&self) -> Result<Vec<Line<'static>>> {
        let mut buffer = LineBuffer::new();
        self.session
            .log()
            .replay(&mut buffer)
            .context(self.session.messages().render_error.clone())?;
        Ok(conversation_lines(buffer.lines(), self.session.messages()))
    }

    fn draw<T: Backend>(&mut self, terminal: &mut Terminal<T>) -> Result<()> {
        let conversation = self.build_conversation().inspect_err(|e| {
            error!(error = %format!("{:#}", e), "failed to render conversation log");
        })?;

        terminal.draw(|f| {
            let state = RenderState {
                mode: self.mode,
                messages: self.session.messages(),
                conversation: &conversation,
                input: &self.input,
                scroll_from_bottom: self.scroll_from_bottom,
                status_message: self.status_message.as_ref(),
                waiting: self.pending_query.is_some(),
            };
            render_ui(f, &state);
        })?;

        self.needs_redraw = false;
        self.last_draw_time = Instant::now();
        Ok(())
    }

    pub fn run<T: Backend>(&mut self, terminal: &mut Terminal<T>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let elapsed = self.last_draw_time.elapsed();
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                self.draw(terminal)?;
            }

            // The waiting indicator is on screen now; run the blocking call
            if self.pending_query.is_some() {
                self.process_pending_query();
                continue;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.needs_redraw = true;
                }
            }
            Action::ToggleMode => {
                self.mode = self.mode.toggle();
                self.notify(format!("Mode: {}", self.mode.label()));
            }
            Action::Submit => self.submit_input(),
            Action::ScrollUp => self.scroll(1),
            Action::ScrollDown => self.scroll(-1),
            Action::PageUp => self.scroll(PAGE_ROWS as i32),
            Action::PageDown => self.scroll(-(PAGE_ROWS as i32)),
            Action::Input(c) => self.push_char(c),
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::None => {}
        }
    }

    fn push_char(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_CHARS {
            self.input.push(c);
            self.needs_redraw = true;
        }
    }

    fn scroll(&mut self, delta: i32) {
        let old = self.scroll_from_bottom;
        self.scroll_from_bottom =
            (self.scroll_from_bottom as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        if old != self.scroll_from_bottom {
            self.needs_redraw = true;
        }
    }

    /// Queue the typed text; the call itself happens after the next draw
    fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.pending_query = Some(std::mem::take(&mut self.input));
        self.needs_redraw = true;
    }

    fn process_pending_query(&mut self) {
        let Some(query) = self.pending_query.take() else { return };
        self.needs_redraw = true;

        let result = self.session.submit(&query, self.mode).map(|_| ());
        match result {
            Ok(()) => {
                self.scroll_from_bottom = 0;
                self.status_message = None;
            }
            Err(e) => {
                let text = e.user_message(self.session.messages());
                // Give the query back so it can be retried
                self.input = query;
                self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }

    /// Show a short confirmation in the status bar
    fn notify(&mut self, text: impl Into<String>) {
        self.set_status(text, MessageType::Success, STATUS_SUCCESS_DURATION_MS);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::backend::BackendError;
    use crate::config::Messages;
    use crate::conversation::ConversationLog;
    use crate::models::{BackendAnswer, ContentRecord, RetrievedDocument};

    struct StaticBackend {
        fail: bool,
    }

    impl AnswerBackend for StaticBackend {
        fn answer(&self, _query: &str, _mode: AnswerMode) -> Result<BackendAnswer, BackendError> {
            if self.fail {
                return Err(BackendError::Fixture("down".to_string()));
            }
            Ok(BackendAnswer {
                answer: "Ten days.".to_string(),
                context: vec![
                    RetrievedDocument::new("leave.pdf", Some(4)),
                    RetrievedDocument::new("faq.md", None),
                ],
                no_match: false,
            })
        }
    }

    fn create_app(fail: bool) -> App<StaticBackend> {
        let session =
            ChatSession::new(StaticBackend { fail }, ConversationLog::new(), Messages::default());
        App::new(session, AnswerMode::DocumentSearch)
    }

    fn type_text(app: &mut App<StaticBackend>, text: &str) {
        for c in text.chars() {
            app.handle_action(Action::Input(c));
        }
    }

    #[test]
    fn test_app_new_initializes_state() {
        let app = create_app(false);
        assert_eq!(app.mode(), AnswerMode::DocumentSearch);
        assert!(app.input.is_empty());
        assert!(!app.should_quit);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_toggle_mode() {
        let mut app = create_app(false);
        app.handle_action(Action::ToggleMode);
        assert_eq!(app.mode(), AnswerMode::Inquiry);
        app.handle_action(Action::ToggleMode);
        assert_eq!(app.mode(), AnswerMode::DocumentSearch);
    }

    #[test]
    fn test_input_and_delete() {
        let mut app = create_app(false);
        type_text(&mut app, "abc");
        assert_eq!(app.input, "abc");

        app.handle_action(Action::DeleteChar);
        assert_eq!(app.input, "ab");
    }

    #[test]
    fn test_input_length_limit() {
        let mut app = create_app(false);
        app.input = "x".repeat(MAX_INPUT_CHARS);
        app.handle_action(Action::Input('y'));
        assert_eq!(app.input.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let mut app = create_app(false);
        type_text(&mut app, "abc");

        app.handle_action(Action::ClearInput);
        assert!(app.input.is_empty());
        assert!(!app.should_quit);

        app.handle_action(Action::ClearInput);
        assert!(app.should_quit);
    }

    #[test]
    fn test_submit_empty_input_is_ignored() {
        let mut app = create_app(false);
        type_text(&mut app, "   ");
        app.handle_action(Action::Submit);
        assert!(app.pending_query.is_none());
    }

    #[test]
    fn test_submit_then_process_appends_exchange() {
        let mut app = create_app(false);
        type_text(&mut app, "leave policy");
        app.handle_action(Action::Submit);

        assert_eq!(app.pending_query.as_deref(), Some("leave policy"));
        assert!(app.input.is_empty());

        app.process_pending_query();
        assert!(app.pending_query.is_none());
        assert_eq!(app.session().log().len(), 2);
        assert!(matches!(
            app.session().log().last_content(),
            Some(ContentRecord::DocumentSearch(_))
        ));
    }

    #[test]
    fn test_failed_submit_restores_input_and_shows_error() {
        let mut app = create_app(true);
        type_text(&mut app, "leave policy");
        app.handle_action(Action::Submit);
        app.process_pending_query();

        assert!(app.session().log().is_empty());
        assert_eq!(app.input, "leave policy");
        let status = app.status_message.as_ref().expect("status message");
        assert_eq!(status.message_type, MessageType::Error);
        assert!(status.text.contains(&Messages::default().backend_error));
    }

    #[test]
    fn test_mode_switch_does_not_change_history() {
        let mut app = create_app(false);
        type_text(&mut app, "leave policy");
        app.handle_action(Action::Submit);
        app.process_pending_query();

        let before = app.build_conversation().unwrap();
        app.handle_action(Action::ToggleMode);
        let after = app.build_conversation().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut app = create_app(false);
        app.handle_action(Action::ScrollDown);
        assert_eq!(app.scroll_from_bottom, 0);

        app.handle_action(Action::PageUp);
        assert_eq!(app.scroll_from_bottom, PAGE_ROWS);

        app.handle_action(Action::ScrollUp);
        assert_eq!(app.scroll_from_bottom, PAGE_ROWS + 1);

        app.handle_action(Action::PageDown);
        app.handle_action(Action::PageDown);
        assert_eq!(app.scroll_from_bottom, 0);
    }

    #[test]
    fn test_dirty_state_on_actions() {
        let mut app = create_app(false);
        app.needs_redraw = false;

        app.handle_action(Action::Input('a'));
        assert!(app.needs_redraw);

        app.needs_redraw = false;
        app.handle_action(Action::None);
        assert!(!app.needs_redraw);

        app.handle_action(Action::ToggleMode);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_status_message_expiry() {
        let mut app = create_app(false);
        app.set_status("done", MessageType::Success, 0);
        app.check_and_clear_expired_status();
        assert!(app.status_message.is_none());

        app.notify("saved");
        app.check_and_clear_expired_status();
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_draw_with_test_backend() {
        let mut app = create_app(false);
        type_text(&mut app, "leave policy");
        app.handle_action(Action::Submit);
        app.process_pending_query();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        app.draw(&mut terminal).unwrap();
        assert!(!app.needs_redraw);
    }
}
