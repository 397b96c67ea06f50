// TUI module for the interactive chat interface
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::backend::AnswerBackend;
use crate::models::AnswerMode;
use crate::session::ChatSession;

/// Run the interactive TUI
pub fn run_interactive<B: AnswerBackend>(session: ChatSession<B>, mode: AnswerMode) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(session, mode);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
