//! Rendering of content records and conversation replay.
//!
//! Rendering is a pure projection from a [`ContentRecord`] onto a [`DisplaySink`]. The same
//! function draws a record right after it was built and again on every replay of the log, so
//! the output depends on nothing but the record.
//!
//! # Error Handling Strategy
//!
//! A citation without a source path, or a search hit without its primary citation, can only
//! come from a corrupted history file. Such records fail with [`RenderError`] before anything
//! of that record reaches the sink, and the whole render pass stops there.

pub mod icons;
pub mod text;

pub use icons::{IconCategory, icon_for_path};
pub use text::write_transcript;

use thiserror::Error;

use crate::models::{Citation, ContentRecord, GroundedAnswer, Role, SearchResult, Turn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A citation has an empty source path
    #[error("citation {index} of turn has no source path")]
    MissingSourcePath { index: usize },

    /// A search record claims a match but carries no primary citation
    #[error("search result has no primary citation")]
    MissingPrimary,

    /// Replay stopped at a malformed turn
    #[error("turn {turn}: {source}")]
    Turn {
        turn: usize,
        #[source]
        source: Box<RenderError>,
    },
}

/// Output surface the renderer draws on
pub trait DisplaySink {
    /// Called before each turn of a replay
    fn begin_turn(&mut self, _role: Role) {}
    fn plain(&mut self, text: &str);
    fn heading(&mut self, text: &str);
    fn highlighted(&mut self, text: &str, icon: Option<IconCategory>);
    fn info(&mut self, text: &str, icon: Option<IconCategory>);
    fn divider(&mut self);
}

/// One drawn line, as recorded by [`LineBuffer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedLine {
    TurnStart(Role),
    Plain(String),
    Heading(String),
    Highlighted { text: String, icon: Option<IconCategory> },
    Info { text: String, icon: Option<IconCategory> },
    Divider,
}

/// Sink that keeps every line it receives
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<RenderedLine>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<RenderedLine> {
        self.lines
    }
}

impl DisplaySink for LineBuffer {
    fn begin_turn(&mut self, role: Role) {
        self.lines.push(RenderedLine::TurnStart(role));
    }

    fn plain(&mut self, text: &str) {
        self.lines.push(RenderedLine::Plain(text.to_string()));
    }

    fn heading(&mut self, text: &str) {
        self.lines.push(RenderedLine::Heading(text.to_string()));
    }

    fn highlighted(&mut self, text: &str, icon: Option<IconCategory>) {
        self.lines.push(RenderedLine::Highlighted { text: text.to_string(), icon });
    }

    fn info(&mut self, text: &str, icon: Option<IconCategory>) {
        self.lines.push(RenderedLine::Info { text: text.to_string(), icon });
    }

    fn divider(&mut self) {
        self.lines.push(RenderedLine::Divider);
    }
}

/// Draw one content record
pub fn render_record(record: &ContentRecord, sink: &mut dyn DisplaySink) -> Result<(), RenderError> {
    validate_record(record)?;
    match record {
        ContentRecord::DocumentSearch(result) => render_search_result(result, sink),
        ContentRecord::Inquiry(answer) => render_grounded_answer(answer, sink),
    }
    Ok(())
}

/// Redraw a conversation, dispatching each assistant turn on its own stored mode
pub fn replay(turns: &[Turn], sink: &mut dyn DisplaySink) -> Result<(), RenderError> {
    for (idx, turn) in turns.iter().enumerate() {
        sink.begin_turn(turn.role());
        match turn {
            Turn::User { text, .. } => sink.plain(text),
            Turn::Assistant { content, .. } => render_record(content, sink)
                .map_err(|e| RenderError::Turn { turn: idx, source: Box::new(e) })?,
        }
    }
    Ok(())
}

fn validate_record(record: &ContentRecord) -> Result<(), RenderError> {
    if let ContentRecord::DocumentSearch(result) = record
        && !result.no_match
        && result.primary.is_none()
    {
        return Err(RenderError::MissingPrimary);
    }

    match record.citations().iter().position(|c| c.source.trim().is_empty()) {
        Some(index) => Err(RenderError::MissingSourcePath { index }),
        None => Ok(()),
    }
}

fn render_search_result(result: &SearchResult, sink: &mut dyn DisplaySink) {
    sink.plain(&result.message);
    if result.no_match {
        return;
    }

    if let Some(primary) = &result.primary {
        sink.highlighted(&primary.display_label(), Some(icon_for_path(&primary.source)));
    }

    if let Some(secondary) = &result.secondary {
        sink.plain(&secondary.intro);
        render_citations(&secondary.citations, sink);
    }
}

fn render_grounded_answer(answer: &GroundedAnswer, sink: &mut dyn DisplaySink) {
    sink.plain(&answer.answer);

    if let Some(sources) = &answer.sources {
        sink.divider();
        sink.heading(&sources.label);
        render_citations(&sources.citations, sink);
    }
}

fn render_citations(citations: &[Citation], sink: &mut dyn DisplaySink) {
    for citation in citations {
        sink.info(&citation.display_label(), Some(icon_for_path(&citation.source)));
    }
}
