use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::config::Messages;
use crate::models::{AnswerMode, Role};
use crate::render::RenderedLine;
use crate::utils::strip_ansi_codes;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const SKY: Color = Color::Rgb(56, 189, 248);
const AMBER: Color = Color::Rgb(245, 158, 11);
const RED: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the UI needs for one frame
pub struct RenderState<'a> {
    pub mode: AnswerMode,
    pub messages: &'a Messages,
    pub conversation: &'a [Line<'static>],
    pub input: &'a str,
    /// Rows scrolled up from the bottom of the conversation
    pub scroll_from_bottom: u16,
    pub status_message: Option<&'a StatusMessage>,
    pub waiting: bool,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_sidebar(frame, layout.sidebar_area, state.mode, state.messages);
    render_conversation(frame, layout.conversation_area, state);
    render_input(frame, layout.input_area, state);
    render_status_bar(frame, layout.status_area, state);
}

/// Convert replayed lines into styled terminal lines.
///
/// The title, greeting and hint are always drawn above the conversation.
pub fn conversation_lines(rendered: &[RenderedLine], messages: &Messages) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            messages.app_name.clone(),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("🤖 {}", messages.greeting)),
        Line::from(Span::styled(format!("⚠ {}", messages.input_hint), Style::default().fg(AMBER))),
    ];

    for line in rendered {
        match line {
            RenderedLine::TurnStart(role) => {
                lines.push(Line::from(""));
                lines.push(match role {
                    Role::User => Line::from(Span::styled(
                        "👤 You",
                        Style::default().fg(SKY).add_modifier(Modifier::BOLD),
                    )),
                    Role::Assistant => Line::from(Span::styled(
                        "🤖 Assistant",
                        Style::default().fg(EMERALD).add_modifier(Modifier::BOLD),
                    )),
                });
            }
            RenderedLine::Plain(text) => {
                for text_line in strip_ansi_codes(text).lines() {
                    lines.push(Line::from(text_line.to_string()));
                }
            }
            RenderedLine::Heading(text) => lines.push(Line::from(Span::styled(
                strip_ansi_codes(text),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))),
            RenderedLine::Highlighted { text, icon } => {
                let glyph = icon.map(|i| format!("{} ", i.glyph())).unwrap_or_default();
                lines.push(Line::from(Span::styled(
                    format!(" {}{} ", glyph, strip_ansi_codes(text)),
                    Style::default().fg(BRIGHT).bg(EMERALD).add_modifier(Modifier::BOLD),
                )));
            }
            RenderedLine::Info { text, icon } => {
                let glyph = icon.map(|i| format!("{} ", i.glyph())).unwrap_or_default();
                lines.push(Line::from(vec![
                    Span::styled("│ ", Style::default().fg(SKY)),
                    Span::styled(
                        format!("{}{}", glyph, strip_ansi_codes(text)),
                        Style::default().fg(SKY),
                    ),
                ]));
            }
            RenderedLine::Divider => {
                lines.push(Line::from(Span::styled("─".repeat(40), Style::default().fg(MUTED))));
            }
        }
    }

    lines
}

fn render_sidebar(frame: &mut Frame, area: Rect, mode: AnswerMode, messages: &Messages) {
    let mut lines = vec![
        Line::from(Span::styled("Purpose", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];

    for candidate in AnswerMode::ALL {
        let (marker, style) = if candidate == mode {
            ("(•) ", Style::default().fg(EMERALD).add_modifier(Modifier::BOLD))
        } else {
            ("( ) ", Style::default().fg(MUTED))
        };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, candidate.label()), style)));
    }

    lines.push(Line::from(Span::styled("─".repeat(20), Style::default().fg(MUTED))));

    for candidate in AnswerMode::ALL {
        let (description, example) = messages.mode_help(candidate);
        lines.push(Line::from(Span::styled(
            format!("When \"{}\" is selected", candidate.label()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(description.to_string(), Style::default().fg(SKY))));
        lines.push(Line::from(Span::styled("Example:", Style::default().fg(MUTED))));
        lines.push(Line::from(example.to_string()));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Mode (Tab) "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_conversation(frame: &mut Frame, area: Rect, state: &RenderState) {
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let total_rows = wrapped_row_count(state.conversation, inner_width);
    let bottom_offset = total_rows.saturating_sub(inner_height);
    let offset = bottom_offset.saturating_sub(state.scroll_from_bottom as usize);

    let paragraph = Paragraph::new(Text::from(state.conversation.to_vec()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Conversation "),
        )
        .wrap(Wrap { trim: false })
        .scroll((offset.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(paragraph, area);
}

/// Rows the lines occupy once wrapped at `width` columns (estimate: wrapping at any char)
pub fn wrapped_row_count(lines: &[Line], width: usize) -> usize {
    lines.iter().map(|line| line.width().div_ceil(width).max(1)).sum()
}

fn render_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let content = if state.input.is_empty() {
        Span::styled(state.messages.input_placeholder.clone(), Style::default().fg(MUTED))
    } else {
        Span::raw(state.input.to_string())
    };

    let paragraph = Paragraph::new(Line::from(vec![Span::raw("> "), content])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(EMERALD))
            .title(format!(" {} ", state.mode.label())),
    );

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if state.waiting {
        (format!(" {} ", state.messages.waiting), Style::default().fg(AMBER).bg(BAR_BG))
    } else if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => EMERALD,
            MessageType::Error => RED,
        };
        // Status bar is one row
        let first_line = msg.text.lines().next().unwrap_or_default();
        (format!(" {} ", first_line), Style::default().fg(color).bg(BAR_BG))
    } else {
        let parts = [
            format!("[{}]", state.mode.label()),
            "Tab: switch mode".to_string(),
            "Enter: send".to_string(),
            "↑↓: scroll".to_string(),
            "Esc: clear".to_string(),
            "Ctrl+C: quit".to_string(),
        ];
        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    let paragraph = Paragraph::new(status_text).style(style);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::render::IconCategory;

    fn sample_lines() -> Vec<RenderedLine> {
        vec![
            RenderedLine::TurnStart(Role::User),
            RenderedLine::Plain("where is the handbook".to_string()),
            RenderedLine::TurnStart(Role::Assistant),
            RenderedLine::Plain("It may be in:".to_string()),
            RenderedLine::Highlighted {
                text: "handbook.pdf(page No.3)".to_string(),
                icon: Some(IconCategory::Pdf),
            },
            RenderedLine::Divider,
            RenderedLine::Heading("Sources".to_string()),
            RenderedLine::Info { text: "faq.md".to_string(), icon: Some(IconCategory::Text) },
        ]
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_conversation_lines_include_header() {
        let messages = Messages::default();
        let lines = conversation_lines(&[], &messages);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_string(), messages.app_name);
    }

    #[test]
    fn test_conversation_lines_are_stable() {
        let messages = Messages::default();
        let first = conversation_lines(&sample_lines(), &messages);
        let second = conversation_lines(&sample_lines(), &messages);
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrapped_row_count() {
        let lines = vec![Line::from("abcdef"), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_row_count(&lines, 3), 2 + 1 + 1);
        assert_eq!(wrapped_row_count(&lines, 10), 3);
    }

    #[test]
    fn test_render_ui_shows_modes_and_conversation() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let messages = Messages::default();
        let conversation = conversation_lines(&sample_lines(), &messages);

        terminal
            .draw(|f| {
                let state = RenderState {
                    mode: AnswerMode::DocumentSearch,
                    messages: &messages,
                    conversation: &conversation,
                    input: "",
                    scroll_from_bottom: 0,
                    status_message: None,
                    waiting: false,
                };
                render_ui(f, &state);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Document search"));
        assert!(text.contains("Internal inquiry"));
        assert!(text.contains("faq.md"));
    }

    #[test]
    fn test_render_ui_waiting_and_status() {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let messages = Messages::default();
        let status = StatusMessage {
            text: "Failed to get an answer.\nIf the problem persists".to_string(),
            message_type: MessageType::Error,
            expires_at: Instant::now(),
        };

        terminal
            .draw(|f| {
                let state = RenderState {
                    mode: AnswerMode::Inquiry,
                    messages: &messages,
                    conversation: &[],
                    input: "typed text",
                    scroll_from_bottom: 3,
                    status_message: Some(&status),
                    waiting: false,
                };
                render_ui(f, &state);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Failed to get an answer."));
        assert!(text.contains("typed text"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let messages = Messages::default();
        let conversation = conversation_lines(&sample_lines(), &messages);

        terminal
            .draw(|f| {
                let state = RenderState {
                    mode: AnswerMode::Inquiry,
                    messages: &messages,
                    conversation: &conversation,
                    input: "",
                    scroll_from_bottom: 100,
                    status_message: None,
                    waiting: true,
                };
                render_ui(f, &state);
            })
            .unwrap();
    }
}
