//! Plain-text transcript output for the CLI.

use std::io::Write;

use anyhow::{Context, Result};

use super::{LineBuffer, RenderedLine, replay};
use crate::models::{Role, Turn};
use crate::utils::strip_ansi_codes;

const DIVIDER_WIDTH: usize = 40;

/// Format buffered lines as terminal text. Backend text is sanitized before display.
pub fn format_lines(lines: &[RenderedLine]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        match line {
            RenderedLine::TurnStart(role) => {
                if !out.is_empty() {
                    out.push(String::new());
                }
                out.push(match role {
                    Role::User => "[you]".to_string(),
                    Role::Assistant => "[assistant]".to_string(),
                });
            }
            RenderedLine::Plain(text) => {
                out.extend(strip_ansi_codes(text).lines().map(str::to_string));
            }
            RenderedLine::Heading(text) => out.push(format!("## {}", strip_ansi_codes(text))),
            RenderedLine::Highlighted { text, icon } => {
                let tag = icon.map(|i| format!("[{}] ", i.tag())).unwrap_or_default();
                out.push(format!("  * {}{}", tag, strip_ansi_codes(text)));
            }
            RenderedLine::Info { text, icon } => {
                let tag = icon.map(|i| format!("[{}] ", i.tag())).unwrap_or_default();
                out.push(format!("  - {}{}", tag, strip_ansi_codes(text)));
            }
            RenderedLine::Divider => out.push("-".repeat(DIVIDER_WIDTH)),
        }
    }
    out
}

/// Replay `turns` and write them as a transcript.
///
/// The whole log is rendered before anything is written, so a malformed turn leaves the
/// output untouched.
pub fn write_transcript(turns: &[Turn], out: &mut impl Write) -> Result<()> {
    let mut buffer = LineBuffer::new();
    replay(turns, &mut buffer).context("Failed to render conversation log")?;

    for line in format_lines(buffer.lines()) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
