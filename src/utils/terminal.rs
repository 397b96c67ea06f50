//! Terminal output sanitization
//!
//! Answer text and source paths come from the backend and are written straight to the
//! terminal, both by the CLI transcript and the chat screen. Escape sequences in them could
//! clear the screen, move the cursor or restyle the UI, so they are removed first.

use std::str::Chars;

/// Remove escape sequences and control characters, keeping tab, newline and carriage return.
///
/// CSI sequences (`ESC [ ... final`) and OSC sequences (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// are dropped whole; any other escape loses only the `ESC` itself.
///
/// ```
/// use docs_assistant::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31mTen days\x1b[0m"), "Ten days");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => skip_escape(&mut chars),
            '\t' | '\n' | '\r' => out.push(ch),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }

    out
}

fn skip_escape(chars: &mut Chars<'_>) {
    let after_esc = chars.clone();
    match chars.next() {
        Some('[') => {
            while let Some(c) = chars.next() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        }
        Some(']') => {
            while let Some(c) = chars.next() {
                if c == '\x07' {
                    break;
                }
                if c == '\x1b' {
                    let before_terminator = chars.clone();
                    if chars.next() != Some('\\') {
                        *chars = before_terminator;
                    }
                    break;
                }
            }
        }
        _ => *chars = after_esc,
    }
}
