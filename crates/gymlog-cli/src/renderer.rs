//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the given writer
    ///
    /// Only the markup around headers and field labels is styled; user text
    /// is written as entered.
    pub fn render<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if self.rich_enabled {
            // Headers keep their hash symbols, only colored
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[34m{line}\x1b[0m")?;
                } else if let Some((label, value)) = split_field(line) {
                    writeln!(out, "{}{value}", self.skin.inline(label))?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        Ok(())
    }
}

/// Splits `- **Label**: value` into the label markup and the raw value.
fn split_field(line: &str) -> Option<(&str, &str)> {
    const OPEN: &str = "- **";
    const CLOSE: &str = "**: ";

    let rest = line.strip_prefix(OPEN)?;
    let end = OPEN.len() + rest.find(CLOSE)? + CLOSE.len();
    Some(line.split_at(end))
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
