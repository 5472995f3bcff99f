//! Terminal rendering of the core's markdown output
//!
//! Uses termimad for inline styling, with a plain text mode for `--no-color`
//! and for tests.

use std::fmt::Write;

use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Markdown as it will appear on the terminal.
    ///
    /// Header lines keep their hash marks and are colored as a whole; other
    /// lines get termimad's inline styling.
    pub fn format(&self, markdown: &str) -> String {
        if !self.rich_enabled {
            return markdown.to_string();
        }
        let mut out = String::with_capacity(markdown.len());
        for line in markdown.lines() {
            if line.starts_with('#') {
                let _ = writeln!(out, "\x1b[34m{line}\x1b[0m");
            } else {
                let _ = writeln!(out, "{}", self.skin.inline(line));
            }
        }
        out
    }

    /// Print markdown to stdout.
    pub fn render(&self, markdown: &str) {
        print!("{}", self.format(markdown));
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
