//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

/// A run of markdown lines rendered the same way.
#[derive(Debug, PartialEq, Eq)]
enum Block<'a> {
    Header(&'a str),
    Table(Vec<&'a str>),
    Line(&'a str),
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.strikeout.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for block in blocks(markdown) {
            match block {
                // Keep the hash symbols visible
                Block::Header(line) => println!("\x1b[34m{line}\x1b[0m"),
                // Tables need the whole block to size their columns
                Block::Table(lines) => self.skin.print_text(&lines.join("\n")),
                Block::Line(line) => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Groups consecutive table rows so they can be laid out together.
fn blocks(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    for line in markdown.lines() {
        if line.starts_with('|') {
            match blocks.last_mut() {
                Some(Block::Table(rows)) => rows.push(line),
                _ => blocks.push(Block::Table(vec![line])),
            }
        } else if line.starts_with('#') {
            blocks.push(Block::Header(line));
        } else {
            blocks.push(Block::Line(line));
        }
    }
    blocks
}
