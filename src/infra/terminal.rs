// ============================================================
// Layer 6 — Terminal Screen & Participant Input
// ============================================================
// The real implementations of the Screen and AckInput seams.
//
// Rendering uses crossterm, which translates to the right
// control sequences on Linux/macOS/Windows alike:
//   - clear:         wipe the whole screen, cursor to top-left
//   - show_centered: query the terminal size and position the
//                    word at the middle row, horizontally
//                    centered on its character count
//
// Acknowledgments are one ENTER press each: a blocking line read
// whose content is discarded. No raw mode, no timeout — the
// participant controls the pace, which is the entire method.
//
// Reference: crossterm crate documentation

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, BufRead, Write};

use crate::domain::traits::{AckInput, Screen};

/// The participant-facing terminal.
pub struct TerminalScreen {
    out: io::Stdout,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .context("failed to clear terminal")?;
        Ok(())
    }

    fn show_centered(&mut self, text: &str) -> Result<()> {
        let (cols, rows) = terminal::size().context("failed to query terminal size")?;

        // Center on the character count; a word wider than the
        // terminal just starts at column 0
        let width = text.chars().count() as u16;
        let col = cols.saturating_sub(width) / 2;
        let row = rows / 2;

        execute!(self.out, MoveTo(col, row), Print(text))
            .context("failed to render stimulus word")?;
        self.out.flush()?;
        Ok(())
    }

    fn show_prompt(&mut self, text: &str) -> Result<()> {
        execute!(self.out, Print(text), Print("\n"))
            .context("failed to print prompt")?;
        self.out.flush()?;
        Ok(())
    }
}

/// One ENTER press per acknowledgment, read from stdin.
pub struct StdinAck;

impl AckInput for StdinAck {
    fn wait_for_ack(&mut self) -> Result<()> {
        let mut discard = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut discard)
            .context("failed to read acknowledgment")?;

        // EOF mid-session means the participant is gone; there
        // is no sensible way to continue measuring
        if n == 0 {
            bail!("input closed before acknowledgment");
        }
        Ok(())
    }
}
