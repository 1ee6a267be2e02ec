//! Terminal backend abstraction and crossterm implementation.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::{Write, stdout};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// One full screen: banner, buffer text, then an optional status / prompt line.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub header: &'a [&'a str],
    pub body: &'a str,
    pub status: Option<&'a str>,
    /// (label, current input)
    pub prompt: Option<(&'a str, &'a str)>,
}

impl Frame<'_> {
    /// Text as written to a raw-mode terminal (`\n` needs an explicit `\r`).
    pub fn to_raw_text(&self) -> String {
        let mut out = String::new();
        for line in self.header {
            out.push_str(line);
            out.push_str("\r\n");
        }
        out.push_str(&self.body.replace('\n', "\r\n"));
        if let Some((label, input)) = self.prompt {
            out.push_str("\r\n");
            out.push_str(label);
            out.push_str(input);
        } else if let Some(status) = self.status {
            out.push_str("\r\n");
            out.push_str("-- ");
            out.push_str(status);
        }
        out
    }
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }
}

impl TerminalGuard<'_> {
    pub fn backend(&mut self) -> &mut CrosstermBackend {
        &mut *self.backend
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
            self.entered = true;
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let mut out = stdout().lock();
        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(frame.to_raw_text())
        )?;
        out.flush()?;
        Ok(())
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}
