//! Terminal "fullscreen": the alternate screen buffer with the cursor hidden.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use storybook_core::platform::{FullscreenControl, FullscreenError};

#[derive(Debug)]
pub struct TerminalFullscreen<W: Write> {
    out: W,
    active: bool,
}

impl TerminalFullscreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalFullscreen<W> {
    pub fn new(out: W) -> Self {
        Self { out, active: false }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> FullscreenControl for TerminalFullscreen<W> {
    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn request(&mut self) -> Result<(), FullscreenError> {
        execute!(self.out, EnterAlternateScreen, Hide).map_err(|err| {
            debug!("fullscreen: enter failed: {}", err);
            FullscreenError::Rejected
        })?;
        self.active = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<(), FullscreenError> {
        execute!(self.out, LeaveAlternateScreen, Show).map_err(|err| {
            debug!("fullscreen: leave failed: {}", err);
            FullscreenError::Rejected
        })?;
        self.active = false;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalFullscreen<W> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.exit();
        }
    }
}
