use std::io;

use crossterm::terminal;
use log::debug;

/// Keeps the terminal in raw mode for its lifetime.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("terminal: raw mode on");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            debug!("terminal: leaving raw mode failed: {}", err);
        }
    }
}
