use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use crate::render::frame::TextFrame;

/// Writes whole text frames to a terminal, top-left anchored.
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush_frame(&mut self, frame: &TextFrame) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        for line in frame.lines() {
            // Raw mode does not translate newlines.
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}
