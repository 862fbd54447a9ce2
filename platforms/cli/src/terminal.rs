use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tmrun::{render_frame, FrameSink, Snapshot};

/// Draws each frame to a terminal and paces the animation.
pub struct TerminalSink<W: Write> {
    out: W,
    delay: Duration,
    clear: bool,
}

impl<W: Write> TerminalSink<W> {
    /// Creates a sink that waits `delay` after every frame. When `clear` is set, the screen
    /// is wiped before each frame so the tape redraws in place.
    pub fn new(out: W, delay: Duration, clear: bool) -> Self {
        Self { out, delay, clear }
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn frame(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        self.out.write_all(render_frame(snapshot).as_bytes())?;
        self.out.flush()?;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        Ok(())
    }
}

/// A sink that draws nothing.
pub fn discard(_: &Snapshot<'_>) -> io::Result<()> {
    Ok(())
}
