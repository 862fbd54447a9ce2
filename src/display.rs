//! This module decouples rendering from execution. A running machine hands a [`Snapshot`]
//! to a [`FrameSink`] once before the first step and once after every step; the sink alone
//! decides how (and how fast) to show it.

use serde::Serialize;
use std::io;

/// A borrowed view of the machine after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot<'a> {
    /// Number of steps executed so far.
    pub step: usize,
    /// The machine's current state.
    pub state: &'a str,
    /// The full tape content.
    pub tape: &'a [char],
    /// The head position. It indexes into `tape`, except on the initial frame of an empty
    /// input, where it sits one past the marker.
    pub head: usize,
}

impl Snapshot<'_> {
    pub fn tape_string(&self) -> String {
        self.tape.iter().collect()
    }

    /// Returns an owned copy of this snapshot.
    pub fn to_frame(&self) -> Frame {
        Frame {
            step: self.step,
            state: self.state.to_string(),
            tape: self.tape_string(),
            head: self.head,
        }
    }
}

/// An owned [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub step: usize,
    pub state: String,
    pub tape: String,
    pub head: usize,
}

/// Receives one snapshot per frame of a run.
pub trait FrameSink {
    fn frame(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;
}

impl<F> FrameSink for F
where
    F: FnMut(&Snapshot<'_>) -> io::Result<()>,
{
    fn frame(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self(snapshot)
    }
}

/// A sink that keeps every frame in memory.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    frames: Vec<Frame>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl FrameSink for Recorder {
    fn frame(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.frames.push(snapshot.to_frame());
        Ok(())
    }
}

/// Renders the two-line text frame: the tape, then an `@` under the head.
///
/// ```
/// use tmrun::display::{render_frame, Snapshot};
///
/// let tape = ['^', '1', '1'];
/// let snapshot = Snapshot { step: 0, state: "s", tape: &tape, head: 1 };
/// assert_eq!(render_frame(&snapshot), "^11\n @\n");
/// ```
pub fn render_frame(snapshot: &Snapshot<'_>) -> String {
    format!(
        "{}\n{}@\n",
        snapshot.tape_string(),
        " ".repeat(snapshot.head)
    )
}
