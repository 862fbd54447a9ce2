//! The machine's tape: a sequence of symbols that only ever grows to the right.

use crate::types::{TuringMachineError, BLANK_SYMBOL, TAPE_MARKER};
use std::fmt;

/// A single, right-extensible tape.
///
/// The first cell always holds [`TAPE_MARKER`] as placed by [`Tape::new`]; the engine treats
/// it as ordinary data and may overwrite it like any other symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<char>,
}

impl Tape {
    /// Creates a tape holding the marker followed by `input`.
    pub fn new(input: &str) -> Self {
        let mut cells = Vec::with_capacity(input.len() + 1);
        cells.push(TAPE_MARKER);
        cells.extend(input.chars());

        Self { cells }
    }

    /// Returns the symbol at `index`, or `None` past the end of the tape.
    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    /// Appends a single [`BLANK_SYMBOL`] if `index` is exactly one past the end.
    ///
    /// Only an empty input leaves the initial head there.
    pub fn ensure_cell(&mut self, index: usize) {
        if index == self.cells.len() {
            self.cells.push(BLANK_SYMBOL);
        }
    }

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the tape; callers keep the head in bounds.
    pub fn read(&self, index: usize) -> char {
        self.cells[index]
    }

    /// Replaces the symbol at `index`. The tape length never changes.
    pub fn write(&mut self, index: usize, symbol: char) {
        self.cells[index] = symbol;
    }

    /// Returns the head position one cell to the left.
    ///
    /// The tape never extends leftwards, so moving left from position 0 fails with
    /// [`TuringMachineError::HeadUnderflow`] and leaves everything untouched.
    pub fn move_left(&self, head: usize) -> Result<usize, TuringMachineError> {
        head.checked_sub(1).ok_or(TuringMachineError::HeadUnderflow)
    }

    /// Returns the head position one cell to the right.
    ///
    /// When the head sits on the last cell, a single [`BLANK_SYMBOL`] is appended first.
    pub fn move_right(&mut self, head: usize) -> usize {
        if head + 1 == self.cells.len() {
            self.cells.push(BLANK_SYMBOL);
        }

        head + 1
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a tape holds at least its marker.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cells.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prepends_marker() {
        let tape = Tape::new("101");

        assert_eq!(tape.to_string(), "^101");
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.read(0), '^');
        assert_eq!(tape.read(1), '1');
    }

    #[test]
    fn test_new_with_empty_input() {
        let tape = Tape::new("");

        assert_eq!(tape.cells(), &['^']);
        assert!(!tape.is_empty());
        assert_eq!(tape.get(1), None);
    }

    #[test]
    fn test_new_counts_characters_not_bytes() {
        let tape = Tape::new("αβ");

        assert_eq!(tape.len(), 3);
        assert_eq!(tape.read(2), 'β');
    }

    #[test]
    fn test_write_replaces_in_place() {
        let mut tape = Tape::new("101");
        tape.write(3, '0');

        assert_eq!(tape.to_string(), "^100");
        assert_eq!(tape.len(), 4);

        tape.write(0, 'x');
        assert_eq!(tape.to_string(), "x100");
        assert_eq!(tape.len(), 4);
    }

    #[test]
    fn test_move_right_at_boundary_grows_by_one() {
        let mut tape = Tape::new("ab");
        assert_eq!(tape.len(), 3);

        let head = tape.move_right(2);

        assert_eq!(head, 3);
        assert_eq!(tape.len(), 4);
        assert_eq!(tape.read(3), BLANK_SYMBOL);
    }

    #[test]
    fn test_move_right_inside_tape_does_not_grow() {
        let mut tape = Tape::new("ab");

        let head = tape.move_right(1);

        assert_eq!(head, 2);
        assert_eq!(tape.to_string(), "^ab");
    }

    #[test]
    fn test_move_left() {
        let tape = Tape::new("ab");

        assert_eq!(tape.move_left(2), Ok(1));
        assert_eq!(tape.move_left(1), Ok(0));
    }

    #[test]
    fn test_move_left_underflow() {
        let tape = Tape::new("ab");

        assert_eq!(tape.move_left(0), Err(TuringMachineError::HeadUnderflow));
        assert_eq!(tape.to_string(), "^ab");
    }

    #[test]
    fn test_ensure_cell_only_grows_at_end() {
        let mut tape = Tape::new("");

        tape.ensure_cell(0);
        assert_eq!(tape.to_string(), "^");

        tape.ensure_cell(1);
        assert_eq!(tape.to_string(), "^_");

        tape.ensure_cell(1);
        assert_eq!(tape.len(), 2);
    }
}
