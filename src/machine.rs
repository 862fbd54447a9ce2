//! This module defines the `TuringMachine` struct, which simulates a single-tape,
//! deterministic Turing Machine. It owns the tape, head, and current state, and drives
//! execution through a [`TransitionTable`] until the halting state is reached.

use crate::display::{FrameSink, Snapshot};
use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{Action, Config, Step, TuringMachineError, BLANK_SYMBOL, INITIAL_HEAD};
use serde::Serialize;
use tracing::{info, trace};

/// Represents a single-tape Turing Machine.
///
/// This struct encapsulates the current state of the machine, its halting state, the tape,
/// the read/write head, and the transition table that drives it.
#[derive(Debug, Clone)]
pub struct TuringMachine {
    state: String,
    halt_state: String,
    tape: Tape,
    head: usize,
    table: TransitionTable,
    step_count: usize,
}

/// The owned, serializable configuration of a machine, typically taken after it halts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub state: String,
    pub tape: String,
    pub head: usize,
    pub steps: usize,
}

impl TuringMachine {
    /// Creates a new `TuringMachine` from a transition table and start-up configuration.
    ///
    /// The tape holds the marker followed by `config.input`, and the head starts on the
    /// first input cell. With an empty input that cell does not exist yet; it reads as
    /// blank and is appended by the first step that applies an instruction.
    ///
    /// # Arguments
    ///
    /// * `table` - The `TransitionTable` the machine executes.
    /// * `config` - Initial state, halting state, and input.
    pub fn new(table: TransitionTable, config: &Config) -> Self {
        Self {
            state: config.initial_state.clone(),
            halt_state: config.halt_state.clone(),
            tape: Tape::new(&config.input),
            head: INITIAL_HEAD,
            table,
            step_count: 0,
        }
    }

    /// Executes a single step of the machine's computation.
    ///
    /// Reads the symbol under the head, looks up the matching instruction, applies its
    /// action to the tape, and moves to the next state. A machine in its halting state does
    /// nothing, not even a table lookup.
    ///
    /// # Returns
    ///
    /// * `Ok(Step::Continue)` if an instruction was applied.
    /// * `Ok(Step::Halt)` if the machine is in its halting state.
    /// * `Err(TuringMachineError::UnknownTransition)` if no rule matches.
    /// * `Err(TuringMachineError::HeadUnderflow)` if the head would move left of the tape.
    ///
    /// On error the machine is left exactly as it was before the call.
    pub fn step(&mut self) -> Result<Step, TuringMachineError> {
        if self.is_halted() {
            return Ok(Step::Halt);
        }

        let symbol = self.tape.get(self.head).unwrap_or(BLANK_SYMBOL);
        let instruction = self.table.lookup(&self.state, symbol)?;
        self.tape.ensure_cell(self.head);

        trace!(
            step = self.step_count + 1,
            state = %self.state,
            symbol = %symbol,
            action = %instruction.action,
            next = %instruction.next_state,
            head = self.head,
            "applying instruction"
        );

        match instruction.action {
            Action::MoveLeft => self.head = self.tape.move_left(self.head)?,
            Action::MoveRight => self.head = self.tape.move_right(self.head),
            Action::Write(symbol) => self.tape.write(self.head, symbol),
        }

        self.state.clone_from(&instruction.next_state);
        self.step_count += 1;

        Ok(Step::Continue)
    }

    /// Runs the machine until it reaches its halting state.
    ///
    /// The sink receives the initial configuration, then one snapshot after every step.
    /// Any error aborts the run and is returned as-is; there is no step limit.
    pub fn run<S>(&mut self, sink: &mut S) -> Result<(), TuringMachineError>
    where
        S: FrameSink + ?Sized,
    {
        self.emit(sink)?;

        while self.step()? == Step::Continue {
            self.emit(sink)?;
        }

        info!(
            steps = self.step_count,
            state = %self.state,
            tape = %self.tape,
            head = self.head,
            "machine halted"
        );

        Ok(())
    }

    fn emit<S>(&self, sink: &mut S) -> Result<(), TuringMachineError>
    where
        S: FrameSink + ?Sized,
    {
        sink.frame(&self.snapshot())
            .map_err(|e| TuringMachineError::DisplayError(e.to_string()))
    }

    /// Returns the current state of the machine.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the state that ends execution.
    pub fn halt_state(&self) -> &str {
        &self.halt_state
    }

    /// Checks if the machine is in its halting state.
    pub fn is_halted(&self) -> bool {
        self.state == self.halt_state
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Returns the total number of steps executed so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns a borrowed view of the current configuration.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            step: self.step_count,
            state: &self.state,
            tape: self.tape.cells(),
            head: self.head,
        }
    }

    /// Returns an owned copy of the current configuration.
    pub fn summary(&self) -> Summary {
        Summary {
            state: self.state.clone(),
            tape: self.tape.to_string(),
            head: self.head,
            steps: self.step_count,
        }
    }
}
