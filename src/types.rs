//! This module defines the core data structures and types shared by the simulator, including
//! tape actions, instructions, raw rule records, run configuration, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::Rule;

/// The symbol prepended to every input tape as a visual start-of-tape anchor.
pub const TAPE_MARKER: char = '^';
/// The symbol appended when the head moves past the right end of the tape.
pub const BLANK_SYMBOL: char = '_';
/// The action token that moves the head one cell to the left.
pub const MOVE_LEFT_TOKEN: &str = "<-";
/// The action token that moves the head one cell to the right.
pub const MOVE_RIGHT_TOKEN: &str = "->";
/// The state a machine starts in unless configured otherwise.
pub const DEFAULT_INITIAL_STATE: &str = "s";
/// The state that stops a machine unless configured otherwise.
pub const DEFAULT_HALT_STATE: &str = "h";
/// The initial head position, just past the tape marker.
pub const INITIAL_HEAD: usize = 1;

/// What happens to the tape or head when a transition fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Move the head one position to the left.
    MoveLeft,
    /// Move the head one position to the right, growing the tape if needed.
    MoveRight,
    /// Replace the symbol under the head.
    Write(char),
}

impl FromStr for Action {
    type Err = String;

    /// Parses an action token: `<-`, `->`, or a single symbol to write.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            MOVE_LEFT_TOKEN => Ok(Action::MoveLeft),
            MOVE_RIGHT_TOKEN => Ok(Action::MoveRight),
            _ => single_char(token)
                .map(Action::Write)
                .ok_or_else(|| format!("action {token:?} is not '<-', '->' or a single symbol")),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::MoveLeft => f.write_str(MOVE_LEFT_TOKEN),
            Action::MoveRight => f.write_str(MOVE_RIGHT_TOKEN),
            Action::Write(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// The value stored in a transition table: where to go next and what to do on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The state the machine transitions to.
    pub next_state: String,
    /// The action applied to the tape.
    pub action: Action,
}

/// A raw, unvalidated rule as read from a table source.
///
/// Fields follow the column order of a rule file: current state, symbol read,
/// next state, action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub state: String,
    pub read: String,
    pub next_state: String,
    pub action: String,
}

impl RuleRecord {
    pub fn new(
        state: impl Into<String>,
        read: impl Into<String>,
        next_state: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            read: read.into(),
            next_state: next_state.into(),
            action: action.into(),
        }
    }
}

/// Start-up parameters for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The state the machine starts in.
    pub initial_state: String,
    /// The state that ends the run.
    pub halt_state: String,
    /// The input written after the tape marker.
    pub input: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_state: DEFAULT_INITIAL_STATE.to_string(),
            halt_state: DEFAULT_HALT_STATE.to_string(),
            input: String::new(),
        }
    }
}

/// Represents the outcome of a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine applied an instruction and may continue.
    Continue,
    /// The machine is in its halting state; nothing was applied.
    Halt,
}

/// Represents the errors that can occur while loading a table or running a machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuringMachineError {
    /// The rule source could not be read.
    #[error("File error: {0}")]
    FileError(String),
    /// The rule source is not well-formed CSV, or a record has the wrong number of fields.
    #[error("Table parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// A record carries an unusable read symbol or action (1-based record position).
    #[error("Invalid rule #{0}: {1}")]
    InvalidRule(usize, String),
    /// No instruction is defined for the current state and symbol.
    #[error("No rule defined for state {0:?} and symbol {1:?}")]
    UnknownTransition(String, char),
    /// The head attempted to move left of position 0.
    #[error("Attempted to move head past start of tape")]
    HeadUnderflow,
    /// The display sink failed to render a frame.
    #[error("Display error: {0}")]
    DisplayError(String),
}

impl TuringMachineError {
    /// Returns true for errors raised while reading or building a transition table.
    pub fn is_table_load_error(&self) -> bool {
        matches!(
            self,
            Self::FileError(_) | Self::ParseError(_) | Self::InvalidRule(..)
        )
    }
}

/// Returns the only character of `s`, or `None` if it has zero or several.
pub(crate) fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str() {
        assert_eq!("<-".parse::<Action>(), Ok(Action::MoveLeft));
        assert_eq!("->".parse::<Action>(), Ok(Action::MoveRight));
        assert_eq!("1".parse::<Action>(), Ok(Action::Write('1')));
        assert_eq!("_".parse::<Action>(), Ok(Action::Write('_')));
        assert_eq!("é".parse::<Action>(), Ok(Action::Write('é')));
    }

    #[test]
    fn test_action_rejects_malformed_tokens() {
        assert!("".parse::<Action>().is_err());
        assert!("10".parse::<Action>().is_err());
        assert!("<".parse::<Action>().is_ok()); // a lone '<' is just a symbol
        assert!("<--".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_display_matches_tokens() {
        assert_eq!(Action::MoveLeft.to_string(), "<-");
        assert_eq!(Action::MoveRight.to_string(), "->");
        assert_eq!(Action::Write('x').to_string(), "x");
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::Write('1')).unwrap();
        assert_eq!(json, r#"{"Write":"1"}"#);

        let left: Action = serde_json::from_str("\"MoveLeft\"").unwrap();
        assert_eq!(left, Action::MoveLeft);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.initial_state, "s");
        assert_eq!(config.halt_state, "h");
        assert!(config.input.is_empty());
    }

    #[test]
    fn test_error_display() {
        let error = TuringMachineError::UnknownTransition("q0".to_string(), '1');

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("No rule defined"));
        assert!(error_msg.contains("q0"));
        assert!(error_msg.contains("'1'"));
    }

    #[test]
    fn test_table_load_error_classification() {
        assert!(TuringMachineError::FileError("missing".into()).is_table_load_error());
        assert!(TuringMachineError::InvalidRule(1, "bad".into()).is_table_load_error());
        assert!(!TuringMachineError::HeadUnderflow.is_table_load_error());
        assert!(!TuringMachineError::UnknownTransition("s".into(), '0').is_table_load_error());
    }
}
