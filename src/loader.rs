//! This module provides the `TableLoader` struct, responsible for loading rule tables
//! from files, strings, and arbitrary readers such as stdin.

use crate::parser::parse;
use crate::table::TransitionTable;
use crate::types::{RuleRecord, TuringMachineError};
use std::fs;
use std::io::Read;
use std::path::Path;

/// `TableLoader` is a utility struct for loading transition tables.
pub struct TableLoader;

impl TableLoader {
    /// Reads the raw rule records from the specified file, without validating them.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<RuleRecord>)` if the file is read and parsed successfully.
    /// * `Err(TuringMachineError::FileError)` if the file cannot be read.
    /// * `Err(TuringMachineError::ParseError)` if the file is not a valid rule table.
    pub fn load_records(path: &Path) -> Result<Vec<RuleRecord>, TuringMachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TuringMachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Loads and builds a transition table from the specified file.
    ///
    /// # Returns
    ///
    /// * `Ok(TransitionTable)` if the file holds a valid rule table.
    /// * `Err(TuringMachineError::FileError)` if the file cannot be read.
    /// * `Err(TuringMachineError::ParseError)` if the file is not well-formed.
    /// * `Err(TuringMachineError::InvalidRule)` if a record has a bad symbol or action.
    pub fn load_table(path: &Path) -> Result<TransitionTable, TuringMachineError> {
        TransitionTable::build(Self::load_records(path)?)
    }

    /// Loads and builds a transition table from string content.
    pub fn load_table_from_string(content: &str) -> Result<TransitionTable, TuringMachineError> {
        TransitionTable::build(parse(content)?)
    }

    /// Loads and builds a transition table from a reader, consuming it to the end.
    pub fn load_table_from_reader<R: Read>(
        mut reader: R,
    ) -> Result<TransitionTable, TuringMachineError> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| {
            TuringMachineError::FileError(format!("Failed to read rule table: {}", e))
        })?;

        Self::load_table_from_string(&content)
    }
}
