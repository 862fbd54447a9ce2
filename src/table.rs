//! This module defines the `TransitionTable`, the immutable mapping from a state and the
//! symbol under the head to the instruction the machine applies next.

use crate::types::{single_char, Action, Instruction, RuleRecord, TuringMachineError};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// A deterministic transition table keyed by `(state, symbol)`.
///
/// The table is built once from an ordered list of [`RuleRecord`]s and is read-only
/// afterwards. When several records share a key, the last one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionTable {
    /// Instructions grouped by source state, then by the symbol read.
    rules: HashMap<String, HashMap<char, Instruction>>,
}

impl TransitionTable {
    /// Builds a table from rule records, in order.
    ///
    /// Every record is validated before it is inserted: the read column must be a single
    /// symbol and the action must be `<-`, `->` or a single symbol to write.
    ///
    /// # Returns
    ///
    /// * `Ok(TransitionTable)` if every record is valid.
    /// * `Err(TuringMachineError::InvalidRule)` naming the first offending record (1-based).
    pub fn build<I>(records: I) -> Result<Self, TuringMachineError>
    where
        I: IntoIterator<Item = RuleRecord>,
    {
        let mut rules: HashMap<String, HashMap<char, Instruction>> = HashMap::new();

        for (index, record) in records.into_iter().enumerate() {
            let position = index + 1;

            let symbol = single_char(&record.read).ok_or_else(|| {
                TuringMachineError::InvalidRule(
                    position,
                    format!("read symbol {:?} must be a single character", record.read),
                )
            })?;
            let action: Action = record
                .action
                .parse()
                .map_err(|e| TuringMachineError::InvalidRule(position, e))?;

            let instruction = Instruction {
                next_state: record.next_state,
                action,
            };

            let by_symbol = rules.entry(record.state.clone()).or_default();
            if let Some(previous) = by_symbol.insert(symbol, instruction) {
                debug!(
                    rule = position,
                    state = %record.state,
                    symbol = %symbol,
                    replaced = ?previous,
                    "duplicate rule overrides earlier definition"
                );
            }
        }

        let table = Self { rules };
        info!(
            rules = table.len(),
            states = table.states().len(),
            "transition table built"
        );

        Ok(table)
    }

    /// Returns the instruction for `state` reading `symbol`.
    ///
    /// A missing entry is a defect in the supplied table and is reported as
    /// [`TuringMachineError::UnknownTransition`].
    pub fn lookup(&self, state: &str, symbol: char) -> Result<&Instruction, TuringMachineError> {
        self.rules
            .get(state)
            .and_then(|by_symbol| by_symbol.get(&symbol))
            .ok_or_else(|| TuringMachineError::UnknownTransition(state.to_string(), symbol))
    }

    /// Returns the number of distinct `(state, symbol)` keys.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the distinct source states, sorted.
    pub fn states(&self) -> BTreeSet<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, char, &Instruction)> {
        self.rules.iter().flat_map(|(state, by_symbol)| {
            by_symbol
                .iter()
                .map(move |(symbol, instruction)| (state.as_str(), *symbol, instruction))
        })
    }
}
