//! This crate provides the core logic for a single-tape Turing Machine simulator.
//! It includes modules for reading CSV rule tables, building transition tables,
//! executing a machine step by step, and handing each step to a display sink.

pub mod display;
pub mod loader;
pub mod machine;
pub mod parser;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the display sink trait, snapshot types, and text renderer.
pub use display::{render_frame, Frame, FrameSink, Recorder, Snapshot};
/// Re-exports the `TableLoader` struct from the loader module.
pub use loader::TableLoader;
/// Re-exports the `TuringMachine` struct and its `Summary` from the machine module.
pub use machine::{Summary, TuringMachine};
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the types shared across modules.
pub use types::{Action, Config, Instruction, RuleRecord, Step, TuringMachineError};
