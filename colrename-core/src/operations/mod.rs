//! High-level operations that correspond to CLI invocations
//!
//! Kept separate from argument parsing and console output so the same run can
//! be driven from tests or other tools.

pub mod run;

pub use run::{default_targets, run_operation, RunError, RunOptions, RunResult, DEFAULT_TARGETS};
