//! confsweep is a parameter-sweep configuration generator.
//! It expands a template whose values may be lists or numeric ranges into
//! every combination of those values, writing one configuration file per
//! combination into its own directory.

/// Command-line interface module for the confsweep application
pub mod cli;

/// Mixed-radix enumeration of parameter combinations
pub mod combinations;

/// Fixed file names, prefixes and limits
pub mod constants;

/// Value-domain classification and range expansion
pub mod domain;

/// Error types and handling for the confsweep application
pub mod error;

/// Logger initialisation for the binary
pub mod logger;

/// Optional sweep.json summary
pub mod manifest;

/// Materialization of combinations and sweep orchestration
pub mod processor;

/// Template reading, boolean normalization and parsing
pub mod template;

pub use processor::{run_sweep, SweepOptions, SweepSummary};
