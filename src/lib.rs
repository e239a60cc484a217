#![warn(missing_docs)]
//! Helpers to post-process the summary tables of a solver log parser.
//!
//! A summary holds one row per solver run: the solver `Version`, the `Model`, the
//! `LogFilePath` and the parameter settings of the run. Parameters that were left at their
//! default are missing in the log and therefore in the summary. This crate fills them with the
//! defaults of the run's solver version, replaces the codes of categorical parameters with
//! readable descriptions and derives a short name for every log.
//!
//! The defaults of a version are read from `<version>.json` files (e.g. `950.json` for 9.5.0).
//! Versions without such a file use the 9.5.0 defaults.
//!
//! Example
//! ```rust
//! use solver_log_tools::defaults::DefaultStore;
//! use solver_log_tools::{descriptions, log_names, parameters};
//! # use std::path::PathBuf;
//! # use anyhow::Result;
//!
//! fn example() -> Result<()> {
//!     let store = DefaultStore::bundled(); // or DefaultStore::new("path/to/defaults")
//!
//!     // summary csvs have a header with at least a Version column, parameter columns carry a
//!     // " (Parameter)" suffix
//!     let df = solver_log_tools::summary::read_summary_csvs(&[PathBuf::from("summary.csv")])?;
//!
//!     let df = parameters::fill_default_parameters(df, &store)?;
//!     let df = descriptions::add_categorical_descriptions(df)?;
//!     let df = log_names::add_log_names(df)?;
//!     println!("{}", df);
//!     Ok(())
//! }
//!
//! ```

/// Configuration, command line arguments and shared column names.
pub mod datastructures;

/// Per-version parameter defaults read from json files.
pub mod defaults;

/// Human readable descriptions of categorical parameters.
pub mod descriptions;

/// Short names for log files.
pub mod log_names;

/// Filling of missing parameter values with version defaults.
pub mod parameters;

/// Reading, processing and writing of summary CSVs.
pub mod summary;

#[cfg(test)]
mod test_utils;
