//! confmat CLI library
//!
//! This library provides the command-line interface for computing a
//! Cat/Dog confusion matrix and its evaluation metrics.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
