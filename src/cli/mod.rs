// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running verification from the command line.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `verify` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Verbosity flag and output macros.
pub mod logging;

/// Verification logic.
pub mod verify;
