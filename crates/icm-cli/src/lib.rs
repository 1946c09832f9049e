//! Library side of the `icm` command line tool.
//!
//! The binary only parses arguments and wires these modules together, so
//! every command can be driven from tests with in-memory readers and writers.

pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
