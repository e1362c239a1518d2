//! # CLI Layer
//!
//! This module is **one possible UI client** for phonebook. It is the only
//! place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses process arguments
//! - Styles output for human consumption
//! - Installs the log subscriber
//!
//! ## Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup, the interactive session and one-shot mode
//! - `render`: Output formatting (colors, record lines, messages)

mod commands;
mod render;
pub mod setup;

pub use commands::run;
