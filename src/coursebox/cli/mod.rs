//! # CLI Layer
//!
//! One client of the library. This is the only place that reads stdin,
//! writes to stdout or stderr, and decides the process exit code.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup, the line loop and the `config` subcommand
//! - `print`: colouring and wrapping of command results

mod commands;
mod print;
mod setup;

pub use commands::run;
