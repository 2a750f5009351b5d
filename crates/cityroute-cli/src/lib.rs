//! cityroute CLI library.
//!
//! Subcommand handlers, output formatting, and terminal styling for the
//! `cityroute` binary. Handlers write to any `io::Write` so they can be
//! exercised without a terminal.

pub mod commands;
pub mod output;
pub mod terminal;
