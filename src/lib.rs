//! `rollcall` - local attendance ledger CLI
//!
//! This crate provides the presentation layer for the `rcl` tool. The
//! data model, persistent store, and serialization live in the
//! `rollcall-lib` crate; everything here parses user intents, validates
//! input, and formats output.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Store location resolution
//! - [`format`] - Output formatting (text, JSON)
//! - [`history`] - Safety backups before wholesale store replacement
//! - [`logging`] - Tracing subscriber setup
//! - [`validation`] - Caller-side input validation

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod history;
pub mod logging;
pub mod validation;

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
