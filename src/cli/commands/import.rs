//! Import command: replace the store from a JSON backup.
//!
//! All-or-nothing: a payload that fails parsing or shape validation is
//! rejected with a message and the store is left untouched.

use std::fs;

use anyhow::{Context as _, Result};
use rollcall_lib::Store;

use super::Context;
use crate::cli::ImportArgs;
use crate::history::{self, HistoryConfig};

/// Execute the import command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the payload is invalid,
/// or the safety backup fails.
pub fn execute(args: &ImportArgs, ctx: &Context) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;

    if !args.no_backup {
        history::backup_before_replace(&ctx.store_path, &HistoryConfig::default())?;
    }

    let mut store = Store::open(&ctx.store_path);
    store.import_json(&text)?;

    let snapshot = store.snapshot();
    println!(
        "Imported {} member(s), {} session(s), {} attendance record(s)",
        snapshot.members.len(),
        snapshot.sessions.len(),
        snapshot.attendance.len()
    );
    Ok(())
}
