//! Clear command: reset the store to empty.

use anyhow::{bail, Result};
use rollcall_lib::Store;

use super::Context;
use crate::cli::ClearArgs;
use crate::history::{self, HistoryConfig};

/// Execute the clear command.
///
/// # Errors
///
/// Returns an error without `--yes`, or if the safety backup fails.
pub fn execute(args: &ClearArgs, ctx: &Context) -> Result<()> {
    if !args.yes {
        bail!("refusing to clear all data without --yes");
    }

    history::backup_before_replace(&ctx.store_path, &HistoryConfig::default())?;

    let mut store = Store::open(&ctx.store_path);
    store.clear_all();

    println!("Cleared all data.");
    Ok(())
}
