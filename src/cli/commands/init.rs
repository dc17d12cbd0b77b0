//! Init command: create the durable slot.

use anyhow::Result;
use rollcall_lib::Store;

use super::Context;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the store file cannot be written.
pub fn execute(ctx: &Context) -> Result<()> {
    if ctx.store_path.exists() {
        println!("Store already exists at {}", ctx.store_path.display());
        return Ok(());
    }

    let store = Store::open(&ctx.store_path);
    store.persist()?;
    println!("Initialized empty store at {}", ctx.store_path.display());

    Ok(())
}
