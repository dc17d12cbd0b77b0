//! Mark command: upsert one attendance record.

use anyhow::Result;
use rollcall_lib::Store;

use super::Context;
use crate::cli::MarkArgs;

/// Execute the mark command.
///
/// # Errors
///
/// Returns an error if either id cannot be resolved.
pub fn execute(args: &MarkArgs, ctx: &Context) -> Result<()> {
    let mut store = Store::open(&ctx.store_path);
    let session_id = store.resolve_session_id(&args.session)?;
    let member_id = store.resolve_member_id(&args.member)?;

    // --present is the default; --absent writes an explicit "No".
    let present = args.present || !args.absent;
    store.set_attendance(&session_id, &member_id, present);

    println!(
        "Marked {member_id} {} for {session_id}",
        if present { "present" } else { "absent" }
    );
    Ok(())
}
