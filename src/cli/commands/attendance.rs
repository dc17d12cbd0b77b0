//! Attendance command: render the roll for one session.

use anyhow::Result;
use rollcall_lib::Store;

use super::Context;
use crate::cli::AttendanceArgs;
use crate::format::format_roll_line;

/// Execute the attendance command.
///
/// # Errors
///
/// Returns an error if the session id cannot be resolved.
pub fn execute(args: &AttendanceArgs, ctx: &Context) -> Result<()> {
    let store = Store::open(&ctx.store_path);
    let session_id = store.resolve_session_id(&args.session)?;
    let roll = store.attendance_for(&session_id);

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&roll)?);
        return Ok(());
    }

    // resolve_session_id guarantees the session exists
    let snapshot = store.snapshot();
    if let Some(session) = snapshot.session(&session_id) {
        println!("{} ({})", session.title, session.date);
    }

    if snapshot.members.is_empty() {
        println!("No members.");
        return Ok(());
    }

    for member in &snapshot.members {
        let mark = roll.get(member.id.as_str()).copied();
        println!("{}", format_roll_line(member, mark));
    }

    let present_count = roll.values().filter(|present| **present).count();
    println!("\n{present_count}/{} present", snapshot.members.len());
    Ok(())
}
