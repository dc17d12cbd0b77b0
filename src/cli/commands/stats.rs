//! Stats command: summary counts.

use anyhow::Result;
use rollcall_lib::Store;
use serde::Serialize;

use super::Context;

/// Aggregate statistics over the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub members: usize,
    pub sessions: usize,
    pub attendance_records: usize,
    pub marked_present: usize,
}

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if JSON output fails to serialize.
pub fn execute(ctx: &Context) -> Result<()> {
    let store = Store::open(&ctx.store_path);
    let snapshot = store.snapshot();

    let stats = Statistics {
        members: snapshot.members.len(),
        sessions: snapshot.sessions.len(),
        attendance_records: snapshot.attendance.len(),
        marked_present: snapshot.attendance.iter().filter(|r| r.present).count(),
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Members:            {}", stats.members);
        println!("Sessions:           {}", stats.sessions);
        println!("Attendance records: {}", stats.attendance_records);
        println!("Marked present:     {}", stats.marked_present);
    }
    Ok(())
}
