//! `rollcall` (rcl) - local attendance ledger
//!
//! Tracks members, meeting sessions, and per-session roll call in one
//! JSON file on the local machine. No server, no daemon, no network.

use rollcall::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
