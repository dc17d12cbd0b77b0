//! Output formatting for `rollcall`.
//!
//! Supports human-readable text output and machine-parseable JSON
//! (`--json` sends clean JSON to stdout, diagnostics to stderr).

mod text;

pub use text::{
    format_mark_icon, format_member_line, format_roll_line, format_session_line,
};
