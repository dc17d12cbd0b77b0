//! Snapshot serialization: CSV reports, JSON backups, and import parsing.

use crate::error::{Result, RollcallError};
use crate::model::{Session, Snapshot};

/// Default file name for full JSON backups.
pub const BACKUP_FILE_NAME: &str = "attendance-backup.json";

/// Header row for per-session attendance reports.
pub const CSV_HEADER: &str = "Name,Email,Phone,Present,Session,Date";

/// Render the full snapshot as pretty-printed JSON, no transformation.
///
/// # Errors
///
/// Returns `Json` on serialization failure.
pub fn json_backup(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Suggested file name for a session's CSV report:
/// `<date>-<title>-attendance.csv`.
#[must_use]
pub fn csv_file_name(session: &Session) -> String {
    format!("{}-{}-attendance.csv", session.date, session.title)
}

/// Render the attendance report for one session as CSV.
///
/// One header row, then one row per member in member-list order with
/// columns name, email, phone, present ("Yes"/"No"), session title,
/// session date. A member with no attendance record counts as "No".
///
/// # Errors
///
/// Returns `SessionNotFound` if the session doesn't exist.
pub fn session_csv(snapshot: &Snapshot, session_id: &str) -> Result<String> {
    let session = snapshot
        .session(session_id)
        .ok_or_else(|| RollcallError::SessionNotFound {
            id: session_id.to_string(),
        })?;

    let mut out = String::with_capacity(64 * (snapshot.members.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    let date = session.date.to_string();
    for member in &snapshot.members {
        let present = snapshot
            .attendance
            .iter()
            .find(|r| r.session_id == session_id && r.member_id == member.id)
            .is_some_and(|r| r.present);

        let fields = [
            member.name.as_str(),
            member.email.as_deref().unwrap_or(""),
            member.phone.as_deref().unwrap_or(""),
            if present { "Yes" } else { "No" },
            session.title.as_str(),
            date.as_str(),
        ];

        let mut first = true;
        for field in fields {
            if !first {
                out.push(',');
            }
            out.push_str(&csv_field(field));
            first = false;
        }
        out.push('\n');
    }

    Ok(out)
}

/// Quote a CSV field when required.
///
/// A field needs quoting iff it contains a comma, a double quote, or a
/// newline; quoting doubles internal quotes and wraps the whole field in
/// double quotes. Everything else passes through untouched.
#[must_use]
pub fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Parse and validate an import payload.
///
/// Two failure modes, both leaving the caller's state untouched: the text
/// fails to parse (`Parse`), or the parsed value fails the shape check or
/// typed decode (`InvalidFormat`).
///
/// # Errors
///
/// Returns `Parse` or `InvalidFormat` as above.
pub fn parse_import(text: &str) -> Result<Snapshot> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| RollcallError::Parse {
            reason: e.to_string(),
        })?;
    import_from_value(value)
}

/// Validate an already-parsed candidate and decode it into a snapshot.
///
/// # Errors
///
/// Returns `InvalidFormat` if the shape check or typed decode fails.
pub fn import_from_value(value: serde_json::Value) -> Result<Snapshot> {
    validate_shape(&value)?;
    serde_json::from_value(value).map_err(|e| RollcallError::InvalidFormat {
        reason: e.to_string(),
    })
}

/// Shape check for import candidates.
///
/// The candidate must be an object carrying `members`, `sessions`, and
/// `attendance` as arrays. Element schemas are left to the typed decode
/// that follows.
///
/// # Errors
///
/// Returns `InvalidFormat` naming the first offending field.
pub fn validate_shape(value: &serde_json::Value) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Err(RollcallError::invalid_format("not a JSON object"));
    };

    for field in ["members", "sessions", "attendance"] {
        match obj.get(field) {
            Some(v) if v.is_array() => {}
            Some(_) => {
                return Err(RollcallError::invalid_format(format!(
                    "field '{field}' is not an array"
                )));
            }
            None => {
                return Err(RollcallError::invalid_format(format!(
                    "missing field '{field}'"
                )));
            }
        }
    }

    Ok(())
}
