//! Durable storage for the snapshot.
//!
//! The entire snapshot lives in a single JSON file (the durable slot).
//! Reads are lenient: a missing or unparsable file yields the empty
//! snapshot. Writes replace the whole file atomically (temp + rename).

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::Snapshot;

/// Load the snapshot from the durable slot.
///
/// Missing or malformed data is treated as "no data yet": the empty
/// snapshot is returned and the condition is logged, never surfaced.
#[must_use]
pub fn load(path: &Path) -> Snapshot {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Unreadable store at {}: {e}", path.display());
            }
            return Snapshot::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!("Malformed store at {}: {e}; starting empty", path.display());
            Snapshot::default()
        }
    }
}

/// Persist the full snapshot to the durable slot.
///
/// Writes the complete serialized snapshot to a temp file next to the
/// target, then renames it into place. The parent directory is created
/// on demand.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written, or `Json` on
/// serialization failure.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string(snapshot)?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttendanceRecord, Member, Session};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            members: vec![Member {
                id: "mem-abc1".to_string(),
                name: "Ann".to_string(),
                email: Some("ann@example.com".to_string()),
                phone: None,
            }],
            sessions: vec![Session {
                id: "ses-xyz1".to_string(),
                title: "Week 1".to_string(),
                date: "2025-01-01".parse().unwrap(),
                notes: None,
            }],
            attendance: vec![AttendanceRecord {
                session_id: "ses-xyz1".to_string(),
                member_id: "mem-abc1".to_string(),
                present: true,
            }],
        }
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let snapshot = sample_snapshot();
        save(&path, &snapshot).unwrap();

        let loaded = load(&path);
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_missing_file_yields_empty() {
        let loaded = load(Path::new("/nonexistent/store.json"));
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_malformed_file_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json at all").unwrap();

        let loaded = load(&path);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".rollcall").join("store.json");

        save(&path, &Snapshot::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_wire_format_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        save(&path, &sample_snapshot()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"sessionId\""));
        assert!(text.contains("\"memberId\""));
        assert!(text.contains("\"2025-01-01\""));
    }
}
