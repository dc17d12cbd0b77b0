//! Attendance store: the owned snapshot plus its mutation API.
//!
//! All writes go through the methods here. Every successful mutation
//! persists the complete new snapshot back to the durable slot,
//! best-effort: a failed save is logged and swallowed, and the in-memory
//! snapshot stays authoritative for the rest of the process.
//!
//! Unknown-id contract: `update_*` and `remove_*` on an id that is not in
//! the snapshot are a no-op reported through the `bool` return, not an
//! error. Callers must pass ids obtained from a current read of the
//! snapshot and surface the `false` case themselves.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{Result, RollcallError};
use crate::export;
use crate::id;
use crate::model::{AttendanceRecord, Member, NewMember, NewSession, Session, Snapshot};
use crate::query::{MemberPatch, SessionPatch};
use crate::storage;

/// In-memory attendance store, optionally backed by a durable slot.
pub struct Store {
    snapshot: Snapshot,
    path: Option<PathBuf>,
}

impl Store {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create an empty, unbacked store. Nothing is persisted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::default(),
            path: None,
        }
    }

    /// Open the store backed by the durable slot at `path`.
    ///
    /// A missing or malformed slot yields an empty store; this never
    /// fails. Parse failures are logged and treated as "no data yet".
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self {
            snapshot: storage::load(path),
            path: Some(path.to_path_buf()),
        }
    }

    /// Read-only view of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The durable slot backing this store, if any.
    #[must_use]
    pub fn backing_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the current snapshot to the durable slot, surfacing failures.
    ///
    /// Mutations persist automatically; this exists for explicit flushes
    /// such as `init` creating the slot.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the store is unbacked, or `Io`/`Json` on
    /// write failure.
    pub fn persist(&self) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| RollcallError::Storage("No file path set".to_string()))?;
        storage::save(path, &self.snapshot)
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Add a member with a freshly assigned id and return it.
    ///
    /// No dedup by name or email; two members may share either.
    pub fn add_member(&mut self, input: NewMember) -> Member {
        let id = id::generate_id(
            id::MEMBER_PREFIX,
            &input.name,
            Utc::now(),
            self.snapshot.members.len(),
            |candidate| self.snapshot.member(candidate).is_some(),
        );

        let member = Member {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
        };
        self.snapshot.members.push(member.clone());
        self.autosave();
        member
    }

    /// Merge `patch` into the member with the matching id.
    ///
    /// Returns `false` without touching anything if the id is unknown.
    pub fn update_member(&mut self, id: &str, patch: &MemberPatch) -> bool {
        let Some(member) = self.snapshot.members.iter_mut().find(|m| m.id == id) else {
            tracing::debug!("update_member: unknown id {id}");
            return false;
        };

        if let Some(ref name) = patch.name {
            member.name.clone_from(name);
        }
        if let Some(ref email) = patch.email {
            member.email.clone_from(email);
        }
        if let Some(ref phone) = patch.phone {
            member.phone.clone_from(phone);
        }

        self.autosave();
        true
    }

    /// Remove a member, cascading to every attendance record that
    /// references it. Returns `false` if the id is unknown.
    pub fn remove_member(&mut self, id: &str) -> bool {
        let before = self.snapshot.members.len();
        self.snapshot.members.retain(|m| m.id != id);
        if self.snapshot.members.len() == before {
            tracing::debug!("remove_member: unknown id {id}");
            return false;
        }

        self.snapshot.attendance.retain(|r| r.member_id != id);
        self.autosave();
        true
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Add a session with a freshly assigned id and return it.
    pub fn add_session(&mut self, input: NewSession) -> Session {
        let id = id::generate_id(
            id::SESSION_PREFIX,
            &input.title,
            Utc::now(),
            self.snapshot.sessions.len(),
            |candidate| self.snapshot.session(candidate).is_some(),
        );

        let session = Session {
            id,
            title: input.title,
            date: input.date,
            notes: input.notes,
        };
        self.snapshot.sessions.push(session.clone());
        self.autosave();
        session
    }

    /// Merge `patch` into the session with the matching id.
    ///
    /// Returns `false` without touching anything if the id is unknown.
    pub fn update_session(&mut self, id: &str, patch: &SessionPatch) -> bool {
        let Some(session) = self.snapshot.sessions.iter_mut().find(|s| s.id == id) else {
            tracing::debug!("update_session: unknown id {id}");
            return false;
        };

        if let Some(ref title) = patch.title {
            session.title.clone_from(title);
        }
        if let Some(date) = patch.date {
            session.date = date;
        }
        if let Some(ref notes) = patch.notes {
            session.notes.clone_from(notes);
        }

        self.autosave();
        true
    }

    /// Remove a session, cascading to every attendance record that
    /// references it. Returns `false` if the id is unknown.
    pub fn remove_session(&mut self, id: &str) -> bool {
        let before = self.snapshot.sessions.len();
        self.snapshot.sessions.retain(|s| s.id != id);
        if self.snapshot.sessions.len() == before {
            tracing::debug!("remove_session: unknown id {id}");
            return false;
        }

        self.snapshot.attendance.retain(|r| r.session_id != id);
        self.autosave();
        true
    }

    // ========================================================================
    // Attendance
    // ========================================================================

    /// Upsert the attendance mark for `(session_id, member_id)`.
    ///
    /// A linear scan on the composite key decides insert vs. update, so
    /// at most one record ever exists per pair.
    pub fn set_attendance(&mut self, session_id: &str, member_id: &str, present: bool) {
        if let Some(record) = self
            .snapshot
            .attendance
            .iter_mut()
            .find(|r| r.session_id == session_id && r.member_id == member_id)
        {
            record.present = present;
        } else {
            self.snapshot.attendance.push(AttendanceRecord {
                session_id: session_id.to_string(),
                member_id: member_id.to_string(),
                present,
            });
        }
        self.autosave();
    }

    /// Attendance lookup for one session: member id to present flag.
    ///
    /// Computed by scanning all attendance records; no index is kept.
    /// Members with no record are simply absent from the map, which
    /// readers treat the same as an explicit `false`.
    #[must_use]
    pub fn attendance_for(&self, session_id: &str) -> HashMap<String, bool> {
        self.snapshot
            .attendance
            .iter()
            .filter(|r| r.session_id == session_id)
            .map(|r| (r.member_id.clone(), r.present))
            .collect()
    }

    // ========================================================================
    // Wholesale replacement
    // ========================================================================

    /// Replace the snapshot with the empty store.
    pub fn clear_all(&mut self) {
        self.snapshot = Snapshot::default();
        self.autosave();
    }

    /// Validate an import payload and wholesale-replace the snapshot.
    ///
    /// All-or-nothing: on any failure the current snapshot is untouched.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the text is not JSON, or `InvalidFormat` if it
    /// fails the shape check or typed decode.
    pub fn import_json(&mut self, text: &str) -> Result<()> {
        self.replace_with(export::parse_import(text)?);
        Ok(())
    }

    /// Like [`Store::import_json`] for an already-parsed candidate value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the candidate fails validation.
    pub fn import_value(&mut self, value: serde_json::Value) -> Result<()> {
        self.replace_with(export::import_from_value(value)?);
        Ok(())
    }

    fn replace_with(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.autosave();
    }

    // ========================================================================
    // Lookups & ID resolution
    // ========================================================================

    /// Check if a member id exists.
    #[must_use]
    pub fn member_exists(&self, id: &str) -> bool {
        self.snapshot.member(id).is_some()
    }

    /// Check if a session id exists.
    #[must_use]
    pub fn session_exists(&self, id: &str) -> bool {
        self.snapshot.session(id).is_some()
    }

    /// Resolve an exact or unique-prefix member id.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` or `AmbiguousId`.
    pub fn resolve_member_id(&self, input: &str) -> Result<String> {
        if self.member_exists(input) {
            return Ok(input.to_string());
        }

        let matches = prefix_matches(input, self.snapshot.members.iter().map(|m| m.id.as_str()));
        match matches.len() {
            0 => Err(RollcallError::MemberNotFound {
                id: input.to_string(),
            }),
            1 => Ok(matches.into_iter().next().unwrap_or_default()),
            _ => Err(RollcallError::AmbiguousId {
                partial: input.to_string(),
                matches,
            }),
        }
    }

    /// Resolve an exact or unique-prefix session id.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` or `AmbiguousId`.
    pub fn resolve_session_id(&self, input: &str) -> Result<String> {
        if self.session_exists(input) {
            return Ok(input.to_string());
        }

        let matches = prefix_matches(input, self.snapshot.sessions.iter().map(|s| s.id.as_str()));
        match matches.len() {
            0 => Err(RollcallError::SessionNotFound {
                id: input.to_string(),
            }),
            1 => Ok(matches.into_iter().next().unwrap_or_default()),
            _ => Err(RollcallError::AmbiguousId {
                partial: input.to_string(),
                matches,
            }),
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn autosave(&self) {
        let Some(ref path) = self.path else { return };
        if let Err(e) = storage::save(path, &self.snapshot) {
            // Swallowed: the in-memory snapshot stays authoritative.
            tracing::warn!("Failed to persist store to {}: {e}", path.display());
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn prefix_matches<'a>(input: &str, ids: impl Iterator<Item = &'a str>) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    ids.filter(|id| id.starts_with(input))
        .map(String::from)
        .collect()
}
