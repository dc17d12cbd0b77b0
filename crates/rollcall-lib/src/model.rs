//! Core data types for rollcall-lib.
//!
//! The wire format is plain serde/JSON; attendance records use camelCase
//! keys (`sessionId`, `memberId`) and omit optional fields when absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked organization member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    /// Unique ID (e.g., "mem-a1b2c3"). Immutable once assigned.
    pub id: String,

    /// Display name. Required non-empty at creation, enforced by the
    /// caller rather than the store.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A meeting session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Unique ID (e.g., "ses-a1b2c3"). Immutable once assigned.
    pub id: String,

    pub title: String,

    /// Calendar date, ISO 8601 (`YYYY-MM-DD`) on the wire.
    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Per-session attendance mark for one member.
///
/// At most one record exists per `(session_id, member_id)` pair. A missing
/// record means "not marked", which readers treat as absent — that is
/// distinct from an explicit `present: false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub session_id: String,
    pub member_id: String,
    pub present: bool,
}

/// The entire persisted state: a single aggregate root.
///
/// Collections keep insertion order; CSV reports and listings are emitted
/// in member-list order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub sessions: Vec<Session>,

    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl Snapshot {
    /// Look up a member by exact ID.
    #[must_use]
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Look up a session by exact ID.
    #[must_use]
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// True when no entity of any kind is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty() && self.sessions.is_empty() && self.attendance.is_empty()
    }
}

/// Input for creating a member; the store assigns the ID.
#[derive(Debug, Clone, Default)]
pub struct NewMember {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Input for creating a session; the store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub title: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
}
