//! Patch types for member and session updates.

use chrono::NaiveDate;

/// Fields to merge into an existing member.
///
/// The outer `Option` decides whether a field changes at all; for the
/// clearable fields the inner `Option` carries the new value, with `None`
/// clearing it.
#[derive(Debug, Clone, Default)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<Option<String>>,
    pub phone: Option<Option<String>>,
}

impl MemberPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// Fields to merge into an existing session.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<Option<String>>,
}

impl SessionPatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.notes.is_none()
    }
}
