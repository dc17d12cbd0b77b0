//! Text formatting functions for `rollcall`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Mark icons (✓ ✗ ○)
//! - Member and session line formatting
//! - Roll lines for the attendance view

use rollcall_lib::{Member, Session};

/// Mark icon characters.
pub mod icons {
    /// Marked present (checkmark).
    pub const PRESENT: &str = "✓";
    /// Marked absent (X mark).
    pub const ABSENT: &str = "✗";
    /// Not marked (hollow circle).
    pub const UNMARKED: &str = "○";
}

/// Return the icon character for an attendance mark.
///
/// `None` means the member was never marked for the session.
#[must_use]
pub const fn format_mark_icon(mark: Option<bool>) -> &'static str {
    match mark {
        Some(true) => icons::PRESENT,
        Some(false) => icons::ABSENT,
        None => icons::UNMARKED,
    }
}

/// Format a single-line member summary.
///
/// Format: `{id}  {name} <email> phone`
#[must_use]
pub fn format_member_line(member: &Member) -> String {
    let mut line = format!("{}  {}", member.id, member.name);
    if let Some(ref email) = member.email {
        line.push_str(&format!(" <{email}>"));
    }
    if let Some(ref phone) = member.phone {
        line.push_str(&format!(" {phone}"));
    }
    line
}

/// Format a single-line session summary.
///
/// Format: `{id}  {date}  {title} (notes)`
#[must_use]
pub fn format_session_line(session: &Session) -> String {
    let mut line = format!("{}  {}  {}", session.id, session.date, session.title);
    if let Some(ref notes) = session.notes {
        line.push_str(&format!(" ({notes})"));
    }
    line
}

/// Format one line of the roll for a session.
///
/// Format: `{icon} {id}  {name}`
#[must_use]
pub fn format_roll_line(member: &Member, mark: Option<bool>) -> String {
    format!(
        "{} {}  {}",
        format_mark_icon(mark),
        member.id,
        member.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_member() -> Member {
        Member {
            id: "mem-test1".to_string(),
            name: "Ann".to_string(),
            email: None,
            phone: None,
        }
    }

    #[test]
    fn test_mark_icons() {
        assert_eq!(format_mark_icon(Some(true)), "✓");
        assert_eq!(format_mark_icon(Some(false)), "✗");
        assert_eq!(format_mark_icon(None), "○");
    }

    #[test]
    fn test_format_member_line_bare() {
        let line = format_member_line(&make_test_member());
        assert_eq!(line, "mem-test1  Ann");
    }

    #[test]
    fn test_format_member_line_with_contacts() {
        let mut member = make_test_member();
        member.email = Some("ann@example.com".to_string());
        member.phone = Some("555-0100".to_string());
        let line = format_member_line(&member);
        assert_eq!(line, "mem-test1  Ann <ann@example.com> 555-0100");
    }

    #[test]
    fn test_format_session_line() {
        let session = Session {
            id: "ses-test1".to_string(),
            title: "Week 1".to_string(),
            date: "2025-01-01".parse().unwrap(),
            notes: None,
        };
        assert_eq!(format_session_line(&session), "ses-test1  2025-01-01  Week 1");
    }

    #[test]
    fn test_format_session_line_with_notes() {
        let session = Session {
            id: "ses-test1".to_string(),
            title: "Week 1".to_string(),
            date: "2025-01-01".parse().unwrap(),
            notes: Some("kickoff".to_string()),
        };
        let line = format_session_line(&session);
        assert!(line.ends_with("(kickoff)"));
    }

    #[test]
    fn test_format_roll_line_present() {
        let line = format_roll_line(&make_test_member(), Some(true));
        assert_eq!(line, "✓ mem-test1  Ann");
    }

    #[test]
    fn test_format_roll_line_unmarked() {
        let line = format_roll_line(&make_test_member(), None);
        assert!(line.starts_with("○"));
    }
}
