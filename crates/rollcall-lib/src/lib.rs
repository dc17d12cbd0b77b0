//! `rollcall-lib` — In-process attendance ledger library.
//!
//! Tracks organization members, meeting sessions, and per-session
//! attendance in a single snapshot persisted to one JSON file on the
//! local machine. Single writer, fully synchronous; no server, no sync.
//!
//! # Quick Start
//!
//! ```no_run
//! use rollcall_lib::{NewMember, NewSession, Store};
//!
//! // Load the durable slot (missing or corrupt data yields an empty store)
//! let mut store = Store::open(".rollcall/store.json");
//!
//! // Create (ids are assigned by the store; mutations persist automatically)
//! let ann = store.add_member(NewMember { name: "Ann".into(), ..Default::default() });
//! let week1 = store.add_session(NewSession {
//!     title: "Week 1".into(),
//!     date: "2025-01-01".parse().unwrap(),
//!     notes: None,
//! });
//!
//! // Mark attendance
//! store.set_attendance(&week1.id, &ann.id, true);
//!
//! // Query
//! let roll = store.attendance_for(&week1.id);
//! assert_eq!(roll.get(ann.id.as_str()), Some(&true));
//! ```

pub mod error;
pub mod export;
pub mod id;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;

pub use error::{Result, RollcallError};
pub use model::{AttendanceRecord, Member, NewMember, NewSession, Session, Snapshot};
pub use query::{MemberPatch, SessionPatch};
pub use store::Store;
