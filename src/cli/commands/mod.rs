//! Command implementations.

pub mod attendance;
pub mod clear;
pub mod export;
pub mod import;
pub mod init;
pub mod mark;
pub mod member;
pub mod session;
pub mod stats;

use std::path::PathBuf;

/// Shared execution context resolved from the global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Durable slot location.
    pub store_path: PathBuf,
    /// Machine-readable JSON output.
    pub json: bool,
}
