//! Store location resolution.
//!
//! The durable slot is a single JSON file. Resolution order: `--store`
//! flag (also fed by `ROLLCALL_STORE` via clap), then
//! `.rollcall/store.json` under the current directory.

use std::path::{Path, PathBuf};

/// Directory holding the durable slot and its history backups.
pub const DATA_DIR: &str = ".rollcall";

/// File name of the durable slot inside [`DATA_DIR`].
pub const STORE_FILE: &str = "store.json";

/// Environment variable overriding the store path.
pub const STORE_ENV: &str = "ROLLCALL_STORE";

/// Resolve the store path from the global flag, falling back to the
/// fixed default location.
#[must_use]
pub fn resolve_store_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(DATA_DIR).join(STORE_FILE))
}

/// History directory next to the given store file.
#[must_use]
pub fn history_dir(store_path: &Path) -> PathBuf {
    store_path
        .parent()
        .map_or_else(|| PathBuf::from("history"), |p| p.join("history"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let path = resolve_store_path(Some(PathBuf::from("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_default_location() {
        let path = resolve_store_path(None);
        assert_eq!(path, PathBuf::from(".rollcall/store.json"));
    }

    #[test]
    fn test_history_dir_sits_next_to_store() {
        let dir = history_dir(Path::new(".rollcall/store.json"));
        assert_eq!(dir, PathBuf::from(".rollcall/history"));
    }
}
