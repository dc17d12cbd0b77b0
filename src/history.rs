//! Safety backups of the store file.
//!
//! This module handles:
//! - Copying the current store to a timestamped backup before a
//!   wholesale replacement (import, clear)
//! - Rotating backups based on count
//! - Listing backups, newest first
//!
//! Identical-content backups are skipped.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::config;

/// Configuration for history backups.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub max_count: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_count: 20,
        }
    }
}

/// Backup entry metadata.
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub size: u64,
}

/// Back up the store file before a wholesale replacement.
///
/// Returns the backup path, or `None` when nothing was written (backups
/// disabled, no store file yet, or content identical to the latest
/// backup).
///
/// # Errors
///
/// Returns an error if the backup cannot be created.
pub fn backup_before_replace(
    store_path: &Path,
    history_config: &HistoryConfig,
) -> Result<Option<PathBuf>> {
    if !history_config.enabled || !store_path.exists() {
        return Ok(None);
    }

    let history_dir = config::history_dir(store_path);
    fs::create_dir_all(&history_dir)
        .with_context(|| format!("cannot create {}", history_dir.display()))?;

    if let Some(latest) = list_backups(&history_dir)?.into_iter().next() {
        if files_are_identical(store_path, &latest.path)? {
            tracing::debug!(
                "Skipping backup: identical to latest {}",
                latest.path.display()
            );
            return Ok(None);
        }
    }

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let backup_path = history_dir.join(format!("store.{timestamp}.json"));

    fs::copy(store_path, &backup_path)
        .with_context(|| format!("cannot write {}", backup_path.display()))?;
    tracing::debug!("Created backup: {}", backup_path.display());

    rotate_history(&history_dir, history_config)?;

    Ok(Some(backup_path))
}

/// List backups in the history directory, newest first.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_backups(history_dir: &Path) -> Result<Vec<BackupEntry>> {
    if !history_dir.exists() {
        return Ok(Vec::new());
    }

    let mut backups = Vec::new();
    for entry in fs::read_dir(history_dir)? {
        let entry = entry?;
        let path = entry.path();
        let Some(timestamp) = parse_backup_timestamp(&path) else {
            continue;
        };
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        backups.push(BackupEntry {
            path,
            timestamp,
            size,
        });
    }

    backups.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(backups)
}

/// Extract the timestamp from a `store.<timestamp>.json` file name.
fn parse_backup_timestamp(path: &Path) -> Option<DateTime<Utc>> {
    let name = path.file_name()?.to_str()?;
    let stamp = name.strip_prefix("store.")?.strip_suffix(".json")?;
    let naive = NaiveDateTime::parse_from_str(stamp, "%Y%m%d_%H%M%S").ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Delete backups beyond the configured count, oldest first.
fn rotate_history(history_dir: &Path, history_config: &HistoryConfig) -> Result<()> {
    let backups = list_backups(history_dir)?;

    let mut deleted_count = 0;
    for entry in backups.iter().skip(history_config.max_count) {
        fs::remove_file(&entry.path)
            .with_context(|| format!("cannot remove {}", entry.path.display()))?;
        deleted_count += 1;
    }

    if deleted_count > 0 {
        tracing::debug!("Pruned {deleted_count} old backup(s)");
    }

    Ok(())
}

fn files_are_identical(a: &Path, b: &Path) -> Result<bool> {
    let meta_a = fs::metadata(a)?;
    let meta_b = fs::metadata(b)?;
    if meta_a.len() != meta_b.len() {
        return Ok(false);
    }

    let mut reader_a = BufReader::new(File::open(a)?);
    let mut reader_b = BufReader::new(File::open(b)?);
    let mut buf_a = Vec::new();
    let mut buf_b = Vec::new();
    reader_a.read_to_end(&mut buf_a)?;
    reader_b.read_to_end(&mut buf_b)?;

    Ok(buf_a == buf_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path, contents: &str) -> PathBuf {
        let data_dir = dir.join(".rollcall");
        fs::create_dir_all(&data_dir).unwrap();
        let path = data_dir.join("store.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_backup_copies_store_file() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = store_in(dir.path(), r#"{"members":[]}"#);

        let backup = backup_before_replace(&store_path, &HistoryConfig::default())
            .unwrap()
            .expect("backup written");
        assert_eq!(
            fs::read_to_string(backup).unwrap(),
            r#"{"members":[]}"#
        );
    }

    #[test]
    fn test_identical_content_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = store_in(dir.path(), "{}");

        let first = backup_before_replace(&store_path, &HistoryConfig::default()).unwrap();
        assert!(first.is_some());
        let second = backup_before_replace(&store_path, &HistoryConfig::default()).unwrap();
        assert!(second.is_none());
    }

    #[test]
    fn test_missing_store_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = dir.path().join(".rollcall").join("store.json");

        let backup = backup_before_replace(&store_path, &HistoryConfig::default()).unwrap();
        assert!(backup.is_none());
    }

    #[test]
    fn test_disabled_config_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = store_in(dir.path(), "{}");

        let disabled = HistoryConfig {
            enabled: false,
            ..Default::default()
        };
        let backup = backup_before_replace(&store_path, &disabled).unwrap();
        assert!(backup.is_none());
    }

    #[test]
    fn test_list_backups_ignores_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store_path = store_in(dir.path(), "{}");
        backup_before_replace(&store_path, &HistoryConfig::default()).unwrap();

        let history_dir = config::history_dir(&store_path);
        fs::write(history_dir.join("notes.txt"), "not a backup").unwrap();

        let backups = list_backups(&history_dir).unwrap();
        assert_eq!(backups.len(), 1);
        assert!(backups[0].size > 0);
    }
}
