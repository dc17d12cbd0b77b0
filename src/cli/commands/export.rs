//! Export subcommands: csv, json.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use rollcall_lib::{export, Store};

use super::Context;
use crate::cli::{ExportCommand, ExportCsvArgs, ExportJsonArgs, ExportSubcommand};

/// Execute an export subcommand.
///
/// # Errors
///
/// Returns an error if the session id cannot be resolved or the output
/// file cannot be written.
pub fn execute(cmd: ExportCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        ExportSubcommand::Csv(args) => csv(&args, ctx),
        ExportSubcommand::Json(args) => json(&args, ctx),
    }
}

fn csv(args: &ExportCsvArgs, ctx: &Context) -> Result<()> {
    let store = Store::open(&ctx.store_path);
    let session_id = store.resolve_session_id(&args.session)?;
    let report = export::session_csv(store.snapshot(), &session_id)?;

    let default_name = store
        .snapshot()
        .session(&session_id)
        .map(export::csv_file_name)
        .unwrap_or_else(|| "attendance.csv".to_string());

    write_output(args.out.as_deref(), &default_name, &report)
}

fn json(args: &ExportJsonArgs, ctx: &Context) -> Result<()> {
    let store = Store::open(&ctx.store_path);
    let backup = export::json_backup(store.snapshot())?;

    write_output(args.out.as_deref(), export::BACKUP_FILE_NAME, &backup)
}

/// Write to the requested file, the default file name, or stdout ("-").
fn write_output(out: Option<&Path>, default_name: &str, contents: &str) -> Result<()> {
    let path = match out {
        Some(path) if path.as_os_str() == "-" => {
            print!("{contents}");
            return Ok(());
        }
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_name),
    };

    fs::write(&path, contents).with_context(|| format!("cannot write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
