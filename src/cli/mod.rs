//! Command-line interface for `rollcall`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::{config, logging};

/// `rollcall` (rcl) - local attendance ledger.
#[derive(Parser, Debug)]
#[command(name = "rcl")]
#[command(
    author,
    version,
    about = "Local attendance ledger (members, sessions, roll call)",
    long_about = None,
    after_help = "All data lives in one JSON file on this machine. No server, no sync."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the store file (default: .rollcall/store.json)
    #[arg(long, global = true, env = "ROLLCALL_STORE")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the store file if it does not exist
    Init,

    /// Manage members
    Member(MemberCommand),

    /// Manage sessions
    Session(SessionCommand),

    /// Mark attendance for a member at a session
    Mark(MarkArgs),

    /// Show the roll for a session
    Attendance(AttendanceArgs),

    /// Export data (per-session CSV report or full JSON backup)
    Export(ExportCommand),

    /// Import a JSON backup, replacing the current store
    Import(ImportArgs),

    /// Delete all members, sessions, and attendance records
    Clear(ClearArgs),

    /// Summary counts
    Stats,

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct MemberCommand {
    /// Member subcommand
    #[command(subcommand)]
    pub command: MemberSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MemberSubcommand {
    /// Add a member
    Add(MemberAddArgs),

    /// Update a member's fields
    Update(MemberUpdateArgs),

    /// Remove a member (cascades to attendance records)
    #[command(alias = "remove")]
    Rm(IdArg),

    /// List members
    List,
}

#[derive(Args, Debug)]
pub struct MemberAddArgs {
    /// Display name
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Args, Debug)]
pub struct MemberUpdateArgs {
    /// Member id (a unique prefix is accepted)
    pub id: String,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address (pass an empty string to clear)
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number (pass an empty string to clear)
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Args, Debug)]
pub struct SessionCommand {
    /// Session subcommand
    #[command(subcommand)]
    pub command: SessionSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionSubcommand {
    /// Add a session
    Add(SessionAddArgs),

    /// Update a session's fields
    Update(SessionUpdateArgs),

    /// Remove a session (cascades to attendance records)
    #[command(alias = "remove")]
    Rm(IdArg),

    /// List sessions
    List,
}

#[derive(Args, Debug)]
pub struct SessionAddArgs {
    /// Session title
    pub title: String,

    /// Calendar date, ISO 8601 (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct SessionUpdateArgs {
    /// Session id (a unique prefix is accepted)
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New date, ISO 8601 (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New notes (pass an empty string to clear)
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct IdArg {
    /// Entity id (a unique prefix is accepted)
    pub id: String,
}

#[derive(Args, Debug)]
pub struct MarkArgs {
    /// Session id (a unique prefix is accepted)
    pub session: String,

    /// Member id (a unique prefix is accepted)
    pub member: String,

    /// Mark present (the default)
    #[arg(long, conflicts_with = "absent")]
    pub present: bool,

    /// Mark absent (an explicit "No", distinct from unmarked)
    #[arg(long)]
    pub absent: bool,
}

#[derive(Args, Debug)]
pub struct AttendanceArgs {
    /// Session id (a unique prefix is accepted)
    pub session: String,
}

#[derive(Args, Debug)]
pub struct ExportCommand {
    /// Export subcommand
    #[command(subcommand)]
    pub command: ExportSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ExportSubcommand {
    /// Per-session attendance report as CSV
    Csv(ExportCsvArgs),

    /// Full snapshot as pretty-printed JSON
    Json(ExportJsonArgs),
}

#[derive(Args, Debug)]
pub struct ExportCsvArgs {
    /// Session id (a unique prefix is accepted)
    pub session: String,

    /// Output file (default: <date>-<title>-attendance.csv; "-" for stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExportJsonArgs {
    /// Output file (default: attendance-backup.json; "-" for stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON backup file to import
    pub file: PathBuf,

    /// Skip the safety backup of the current store
    #[arg(long)]
    pub no_backup: bool,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Confirm deletion
    #[arg(long)]
    pub yes: bool,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let ctx = commands::Context {
        store_path: config::resolve_store_path(cli.store),
        json: cli.json,
    };

    match cli.command {
        Some(Commands::Init) => commands::init::execute(&ctx),
        Some(Commands::Member(cmd)) => commands::member::execute(cmd, &ctx),
        Some(Commands::Session(cmd)) => commands::session::execute(cmd, &ctx),
        Some(Commands::Mark(args)) => commands::mark::execute(&args, &ctx),
        Some(Commands::Attendance(args)) => commands::attendance::execute(&args, &ctx),
        Some(Commands::Export(cmd)) => commands::export::execute(cmd, &ctx),
        Some(Commands::Import(args)) => commands::import::execute(&args, &ctx),
        Some(Commands::Clear(args)) => commands::clear::execute(&args, &ctx),
        Some(Commands::Stats) => commands::stats::execute(&ctx),
        Some(Commands::Version) => {
            println!("rcl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("rcl - local attendance ledger. Use --help for usage.");
            Ok(())
        }
    }
}
