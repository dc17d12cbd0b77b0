//! Session subcommands: add, update, rm, list.

use anyhow::{bail, Result};
use rollcall_lib::{NewSession, SessionPatch, Store};

use super::Context;
use crate::cli::{IdArg, SessionAddArgs, SessionCommand, SessionSubcommand, SessionUpdateArgs};
use crate::format::format_session_line;
use crate::validation;

/// Execute a session subcommand.
///
/// # Errors
///
/// Returns an error on validation failure or unresolvable ids.
pub fn execute(cmd: SessionCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        SessionSubcommand::Add(args) => add(args, ctx),
        SessionSubcommand::Update(args) => update(args, ctx),
        SessionSubcommand::Rm(args) => rm(&args, ctx),
        SessionSubcommand::List => list(ctx),
    }
}

fn add(args: SessionAddArgs, ctx: &Context) -> Result<()> {
    validation::require_non_empty("title", &args.title)?;
    let date = validation::parse_date(&args.date)?;

    let mut store = Store::open(&ctx.store_path);
    let session = store.add_session(NewSession {
        title: args.title,
        date,
        notes: args.notes,
    });

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        println!("Added {}: {} ({})", session.id, session.title, session.date);
    }
    Ok(())
}

fn update(args: SessionUpdateArgs, ctx: &Context) -> Result<()> {
    if let Some(ref title) = args.title {
        validation::require_non_empty("title", title)?;
    }
    let date = match args.date {
        Some(ref raw) => Some(validation::parse_date(raw)?),
        None => None,
    };

    let patch = SessionPatch {
        title: args.title,
        date,
        notes: args.notes.map(validation::clearable),
    };
    if patch.is_empty() {
        bail!("nothing to update; pass at least one of --title/--date/--notes");
    }

    let mut store = Store::open(&ctx.store_path);
    let id = store.resolve_session_id(&args.id)?;
    store.update_session(&id, &patch);
    println!("Updated {id}");
    Ok(())
}

fn rm(args: &IdArg, ctx: &Context) -> Result<()> {
    let mut store = Store::open(&ctx.store_path);
    let id = store.resolve_session_id(&args.id)?;
    store.remove_session(&id);
    println!("Removed {id} (attendance records cascaded)");
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let store = Store::open(&ctx.store_path);
    let sessions = &store.snapshot().sessions;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(sessions)?);
    } else if sessions.is_empty() {
        println!("No sessions.");
    } else {
        for session in sessions {
            println!("{}", format_session_line(session));
        }
        println!("\n{} session(s)", sessions.len());
    }
    Ok(())
}
