//! Member subcommands: add, update, rm, list.

use anyhow::{bail, Result};
use rollcall_lib::{MemberPatch, NewMember, Store};

use super::Context;
use crate::cli::{IdArg, MemberAddArgs, MemberCommand, MemberSubcommand, MemberUpdateArgs};
use crate::format::format_member_line;
use crate::validation;

/// Execute a member subcommand.
///
/// # Errors
///
/// Returns an error on validation failure or unresolvable ids.
pub fn execute(cmd: MemberCommand, ctx: &Context) -> Result<()> {
    match cmd.command {
        MemberSubcommand::Add(args) => add(args, ctx),
        MemberSubcommand::Update(args) => update(args, ctx),
        MemberSubcommand::Rm(args) => rm(&args, ctx),
        MemberSubcommand::List => list(ctx),
    }
}

fn add(args: MemberAddArgs, ctx: &Context) -> Result<()> {
    validation::require_non_empty("name", &args.name)?;

    let mut store = Store::open(&ctx.store_path);
    let member = store.add_member(NewMember {
        name: args.name,
        email: args.email,
        phone: args.phone,
    });

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&member)?);
    } else {
        println!("Added {}: {}", member.id, member.name);
    }
    Ok(())
}

fn update(args: MemberUpdateArgs, ctx: &Context) -> Result<()> {
    if let Some(ref name) = args.name {
        validation::require_non_empty("name", name)?;
    }

    let patch = MemberPatch {
        name: args.name,
        email: args.email.map(validation::clearable),
        phone: args.phone.map(validation::clearable),
    };
    if patch.is_empty() {
        bail!("nothing to update; pass at least one of --name/--email/--phone");
    }

    let mut store = Store::open(&ctx.store_path);
    let id = store.resolve_member_id(&args.id)?;
    store.update_member(&id, &patch);
    println!("Updated {id}");
    Ok(())
}

fn rm(args: &IdArg, ctx: &Context) -> Result<()> {
    let mut store = Store::open(&ctx.store_path);
    let id = store.resolve_member_id(&args.id)?;
    store.remove_member(&id);
    println!("Removed {id} (attendance records cascaded)");
    Ok(())
}

fn list(ctx: &Context) -> Result<()> {
    let store = Store::open(&ctx.store_path);
    let members = &store.snapshot().members;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(members)?);
    } else if members.is_empty() {
        println!("No members.");
    } else {
        for member in members {
            println!("{}", format_member_line(member));
        }
        println!("\n{} member(s)", members.len());
    }
    Ok(())
}
