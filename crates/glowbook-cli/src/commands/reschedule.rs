// Rust guideline compliant 2026-10-12

//! Implementation of the `glow reschedule` command.

use crate::commands::{ActorArgs, Workspace};
use crate::OutputFormatter;
use anyhow::Result;
use chrono::NaiveDateTime;
use glowbook_app::{parse_date, parse_time};
use std::path::Path;

/// Moves a pending booking to a new date and time.
///
/// # Errors
///
/// Returns an error if the new time is invalid or not allowed, or the
/// booking is no longer pending.
pub fn execute(
    root: Option<&Path>,
    actor: &ActorArgs,
    id: &str,
    date: &str,
    time: &str,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let booking = workspace.booking_service().reschedule(
        &actor.actor()?,
        id,
        parse_date(date)?,
        parse_time(time)?,
        now,
    )?;
    println!("{}", formatter.format_booking(&booking));
    Ok(())
}
