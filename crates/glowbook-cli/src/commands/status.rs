// Rust guideline compliant 2026-10-12

//! Implementation of the `glow confirm`, `complete`, `no-show`, and `cancel`
//! commands.

use crate::commands::{ActorArgs, Workspace};
use crate::OutputFormatter;
use anyhow::Result;
use chrono::NaiveDateTime;
use glowbook_core::BookingStatus;
use std::path::Path;

/// Moves a booking to `target`.
///
/// A cancellation reason is only recorded when `target` is cancelled.
///
/// # Errors
///
/// Returns an error if the caller may not request the change or the
/// booking's current status does not allow it.
pub fn execute(
    root: Option<&Path>,
    actor: &ActorArgs,
    id: &str,
    target: BookingStatus,
    reason: Option<String>,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let booking = workspace
        .booking_service()
        .change_status(&actor.actor()?, id, target, reason, now)?;
    println!("{}", formatter.format_booking(&booking));
    Ok(())
}
