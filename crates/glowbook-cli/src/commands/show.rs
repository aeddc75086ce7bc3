// Rust guideline compliant 2026-10-12

//! Implementation of the `glow show` command.

use crate::commands::{ActorArgs, Workspace};
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Shows one of the caller's bookings.
///
/// # Errors
///
/// Returns an error if the booking is unknown or the caller is not a party
/// to it.
pub fn execute(
    root: Option<&Path>,
    actor: &ActorArgs,
    id: &str,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let booking = workspace.booking_service().get(&actor.actor()?, id)?;
    println!("{}", formatter.format_booking(&booking));
    Ok(())
}
