// Rust guideline compliant 2026-10-12

//! Implementation of the `glow list` command.
//!
//! Lists the caller's bookings, sorted by date and time, with optional
//! status, date range, and urgency filters.

use crate::commands::{ActorArgs, Workspace};
use crate::OutputFormatter;
use anyhow::Result;
use glowbook_app::ListOptions;
use std::path::Path;

/// Lists bookings visible to the caller.
///
/// # Errors
///
/// Returns an error if the filters are invalid or the store cannot be read.
pub fn execute(
    root: Option<&Path>,
    actor: &ActorArgs,
    options: &ListOptions,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let filter = options.to_filter()?;
    let bookings = workspace.booking_service().list(&actor.actor()?, &filter)?;
    println!("{}", formatter.format_bookings(&bookings));
    Ok(())
}
