// Rust guideline compliant 2026-10-12

//! Implementation of the `glow slots` command.

use crate::commands::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::path::Path;

/// Lists the emergency slots offered at `now`.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened.
pub fn execute(root: Option<&Path>, now: NaiveDateTime, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let slots = workspace.booking_service().available_slots(now);
    println!("{}", formatter.format_slots(&slots));
    Ok(())
}
