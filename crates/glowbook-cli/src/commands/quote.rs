// Rust guideline compliant 2026-10-12

//! Implementation of the `glow quote` command.

use crate::commands::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;

/// Prints the price breakdown for a service.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or the service is
/// unknown.
pub fn execute(
    root: Option<&Path>,
    service_id: &str,
    is_emergency: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let quote = workspace.booking_service().quote(service_id, is_emergency)?;
    println!("{}", formatter.format_quote(&quote));
    Ok(())
}
