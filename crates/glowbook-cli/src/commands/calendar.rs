// Rust guideline compliant 2026-10-12

//! Implementation of the `glow calendar` command.
//!
//! Shows a provider's week or month around a reference date, optionally
//! shifted by whole weeks or months.

use crate::commands::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use glowbook_app::{parse_date, Actor};
use glowbook_core::calendar::{shift_months, shift_weeks};
use std::path::Path;

/// Which calendar view to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarScope {
    /// Sunday-first week.
    Week,
    /// Six-week month grid.
    Month,
}

/// Resolves the date a view is built around.
///
/// # Errors
///
/// Returns an error if `date` is not `YYYY-MM-DD`.
pub fn reference_date(
    scope: CalendarScope,
    date: Option<&str>,
    offset: i32,
    now: NaiveDateTime,
) -> glowbook_app::Result<NaiveDate> {
    let base = match date {
        Some(date) => parse_date(date)?,
        None => now.date(),
    };
    Ok(match scope {
        CalendarScope::Week => shift_weeks(base, offset),
        CalendarScope::Month => shift_months(base, offset),
    })
}

/// Renders a provider's calendar.
///
/// # Errors
///
/// Returns an error if the date is invalid or the store cannot be read.
pub fn execute(
    root: Option<&Path>,
    provider: &str,
    scope: CalendarScope,
    date: Option<&str>,
    offset: i32,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let reference = reference_date(scope, date, offset, now)?;
    let actor = Actor::provider(provider);
    let calendar = workspace.calendar_service();
    let output = match scope {
        CalendarScope::Week => formatter.format_week(&calendar.week(&actor, reference)?),
        CalendarScope::Month => formatter.format_month(&calendar.month(&actor, reference)?),
    };
    println!("{}", output);
    Ok(())
}
