// Rust guideline compliant 2026-10-12

//! Implementation of the `glow book` command.
//!
//! Creates a pending booking for a client. Urgent bookings must pick one of
//! the slots listed by `glow slots` and give a reason.

use crate::commands::Workspace;
use crate::OutputFormatter;
use anyhow::Result;
use chrono::NaiveDateTime;
use glowbook_app::{parse_date, parse_time, Actor, BookingRequest};
use std::path::Path;

/// Parameters of a new booking as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct BookArgs {
    /// Client making the booking.
    pub user: String,
    /// Provider to book.
    pub provider: String,
    /// Service to book.
    pub service: String,
    /// Date, `YYYY-MM-DD`.
    pub date: String,
    /// Start time, `HH:MM`.
    pub time: String,
    /// Request an urgent slot.
    pub emergency: bool,
    /// Why the slot is urgent.
    pub reason: Option<String>,
    /// Notes for the provider.
    pub notes: Option<String>,
}

/// Creates a booking.
///
/// # Errors
///
/// Returns an error if the date or time cannot be parsed, or the booking is
/// rejected.
pub fn execute(
    root: Option<&Path>,
    args: BookArgs,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let request = BookingRequest {
        provider_id: args.provider,
        service_id: args.service,
        date: parse_date(&args.date)?,
        time: parse_time(&args.time)?,
        is_emergency: args.emergency,
        emergency_reason: args.reason,
        client_notes: args.notes,
    };
    let booking = workspace
        .booking_service()
        .create_booking(&Actor::client(args.user), request, now)?;
    println!("{}", formatter.format_booking(&booking));
    Ok(())
}
