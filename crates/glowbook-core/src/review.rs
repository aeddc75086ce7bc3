// Rust guideline compliant 2026-10-12

//! Review eligibility.
//!
//! A booking can be rated once it is completed, or once its scheduled time
//! has passed without it being cancelled.

use crate::{Booking, BookingStatus};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether a client may rate a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingState {
    /// Not eligible yet (or never, if cancelled).
    NotYetRatable,
    /// Eligible and no review exists.
    CanRate,
    /// Eligible and a review already exists.
    AlreadyRated,
}

/// Returns true if the booking may be rated at `now`.
///
/// `status = completed` OR (`scheduled_at < now` AND `status ≠ cancelled`).
pub fn is_rating_eligible(booking: &Booking, now: NaiveDateTime) -> bool {
    match booking.status {
        BookingStatus::Completed => true,
        BookingStatus::Cancelled => false,
        _ => booking.scheduled_at() < now,
    }
}

/// Derives the rating state of a booking.
///
/// # Arguments
///
/// * `booking` - Booking to evaluate
/// * `now` - Current local time
/// * `has_review` - Whether the store already holds a review for the booking
pub fn rating_state(booking: &Booking, now: NaiveDateTime, has_review: bool) -> RatingState {
    if !is_rating_eligible(booking, now) {
        RatingState::NotYetRatable
    } else if has_review {
        RatingState::AlreadyRated
    } else {
        RatingState::CanRate
    }
}
