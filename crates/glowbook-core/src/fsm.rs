// Rust guideline compliant 2026-10-12

//! Finite State Machine module for booking status transitions.
//!
//! The FSM enforces the following transitions and nothing else:
//!
//! - Pending → Confirmed (provider accepts)
//! - Pending → Cancelled (client or provider cancels)
//! - Pending → NoShow (provider marks absent)
//! - Confirmed → Completed (provider marks finished)
//! - Confirmed → Cancelled (client or provider cancels)
//! - Confirmed → NoShow (provider marks absent)
//!
//! Completed, Cancelled and NoShow are terminal. The FSM does not decide
//! who may request a transition; that is caller policy.

use crate::models::normalize_text;
use crate::{Booking, BookingStatus, Error, Result};
use chrono::NaiveDateTime;

/// The canonical transition table, as `(from, to)` pairs.
pub const TRANSITIONS: [(BookingStatus, BookingStatus); 6] = [
    (BookingStatus::Pending, BookingStatus::Confirmed),
    (BookingStatus::Pending, BookingStatus::Cancelled),
    (BookingStatus::Pending, BookingStatus::NoShow),
    (BookingStatus::Confirmed, BookingStatus::Completed),
    (BookingStatus::Confirmed, BookingStatus::Cancelled),
    (BookingStatus::Confirmed, BookingStatus::NoShow),
];

impl BookingStatus {
    /// Checks if a transition to the target status is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if `(self, target)` is not in
    /// [`TRANSITIONS`]. Self-transitions and transitions out of terminal
    /// states are always rejected.
    pub fn can_transition_to(&self, target: BookingStatus) -> Result<()> {
        if TRANSITIONS.contains(&(*self, target)) {
            return Ok(());
        }

        Err(Error::InvalidTransition {
            from: *self,
            to: target,
        })
    }

    /// Returns the list of valid target states for the current status.
    pub fn valid_transitions(&self) -> Vec<BookingStatus> {
        TRANSITIONS
            .iter()
            .filter(|(from, _)| from == self)
            .map(|(_, to)| *to)
            .collect()
    }

    /// Returns true if no transition leaves this status.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::Completed | BookingStatus::Cancelled | BookingStatus::NoShow
        )
    }
}

/// Applies a status transition to a booking.
///
/// On success the status and `updated_at` change; a cancellation also
/// records the trimmed `reason` (blank reasons are stored as `None`).
/// A reason passed with any other target is ignored.
///
/// # Arguments
///
/// * `booking` - The booking to transition
/// * `target` - The requested status
/// * `reason` - Optional cancellation reason
/// * `now` - Timestamp recorded in `updated_at`
///
/// # Errors
///
/// Returns [`Error::InvalidTransition`] if the transition is not allowed.
/// The booking is left untouched in that case.
pub fn apply_transition(
    booking: &mut Booking,
    target: BookingStatus,
    reason: Option<String>,
    now: NaiveDateTime,
) -> Result<()> {
    booking.status.can_transition_to(target)?;

    booking.status = target;
    if target == BookingStatus::Cancelled {
        booking.cancellation_reason = normalize_text(reason);
    }
    booking.updated_at = now;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states_have_no_exits() {
        for status in BookingStatus::ALL {
            assert_eq!(status.is_terminal(), status.valid_transitions().is_empty());
        }
    }

    #[test]
    fn pending_exits() {
        assert_eq!(
            BookingStatus::Pending.valid_transitions(),
            vec![
                BookingStatus::Confirmed,
                BookingStatus::Cancelled,
                BookingStatus::NoShow
            ]
        );
    }
}
