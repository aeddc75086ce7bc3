// Rust guideline compliant 2026-10-12

//! Explicit caller identity for boundary operations.
//!
//! Every operation that creates or changes a booking or review receives the
//! acting party as an argument. There is no ambient "current user".

use crate::error::{AppError, Result};
use glowbook_core::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the marketplace the caller acts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A client booking services.
    Client,
    /// A provider delivering services.
    Provider,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => f.write_str("client"),
            Role::Provider => f.write_str("provider"),
        }
    }
}

/// The caller of a boundary operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User or provider ID.
    pub id: String,
    /// Side the caller acts for.
    pub role: Role,
}

impl Actor {
    /// A client acting as `id`.
    pub fn client(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Client,
        }
    }

    /// A provider acting as `id`.
    pub fn provider(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: Role::Provider,
        }
    }

    /// Returns true if the actor is the booking's client or provider.
    pub fn is_party_to(&self, booking: &Booking) -> bool {
        match self.role {
            Role::Client => booking.user_id == self.id,
            Role::Provider => booking.provider_id == self.id,
        }
    }

    /// Ensures the actor is the booking's client or provider.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotPermitted`] otherwise.
    pub fn ensure_party_to(&self, booking: &Booking) -> Result<()> {
        if self.is_party_to(booking) {
            return Ok(());
        }
        Err(AppError::NotPermitted(format!(
            "{} {} is not a party to booking {}",
            self.role, self.id, booking.id
        )))
    }

    /// Ensures the actor may request `target` on `booking`.
    ///
    /// Either party may cancel; only the provider confirms, completes or
    /// marks a no-show. Whether the transition itself is legal is decided by
    /// the state machine afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotPermitted`] if the actor is not a party or the
    /// target is reserved for the provider.
    pub fn ensure_may_request(&self, booking: &Booking, target: BookingStatus) -> Result<()> {
        self.ensure_party_to(booking)?;
        if target == BookingStatus::Cancelled || self.role == Role::Provider {
            return Ok(());
        }
        Err(AppError::NotPermitted(format!(
            "Only the provider may mark a booking {}",
            target
        )))
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.role, self.id)
    }
}
