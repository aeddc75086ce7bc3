// Rust guideline compliant 2026-10-12

//! Core data models for Glowbook.

use crate::identity::{self, BOOKING_PREFIX, REVIEW_PREFIX};
use crate::pricing::PriceQuote;
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole currency units. All prices are non-negative.
pub type Money = u64;

/// Lowest rating a client may give.
pub const MIN_RATING: u8 = 1;

/// Highest rating a client may give.
pub const MAX_RATING: u8 = 5;

/// Status of a booking in the lifecycle state machine.
///
/// The serialized names are the persisted vocabulary and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Requested by the client, awaiting provider acceptance.
    Pending,
    /// Accepted by the provider.
    Confirmed,
    /// Service was delivered.
    Completed,
    /// Cancelled by either party.
    Cancelled,
    /// Client did not show up.
    NoShow,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
    ];

    /// Returns the persisted name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no_show",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reservation of a service with a provider at a given time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier (format: bkg-XXXXXXXX).
    pub id: String,
    /// Client who made the booking.
    pub user_id: String,
    /// Provider delivering the service.
    pub provider_id: String,
    /// Booked service.
    pub service_id: String,
    /// Calendar date of the appointment.
    pub date: NaiveDate,
    /// Local start time, minute precision.
    pub time: NaiveTime,
    /// Length of the appointment, copied from the service.
    pub duration_minutes: u32,
    /// Service price before any markup.
    pub base_price: Money,
    /// Urgent-booking markup, zero for regular bookings.
    #[serde(default)]
    pub emergency_markup: Money,
    /// `base_price + emergency_markup`.
    pub total_price: Money,
    /// Whether this is an urgent booking.
    #[serde(default)]
    pub is_emergency: bool,
    /// Why the client needs an urgent slot.
    #[serde(default)]
    pub emergency_reason: Option<String>,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// Free-form notes from the client.
    #[serde(default)]
    pub client_notes: Option<String>,
    /// Free-form notes from the provider.
    #[serde(default)]
    pub provider_notes: Option<String>,
    /// Reason recorded when the booking was cancelled.
    #[serde(default)]
    pub cancellation_reason: Option<String>,
    /// Creation timestamp (local).
    pub created_at: NaiveDateTime,
    /// Last modification timestamp (local).
    pub updated_at: NaiveDateTime,
}

impl Booking {
    /// Creates a pending, regular-priced booking with a fresh ID.
    ///
    /// Prices start at zero; callers apply a [`PriceQuote`] with
    /// [`Booking::apply_quote`] before persisting.
    pub fn new(
        user_id: String,
        provider_id: String,
        service_id: String,
        date: NaiveDate,
        time: NaiveTime,
        duration_minutes: u32,
        now: NaiveDateTime,
    ) -> Self {
        let seed = format!("{}/{}/{}/{}T{}", user_id, provider_id, service_id, date, time);
        Self {
            id: identity::generate_id(BOOKING_PREFIX, &seed),
            user_id,
            provider_id,
            service_id,
            date,
            time,
            duration_minutes,
            base_price: 0,
            emergency_markup: 0,
            total_price: 0,
            is_emergency: false,
            emergency_reason: None,
            status: BookingStatus::Pending,
            client_notes: None,
            provider_notes: None,
            cancellation_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copies the prices and the emergency flag from a quote.
    pub fn apply_quote(&mut self, quote: &PriceQuote) {
        self.base_price = quote.base_price;
        self.emergency_markup = quote.emergency_markup;
        self.total_price = quote.total_price;
        self.is_emergency = quote.is_emergency;
    }

    /// Returns the combined local date and time of the appointment.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Validates the booking data.
    ///
    /// # Errors
    ///
    /// Returns a validation error if:
    /// - The ID format is invalid
    /// - A foreign reference is empty
    /// - The duration is zero
    /// - The time carries seconds
    /// - The total does not equal base plus markup
    /// - An emergency booking has no reason
    pub fn validate(&self) -> Result<()> {
        identity::validate_id_format(&self.id, BOOKING_PREFIX)?;

        for (field, value) in [
            ("user_id", &self.user_id),
            ("provider_id", &self.provider_id),
            ("service_id", &self.service_id),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!("{} cannot be empty", field)));
            }
        }

        if self.duration_minutes == 0 {
            return Err(Error::Validation(
                "duration_minutes must be positive".to_string(),
            ));
        }

        if self.time.second() != 0 || self.time.nanosecond() != 0 {
            return Err(Error::Validation(format!(
                "Booking time must have minute precision, got {}",
                self.time
            )));
        }

        if self.base_price.checked_add(self.emergency_markup) != Some(self.total_price) {
            return Err(Error::Validation(format!(
                "total_price {} must equal base_price {} plus emergency_markup {}",
                self.total_price, self.base_price, self.emergency_markup
            )));
        }

        if self.is_emergency && is_blank(self.emergency_reason.as_deref()) {
            return Err(Error::Validation(
                "Emergency bookings require a reason".to_string(),
            ));
        }

        Ok(())
    }
}

/// A client's rating of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique identifier (format: rev-XXXXXXXX).
    pub id: String,
    /// Rated booking. At most one review exists per booking.
    pub booking_id: String,
    /// Author of the review (the booking's client).
    pub user_id: String,
    /// Reviewed provider.
    pub provider_id: String,
    /// Rating between 1 and 5.
    pub rating: u8,
    /// Optional free-text comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Creation timestamp (local).
    pub created_at: NaiveDateTime,
    /// Last edit of rating or comment.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    /// Provider's public reply.
    #[serde(default)]
    pub provider_response: Option<String>,
    /// When the provider last replied.
    #[serde(default)]
    pub provider_responded_at: Option<NaiveDateTime>,
}

impl Review {
    /// Creates a review for a booking, authored by the booking's client.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the rating is outside 1..=5.
    pub fn new(
        booking: &Booking,
        rating: u8,
        comment: Option<String>,
        now: NaiveDateTime,
    ) -> Result<Self> {
        validate_rating(rating)?;
        Ok(Self {
            id: identity::generate_id(REVIEW_PREFIX, &booking.id),
            booking_id: booking.id.clone(),
            user_id: booking.user_id.clone(),
            provider_id: booking.provider_id.clone(),
            rating,
            comment: normalize_text(comment),
            created_at: now,
            updated_at: None,
            provider_response: None,
            provider_responded_at: None,
        })
    }

    /// Validates the review data.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an ID is malformed, a reference is
    /// empty, or the rating is out of range.
    pub fn validate(&self) -> Result<()> {
        identity::validate_id_format(&self.id, REVIEW_PREFIX)?;
        identity::validate_id_format(&self.booking_id, BOOKING_PREFIX)?;
        if self.user_id.trim().is_empty() || self.provider_id.trim().is_empty() {
            return Err(Error::Validation(
                "Review must reference a user and a provider".to_string(),
            ));
        }
        validate_rating(self.rating)
    }

    /// Changes rating and comment. Only the original author may edit.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `author_id` is not the review author or
    /// the rating is out of range. The review is unchanged on error.
    pub fn edit(
        &mut self,
        author_id: &str,
        rating: u8,
        comment: Option<String>,
        now: NaiveDateTime,
    ) -> Result<()> {
        if author_id != self.user_id {
            return Err(Error::Validation(format!(
                "Only {} may edit review {}",
                self.user_id, self.id
            )));
        }
        validate_rating(rating)?;
        self.rating = rating;
        self.comment = normalize_text(comment);
        self.updated_at = Some(now);
        Ok(())
    }

    /// Sets or replaces the provider's reply.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `provider_id` is not the reviewed
    /// provider or the reply is blank.
    pub fn respond(&mut self, provider_id: &str, response: String, now: NaiveDateTime) -> Result<()> {
        if provider_id != self.provider_id {
            return Err(Error::Validation(format!(
                "Only {} may respond to review {}",
                self.provider_id, self.id
            )));
        }
        let Some(response) = normalize_text(Some(response)) else {
            return Err(Error::Validation("Response cannot be empty".to_string()));
        };
        self.provider_response = Some(response);
        self.provider_responded_at = Some(now);
        Ok(())
    }
}

fn validate_rating(rating: u8) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(Error::Validation(format!(
            "Rating must be {}-{}, got {}",
            MIN_RATING, MAX_RATING, rating
        )));
    }
    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Trims optional text and maps blank values to `None`.
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
