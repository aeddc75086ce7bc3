// Rust guideline compliant 2026-10-12

//! Persistence and lookup contracts.
//!
//! The core never talks to a database directly. Services depend on these
//! traits; [`crate::storage`] and [`crate::catalog`] provide file-backed
//! implementations.

use crate::models::Money;
use crate::{Booking, BookingStatus, Result, Review};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Optional constraints for booking listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Only bookings in this status.
    pub status: Option<BookingStatus>,
    /// Only bookings on or after this date.
    pub from: Option<NaiveDate>,
    /// Only bookings on or before this date.
    pub to: Option<NaiveDate>,
    /// Only urgent bookings.
    pub emergency_only: bool,
}

impl BookingFilter {
    /// Returns true if the booking passes every set constraint.
    pub fn matches(&self, booking: &Booking) -> bool {
        if self.status.is_some_and(|status| booking.status != status) {
            return false;
        }
        if self.from.is_some_and(|from| booking.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| booking.date > to) {
            return false;
        }
        !self.emergency_only || booking.is_emergency
    }
}

/// Filters bookings and orders them by `(date, time, id)` ascending.
pub fn filter_and_sort(bookings: Vec<Booking>, filter: &BookingFilter) -> Vec<Booking> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let mut selected: Vec<Booking> = if bookings.len() >= PARALLEL_THRESHOLD {
        bookings
            .into_par_iter()
            .filter(|b| filter.matches(b))
            .collect()
    } else {
        bookings.into_iter().filter(|b| filter.matches(b)).collect()
    };

    selected.sort_by(|a, b| (a.date, a.time, &a.id).cmp(&(b.date, b.time, &b.id)));
    selected
}

/// Storage of bookings.
pub trait BookingRepository {
    /// Persists a new booking.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the booking is invalid or its ID exists.
    fn create(&self, booking: Booking) -> Result<Booking>;

    /// Fetches a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for unknown IDs.
    fn get(&self, id: &str) -> Result<Booking>;

    /// Lists a client's bookings ordered by `(date, time)`.
    fn list_by_user(&self, user_id: &str, filter: &BookingFilter) -> Result<Vec<Booking>>;

    /// Lists a provider's bookings ordered by `(date, time)`.
    fn list_by_provider(&self, provider_id: &str, filter: &BookingFilter) -> Result<Vec<Booking>>;

    /// Applies a status transition as one atomic read-modify-write.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTransition`] if the stored status does
    /// not allow the transition, or [`crate::Error::NotFound`].
    fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
        reason: Option<String>,
        now: NaiveDateTime,
    ) -> Result<Booking>;

    /// Moves a pending booking to a new date and time.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the booking is pending.
    fn update_date_time(
        &self,
        id: &str,
        date: NaiveDate,
        time: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<Booking>;
}

/// Storage of reviews, unique per booking.
pub trait ReviewRepository {
    /// Persists a new review.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DuplicateReview`] if the booking already has one.
    fn create(&self, review: Review) -> Result<Review>;

    /// Returns true if a review exists for the booking.
    fn exists_for_booking(&self, booking_id: &str) -> Result<bool>;

    /// Returns the review for the booking, if any.
    fn find_for_booking(&self, booking_id: &str) -> Result<Option<Review>>;

    /// Lists a provider's reviews, newest first.
    fn list_by_provider(&self, provider_id: &str) -> Result<Vec<Review>>;

    /// Replaces a stored review (rating/comment edits and provider replies).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if no review has this ID, or a
    /// validation error if the booking reference changed.
    fn update(&self, review: Review) -> Result<Review>;
}

/// Provider capabilities consulted when an urgent booking is created.
pub trait ProviderCapabilityLookup {
    /// Returns true if the provider has a premium profile.
    fn is_premium(&self, provider_id: &str) -> Result<bool>;

    /// Returns true if the provider opted in to urgent bookings.
    fn accepts_emergency(&self, provider_id: &str) -> Result<bool>;
}

/// Price and length of a bookable service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service ID.
    pub id: String,
    /// Provider offering the service.
    pub provider_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Price before markup.
    pub base_price: Money,
    /// Appointment length.
    pub duration_minutes: u32,
}

/// Service catalog consulted to populate new bookings.
pub trait ServiceCatalogLookup {
    /// Fetches a service.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] for unknown services.
    fn get_service(&self, service_id: &str) -> Result<ServiceInfo>;
}
