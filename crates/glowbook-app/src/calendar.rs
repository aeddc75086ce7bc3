// Rust guideline compliant 2026-10-12

//! Provider calendar queries.

use crate::actor::{Actor, Role};
use crate::error::{AppError, Result};
use glowbook_core::calendar::BlockMetrics;
use glowbook_core::{
    BookingFilter, BookingRepository, CalendarAggregator, DefaultPalette, MonthView, StatusPalette,
    WeekView,
};
use chrono::NaiveDate;

/// Week and month views of the acting provider's bookings.
pub struct CalendarService<'a, P = DefaultPalette> {
    bookings: &'a dyn BookingRepository,
    aggregator: CalendarAggregator<P>,
}

impl<'a> CalendarService<'a> {
    /// Creates a calendar service with the default palette.
    pub fn new(bookings: &'a dyn BookingRepository, metrics: BlockMetrics) -> Self {
        Self::with_palette(bookings, DefaultPalette, metrics)
    }
}

impl<'a, P: StatusPalette> CalendarService<'a, P> {
    /// Creates a calendar service with a custom palette.
    pub fn with_palette(bookings: &'a dyn BookingRepository, palette: P, metrics: BlockMetrics) -> Self {
        Self {
            bookings,
            aggregator: CalendarAggregator::new(palette, metrics),
        }
    }

    /// Builds the week containing `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a provider, the repository
    /// cannot be read, or the week lies outside the supported date range.
    pub fn week(&self, actor: &Actor, reference: NaiveDate) -> Result<WeekView> {
        let bookings = self.provider_bookings(actor)?;
        self.aggregator
            .week_view(&bookings, reference)
            .ok_or_else(|| out_of_range(reference))
    }

    /// Builds the month grid containing `reference`.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a provider, the repository
    /// cannot be read, or the month grid lies outside the supported date
    /// range.
    pub fn month(&self, actor: &Actor, reference: NaiveDate) -> Result<MonthView> {
        let bookings = self.provider_bookings(actor)?;
        self.aggregator
            .month_view(&bookings, reference)
            .ok_or_else(|| out_of_range(reference))
    }

    fn provider_bookings(&self, actor: &Actor) -> Result<Vec<glowbook_core::Booking>> {
        if actor.role != Role::Provider {
            return Err(AppError::NotPermitted(
                "Calendars are only available to providers".to_string(),
            ));
        }
        Ok(self
            .bookings
            .list_by_provider(&actor.id, &BookingFilter::default())?)
    }
}

fn out_of_range(reference: NaiveDate) -> AppError {
    AppError::InvalidInput(format!(
        "Date {} is outside the supported calendar range",
        reference
    ))
}
