// Rust guideline compliant 2026-10-12

//! Booking boundary operations.
//!
//! These functions validate caller input, consult the catalog and provider
//! capabilities, and then hand off to the repository. Repository errors are
//! surfaced unchanged.

use crate::actor::{Actor, Role};
use crate::error::{AppError, Result};
use glowbook_core::pricing::quote;
use glowbook_core::slots::is_emergency_slot;
use glowbook_core::{
    emergency_slots, normalize_text, Booking, BookingFilter, BookingRepository, BookingStatus,
    BusinessHours, Config, Error as CoreError, MarkupRate, PriceQuote, ProviderCapabilityLookup,
    ServiceCatalogLookup, ServiceInfo, Slot,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Pricing and scheduling parameters for new bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingPolicy {
    /// Markup applied to urgent bookings.
    pub markup_rate: MarkupRate,
    /// Hours in which urgent slots are offered.
    pub business_hours: BusinessHours,
}

impl BookingPolicy {
    /// Reads the policy from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured rate or hours are invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            markup_rate: config.markup_rate()?,
            business_hours: config.business_hours()?,
        })
    }
}

/// A client's request for a new booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Provider to book with.
    pub provider_id: String,
    /// Service offered by that provider.
    pub service_id: String,
    /// Appointment date.
    pub date: NaiveDate,
    /// Appointment start time.
    pub time: NaiveTime,
    /// Request an urgent slot.
    pub is_emergency: bool,
    /// Required for urgent requests.
    pub emergency_reason: Option<String>,
    /// Free-form notes for the provider.
    pub client_notes: Option<String>,
}

/// A service together with its price for the requested booking kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceQuote {
    /// The quoted service.
    pub service: ServiceInfo,
    /// Price breakdown.
    pub quote: PriceQuote,
}

/// Booking operations over injected repositories.
pub struct BookingService<'a> {
    bookings: &'a dyn BookingRepository,
    providers: &'a dyn ProviderCapabilityLookup,
    services: &'a dyn ServiceCatalogLookup,
    policy: BookingPolicy,
}

impl<'a> BookingService<'a> {
    /// Creates a booking service.
    pub fn new(
        bookings: &'a dyn BookingRepository,
        providers: &'a dyn ProviderCapabilityLookup,
        services: &'a dyn ServiceCatalogLookup,
        policy: BookingPolicy,
    ) -> Self {
        Self {
            bookings,
            providers,
            services,
            policy,
        }
    }

    /// Returns the active policy.
    pub fn policy(&self) -> BookingPolicy {
        self.policy
    }

    /// Urgent slots offered at `now`.
    pub fn available_slots(&self, now: NaiveDateTime) -> Vec<Slot> {
        emergency_slots(now, self.policy.business_hours).collect()
    }

    /// Prices a service as a regular or urgent booking.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] for unknown services.
    pub fn quote(&self, service_id: &str, is_emergency: bool) -> Result<ServiceQuote> {
        let service = self.services.get_service(service_id)?;
        let quote = quote(service.base_price, is_emergency, self.policy.markup_rate);
        Ok(ServiceQuote { service, quote })
    }

    /// Creates a pending booking for the acting client.
    ///
    /// Urgent requests need a reason, a provider that is premium and accepts
    /// urgent bookings, and a start time among the slots offered at `now`.
    /// Regular requests must start after `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The actor is not a client
    /// - The service is unknown or belongs to another provider
    /// - An urgent request has no reason, or is not in an offered slot
    /// - The provider lacks the urgent-booking capability
    /// - The repository rejects the booking
    pub fn create_booking(
        &self,
        actor: &Actor,
        request: BookingRequest,
        now: NaiveDateTime,
    ) -> Result<Booking> {
        if actor.role != Role::Client {
            return Err(AppError::NotPermitted(
                "Only clients can create bookings".to_string(),
            ));
        }

        let service = self.services.get_service(&request.service_id)?;
        if service.provider_id != request.provider_id {
            return Err(CoreError::Validation(format!(
                "Service {} is not offered by provider {}",
                service.id, request.provider_id
            ))
            .into());
        }

        let emergency_reason = normalize_text(request.emergency_reason);
        if request.is_emergency {
            if emergency_reason.is_none() {
                return Err(
                    CoreError::Validation("Emergency bookings require a reason".to_string()).into(),
                );
            }
            self.ensure_emergency_capable(&request.provider_id)?;
            self.ensure_emergency_slot(now, request.date, request.time)?;
        } else {
            ensure_future(now, request.date, request.time)?;
        }

        let price = quote(service.base_price, request.is_emergency, self.policy.markup_rate);
        let mut booking = Booking::new(
            actor.id.clone(),
            request.provider_id,
            request.service_id,
            request.date,
            request.time,
            service.duration_minutes,
            now,
        );
        booking.apply_quote(&price);
        booking.emergency_reason = if request.is_emergency {
            emergency_reason
        } else {
            None
        };
        booking.client_notes = normalize_text(request.client_notes);

        let booking = self.bookings.create(booking)?;
        tracing::info!(
            booking_id = %booking.id,
            provider_id = %booking.provider_id,
            is_emergency = booking.is_emergency,
            total_price = booking.total_price,
            "booking created"
        );
        Ok(booking)
    }

    /// Fetches a booking the actor is party to.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking is unknown or belongs to others.
    pub fn get(&self, actor: &Actor, booking_id: &str) -> Result<Booking> {
        let booking = self.bookings.get(booking_id)?;
        actor.ensure_party_to(&booking)?;
        Ok(booking)
    }

    /// Lists the actor's bookings ordered by `(date, time)`.
    ///
    /// Clients see bookings they made; providers see bookings made with them.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn list(&self, actor: &Actor, filter: &BookingFilter) -> Result<Vec<Booking>> {
        let bookings = match actor.role {
            Role::Client => self.bookings.list_by_user(&actor.id, filter)?,
            Role::Provider => self.bookings.list_by_provider(&actor.id, filter)?,
        };
        Ok(bookings)
    }

    /// Requests a status transition.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotPermitted`] if the actor may not request the
    /// target, or [`CoreError::InvalidTransition`] if the stored status does
    /// not allow it.
    pub fn change_status(
        &self,
        actor: &Actor,
        booking_id: &str,
        target: BookingStatus,
        reason: Option<String>,
        now: NaiveDateTime,
    ) -> Result<Booking> {
        let current = self.bookings.get(booking_id)?;
        actor.ensure_may_request(&current, target)?;

        let updated = self
            .bookings
            .update_status(booking_id, target, reason, now)
            .map_err(|err| {
                if let CoreError::InvalidTransition { from, to } = &err {
                    tracing::warn!(booking_id, %from, %to, actor = %actor, "transition rejected");
                }
                err
            })?;
        tracing::info!(
            booking_id,
            from = %current.status,
            to = %updated.status,
            actor = %actor,
            "booking status changed"
        );
        Ok(updated)
    }

    /// Moves a pending booking to a new date and time.
    ///
    /// Urgent bookings may only move to another currently offered slot;
    /// regular bookings must stay in the future.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a party, the new time is not
    /// allowed, or the booking is no longer pending.
    pub fn reschedule(
        &self,
        actor: &Actor,
        booking_id: &str,
        date: NaiveDate,
        time: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<Booking> {
        let current = self.bookings.get(booking_id)?;
        actor.ensure_party_to(&current)?;

        if current.is_emergency {
            self.ensure_emergency_slot(now, date, time)?;
        } else {
            ensure_future(now, date, time)?;
        }

        let updated = self.bookings.update_date_time(booking_id, date, time, now)?;
        tracing::info!(booking_id, %date, %time, actor = %actor, "booking rescheduled");
        Ok(updated)
    }

    fn ensure_emergency_capable(&self, provider_id: &str) -> Result<()> {
        let capable = self.providers.is_premium(provider_id)?
            && self.providers.accepts_emergency(provider_id)?;
        if !capable {
            return Err(CoreError::PremiumRequired(provider_id.to_string()).into());
        }
        Ok(())
    }

    fn ensure_emergency_slot(
        &self,
        now: NaiveDateTime,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<()> {
        if is_emergency_slot(now, self.policy.business_hours, date, time) {
            return Ok(());
        }
        Err(CoreError::Validation(format!(
            "{} {} is not an available emergency slot",
            date,
            time.format("%H:%M")
        ))
        .into())
    }
}

fn ensure_future(now: NaiveDateTime, date: NaiveDate, time: NaiveTime) -> Result<()> {
    if date.and_time(time) <= now {
        return Err(CoreError::Validation(format!(
            "Booking time {} {} is not in the future",
            date,
            time.format("%H:%M")
        ))
        .into());
    }
    Ok(())
}
