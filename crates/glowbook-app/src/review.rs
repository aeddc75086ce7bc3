// Rust guideline compliant 2026-10-12

//! Review boundary operations.

use crate::actor::{Actor, Role};
use crate::error::{AppError, Result};
use glowbook_core::{
    is_rating_eligible, rating_state, BookingRepository, Error as CoreError, RatingState, Review,
    ReviewRepository,
};
use chrono::NaiveDateTime;

/// Review operations over injected repositories.
pub struct ReviewService<'a> {
    bookings: &'a dyn BookingRepository,
    reviews: &'a dyn ReviewRepository,
}

impl<'a> ReviewService<'a> {
    /// Creates a review service.
    pub fn new(bookings: &'a dyn BookingRepository, reviews: &'a dyn ReviewRepository) -> Self {
        Self { bookings, reviews }
    }

    /// Submits the client's review of a booking.
    ///
    /// Submitting for a booking that already has a review is not an error:
    /// the stored review is returned, so concurrent submissions all observe
    /// the same outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The booking is unknown
    /// - The actor is not the booking's client
    /// - The booking is not rating-eligible at `now`
    /// - The rating is outside 1..=5
    pub fn submit(
        &self,
        actor: &Actor,
        booking_id: &str,
        rating: u8,
        comment: Option<String>,
        now: NaiveDateTime,
    ) -> Result<Review> {
        let booking = self.bookings.get(booking_id)?;
        if actor.role != Role::Client || booking.user_id != actor.id {
            return Err(AppError::NotPermitted(format!(
                "Only the client of booking {} may review it",
                booking.id
            )));
        }
        if !is_rating_eligible(&booking, now) {
            return Err(CoreError::Validation(format!(
                "Booking {} cannot be rated yet",
                booking.id
            ))
            .into());
        }

        let review = Review::new(&booking, rating, comment, now)?;
        match self.reviews.create(review) {
            Ok(stored) => {
                tracing::info!(review_id = %stored.id, booking_id, rating, "review recorded");
                Ok(stored)
            }
            Err(CoreError::DuplicateReview(_)) => {
                let existing = self
                    .reviews
                    .find_for_booking(booking_id)?
                    .ok_or_else(|| CoreError::NotFound(format!("review for booking {}", booking_id)))?;
                tracing::info!(review_id = %existing.id, booking_id, "review already recorded");
                Ok(existing)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Derives whether the actor's booking can be rated at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking is unknown or not the actor's.
    pub fn rating_state(
        &self,
        actor: &Actor,
        booking_id: &str,
        now: NaiveDateTime,
    ) -> Result<RatingState> {
        let booking = self.bookings.get(booking_id)?;
        actor.ensure_party_to(&booking)?;
        let has_review = self.reviews.exists_for_booking(booking_id)?;
        Ok(rating_state(&booking, now, has_review))
    }

    /// Changes rating and comment of the actor's own review.
    ///
    /// # Errors
    ///
    /// Returns an error if no review exists, the actor is not the author, or
    /// the rating is out of range.
    pub fn edit(
        &self,
        actor: &Actor,
        booking_id: &str,
        rating: u8,
        comment: Option<String>,
        now: NaiveDateTime,
    ) -> Result<Review> {
        let mut review = self.find(booking_id)?;
        if actor.role != Role::Client {
            return Err(AppError::NotPermitted(
                "Only the review author may edit it".to_string(),
            ));
        }
        review.edit(&actor.id, rating, comment, now)?;
        let review = self.reviews.update(review)?;
        tracing::info!(review_id = %review.id, booking_id, rating, "review edited");
        Ok(review)
    }

    /// Sets or replaces the provider's reply to a review.
    ///
    /// # Errors
    ///
    /// Returns an error if no review exists, the actor is not the reviewed
    /// provider, or the reply is blank.
    pub fn respond(
        &self,
        actor: &Actor,
        booking_id: &str,
        response: String,
        now: NaiveDateTime,
    ) -> Result<Review> {
        let mut review = self.find(booking_id)?;
        if actor.role != Role::Provider {
            return Err(AppError::NotPermitted(
                "Only the reviewed provider may respond".to_string(),
            ));
        }
        review.respond(&actor.id, response, now)?;
        let review = self.reviews.update(review)?;
        tracing::info!(review_id = %review.id, booking_id, "provider responded to review");
        Ok(review)
    }

    /// Lists a provider's reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn list_for_provider(&self, provider_id: &str) -> Result<Vec<Review>> {
        Ok(self.reviews.list_by_provider(provider_id)?)
    }

    fn find(&self, booking_id: &str) -> Result<Review> {
        self.reviews
            .find_for_booking(booking_id)?
            .ok_or_else(|| CoreError::NotFound(format!("review for booking {}", booking_id)).into())
    }
}
