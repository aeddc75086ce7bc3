// Rust guideline compliant 2026-10-12

//! Implementation of the review commands: `review`, `edit-review`,
//! `review-state`, `reviews`, and `respond`.

use crate::commands::{ActorArgs, Workspace};
use crate::OutputFormatter;
use anyhow::Result;
use chrono::NaiveDateTime;
use glowbook_app::Actor;
use std::path::Path;

/// A client's rating of a booking.
#[derive(Debug, Clone)]
pub struct RatingArgs {
    /// Booking being rated.
    pub booking_id: String,
    /// Reviewing client.
    pub user: String,
    /// Rating, 1 to 5.
    pub rating: u8,
    /// Optional comment.
    pub comment: Option<String>,
}

/// Records a review. Submitting twice returns the first review.
///
/// # Errors
///
/// Returns an error if the caller is not the booking's client, the booking
/// is not yet ratable, or the rating is out of range.
pub fn submit(
    root: Option<&Path>,
    args: RatingArgs,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let review = workspace.review_service().submit(
        &Actor::client(args.user),
        &args.booking_id,
        args.rating,
        args.comment,
        now,
    )?;
    println!("{}", formatter.format_review(&review));
    Ok(())
}

/// Changes the rating and comment of an existing review.
///
/// # Errors
///
/// Returns an error if no review exists or the caller is not its author.
pub fn edit(
    root: Option<&Path>,
    args: RatingArgs,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let review = workspace.review_service().edit(
        &Actor::client(args.user),
        &args.booking_id,
        args.rating,
        args.comment,
        now,
    )?;
    println!("{}", formatter.format_review(&review));
    Ok(())
}

/// Shows whether a booking can be rated.
///
/// # Errors
///
/// Returns an error if the booking is unknown or the caller is not a party.
pub fn state(
    root: Option<&Path>,
    actor: &ActorArgs,
    booking_id: &str,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let state = workspace
        .review_service()
        .rating_state(&actor.actor()?, booking_id, now)?;
    println!("{}", formatter.format_rating_state(booking_id, state));
    Ok(())
}

/// Lists a provider's reviews, newest first.
///
/// # Errors
///
/// Returns an error if the review store cannot be read.
pub fn list(root: Option<&Path>, provider: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let reviews = workspace.review_service().list_for_provider(provider)?;
    println!("{}", formatter.format_reviews(&reviews));
    Ok(())
}

/// Sets the provider's reply to the review of a booking.
///
/// # Errors
///
/// Returns an error if no review exists or the caller is not the reviewed
/// provider.
pub fn respond(
    root: Option<&Path>,
    provider: &str,
    booking_id: &str,
    text: String,
    now: NaiveDateTime,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let review = workspace
        .review_service()
        .respond(&Actor::provider(provider), booking_id, text, now)?;
    println!("{}", formatter.format_review(&review));
    Ok(())
}
