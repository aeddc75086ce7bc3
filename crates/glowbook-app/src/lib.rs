// Rust guideline compliant 2026-10-12

//! Shared application services for Glowbook.
//!
//! This crate provides the boundary operations (booking creation, status
//! changes, rescheduling, reviews, calendars) over injected repositories,
//! plus repository discovery, list filter parsing, error codes, and
//! standardized response envelopes.

pub mod actor;
pub mod booking;
pub mod calendar;
pub mod error;
pub mod list;
pub mod repo;
pub mod response;
pub mod review;
pub mod time;

pub use actor::{Actor, Role};
pub use booking::{BookingPolicy, BookingRequest, BookingService, ServiceQuote};
pub use calendar::CalendarService;
pub use error::{AppError, ErrorCode, Result};
pub use list::{parse_status, ListOptions};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use review::ReviewService;
pub use time::{local_now, parse_date, parse_datetime, parse_time, resolve_now};
