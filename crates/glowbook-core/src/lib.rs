// Rust guideline compliant 2026-10-12

//! Glowbook Core Library
//!
//! This crate provides the booking lifecycle and scheduling rules for the
//! Glowbook marketplace:
//! - Data models (Booking, Review, BookingStatus)
//! - FSM logic (status transitions)
//! - Emergency slot generation and pricing
//! - Review eligibility
//! - Provider calendar aggregation (week and month views)
//! - Repository contracts plus JSONL and catalog implementations
//! - Configuration, identifiers, and error types

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod review;
pub mod slots;
pub mod storage;

pub use calendar::{
    CalendarAggregator, DefaultPalette, MonthView, StatusColor, StatusPalette, WeekView,
};
pub use catalog::{Catalog, ProviderProfile};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::apply_transition;
pub use models::{normalize_text, Booking, BookingStatus, Money, Review};
pub use pricing::{MarkupRate, PriceQuote};
pub use repository::{
    BookingFilter, BookingRepository, ProviderCapabilityLookup, ReviewRepository,
    ServiceCatalogLookup, ServiceInfo,
};
pub use review::{is_rating_eligible, rating_state, RatingState};
pub use slots::{emergency_slots, BusinessHours, Slot, SlotDay};
pub use storage::{BookingStore, ReviewStore};
