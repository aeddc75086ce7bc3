// Rust guideline compliant 2026-10-12

//! Emergency pricing.
//!
//! The markup for an urgent booking is `round_half_up(base_price × rate)`.
//! Rates are stored as basis points so rounding is done in integer
//! arithmetic and `.5` cases always round up.

use crate::models::Money;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const BASIS_POINTS: u128 = 10_000;

/// Markup rate for emergency bookings, in basis points (1/100 of a percent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkupRate(u32);

impl MarkupRate {
    /// 25%, the rate applied everywhere emergency pricing is quoted.
    pub const DEFAULT: MarkupRate = MarkupRate(2_500);

    /// No markup.
    pub const ZERO: MarkupRate = MarkupRate(0);

    /// Creates a rate from basis points (`2500` = 25%).
    ///
    /// # Errors
    ///
    /// Returns a validation error if the rate exceeds 100%.
    pub fn from_basis_points(bps: u32) -> Result<Self> {
        if u128::from(bps) > BASIS_POINTS {
            return Err(Error::Validation(format!(
                "Markup rate must be between 0 and 10000 basis points, got {}",
                bps
            )));
        }
        Ok(Self(bps))
    }

    /// Creates a rate from a fraction (`0.25` = 25%), rounded to the nearest
    /// basis point.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the fraction is not finite or lies
    /// outside `[0, 1]`.
    pub fn from_fraction(fraction: f64) -> Result<Self> {
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(Error::Validation(format!(
                "Markup rate must be between 0 and 1, got {}",
                fraction
            )));
        }
        Ok(Self((fraction * BASIS_POINTS as f64).round() as u32))
    }

    /// Returns the rate in basis points.
    pub fn basis_points(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction.
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / BASIS_POINTS as f64
    }
}

impl Default for MarkupRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MarkupRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", f64::from(self.0) / 100.0)
    }
}

/// Price breakdown for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Service price.
    pub base_price: Money,
    /// Markup added for urgent bookings.
    pub emergency_markup: Money,
    /// What the client pays.
    pub total_price: Money,
    /// Whether the quote is for an urgent booking.
    pub is_emergency: bool,
}

impl PriceQuote {
    /// Quote for a regular booking: no markup.
    pub fn regular(base_price: Money) -> Self {
        Self {
            base_price,
            emergency_markup: 0,
            total_price: base_price,
            is_emergency: false,
        }
    }

    /// Quote for an urgent booking at the given markup rate.
    pub fn emergency(base_price: Money, rate: MarkupRate) -> Self {
        let emergency_markup = emergency_markup(base_price, rate);
        Self {
            base_price,
            emergency_markup,
            total_price: base_price.saturating_add(emergency_markup),
            is_emergency: true,
        }
    }
}

/// Computes `round_half_up(base_price × rate)`.
pub fn emergency_markup(base_price: Money, rate: MarkupRate) -> Money {
    let scaled = u128::from(base_price) * u128::from(rate.0);
    let rounded = (scaled + BASIS_POINTS / 2) / BASIS_POINTS;
    Money::try_from(rounded).unwrap_or(Money::MAX)
}

/// Computes `base_price + round_half_up(base_price × rate)`.
pub fn total_price(base_price: Money, rate: MarkupRate) -> Money {
    base_price.saturating_add(emergency_markup(base_price, rate))
}

/// Builds the quote for a booking request.
pub fn quote(base_price: Money, is_emergency: bool, rate: MarkupRate) -> PriceQuote {
    if is_emergency {
        PriceQuote::emergency(base_price, rate)
    } else {
        PriceQuote::regular(base_price)
    }
}
