// Rust guideline compliant 2026-10-12

//! Hash-based identifiers for bookings and reviews.
//!
//! IDs take the form `<prefix>-<8 lowercase hex chars>`, e.g. `bkg-1a2b3c4d`.

use crate::{Error, Result};
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix for booking identifiers.
pub const BOOKING_PREFIX: &str = "bkg";

/// Prefix for review identifiers.
pub const REVIEW_PREFIX: &str = "rev";

const HASH_LEN: usize = 8;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generates a new identifier with the given prefix.
///
/// The hash mixes the caller-provided seed with the wall clock and a
/// process-wide sequence number, so two calls never return the same ID
/// within one process even for identical seeds.
///
/// # Arguments
///
/// * `prefix` - Identifier prefix (`bkg` or `rev`)
/// * `seed` - Caller-specific content mixed into the hash
///
/// # Returns
///
/// A new identifier string.
pub fn generate_id(prefix: &str, seed: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);

    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(seed.as_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(sequence.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}-{}", prefix, &hex[..HASH_LEN])
}

/// Validates that an identifier has the expected prefix and hash format.
///
/// # Errors
///
/// Returns a validation error if the prefix does not match or the hash part
/// is not exactly eight lowercase hex characters.
pub fn validate_id_format(id: &str, prefix: &str) -> Result<()> {
    let Some(hash) = id
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return Err(Error::Validation(format!(
            "ID '{}' must start with '{}-'",
            id, prefix
        )));
    };

    let well_formed = hash.len() == HASH_LEN
        && hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if !well_formed {
        return Err(Error::Validation(format!(
            "ID '{}' must end in {} lowercase hex characters",
            id, HASH_LEN
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_well_formed() {
        let id = generate_id(BOOKING_PREFIX, "user-1/provider-1");
        assert!(id.starts_with("bkg-"));
        assert!(validate_id_format(&id, BOOKING_PREFIX).is_ok());
    }

    #[test]
    fn identical_seeds_produce_distinct_ids() {
        let a = generate_id(REVIEW_PREFIX, "same");
        let b = generate_id(REVIEW_PREFIX, "same");
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_wrong_prefix_and_bad_hash() {
        assert!(validate_id_format("rev-1a2b3c4d", BOOKING_PREFIX).is_err());
        assert!(validate_id_format("bkg-1A2B3C4D", BOOKING_PREFIX).is_err());
        assert!(validate_id_format("bkg-1a2b", BOOKING_PREFIX).is_err());
        assert!(validate_id_format("bkg1a2b3c4d", BOOKING_PREFIX).is_err());
    }
}
