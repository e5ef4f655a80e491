//! # Booking References
//!
//! Confirmation codes shown to the customer, e.g. `BK-482913`.
//!
//! ## Not a Primary Key
//! A reference is six random digits: 900,000 possible values, no uniqueness
//! check. It is a presentation token only. Anything that stores bookings
//! must mint its own durable identifier.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// Prefix of every booking reference.
pub const REFERENCE_PREFIX: &str = "BK-";

/// Smallest numeric suffix (always six digits).
pub const REFERENCE_MIN: u32 = 100_000;

/// Largest numeric suffix.
pub const REFERENCE_MAX: u32 = 999_999;

// =============================================================================
// Booking Reference
// =============================================================================

/// A `BK-` code with a six-digit suffix in `100000..=999999`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookingReference(u32);

impl BookingReference {
    /// Wraps a numeric suffix.
    pub fn from_number(number: u32) -> ValidationResult<Self> {
        if !(REFERENCE_MIN..=REFERENCE_MAX).contains(&number) {
            return Err(ValidationError::OutOfRange {
                field: "reference".to_string(),
                min: REFERENCE_MIN as i64,
                max: REFERENCE_MAX as i64,
            });
        }
        Ok(BookingReference(number))
    }

    /// Parses a reference string.
    ///
    /// ```rust
    /// use aqua_core::reference::BookingReference;
    ///
    /// assert!(BookingReference::parse("BK-482913").is_ok());
    /// assert!(BookingReference::parse("BK-48291").is_err());
    /// assert!(BookingReference::parse("BK-048291").is_err());
    /// assert!(BookingReference::parse("bk-482913").is_err());
    /// ```
    pub fn parse(s: &str) -> ValidationResult<Self> {
        let invalid = || ValidationError::InvalidFormat {
            field: "reference".to_string(),
            reason: "expected BK- followed by six digits".to_string(),
        };

        let digits = s.strip_prefix(REFERENCE_PREFIX).ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let number: u32 = digits.parse().map_err(|_| invalid())?;
        BookingReference::from_number(number)
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", REFERENCE_PREFIX, self.0)
    }
}

impl TryFrom<String> for BookingReference {
    type Error = ValidationError;

    fn try_from(s: String) -> ValidationResult<Self> {
        BookingReference::parse(&s)
    }
}

impl From<BookingReference> for String {
    fn from(reference: BookingReference) -> Self {
        reference.to_string()
    }
}

// =============================================================================
// Generators
// =============================================================================

/// Source of booking references, injected into confirmation.
pub trait ReferenceGenerator {
    fn next_reference(&mut self) -> BookingReference;
}

/// Draws suffixes uniformly from `100000..=999999`.
///
/// Never hands out the same reference twice in a row; an immediate repeat is
/// redrawn.
#[derive(Debug, Clone)]
pub struct RandomReferenceGenerator<R = StdRng> {
    rng: R,
    last: Option<u32>,
}

impl RandomReferenceGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        RandomReferenceGenerator::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        RandomReferenceGenerator::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomReferenceGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomReferenceGenerator { rng, last: None }
    }
}

impl<R: Rng> ReferenceGenerator for RandomReferenceGenerator<R> {
    fn next_reference(&mut self) -> BookingReference {
        let mut number = self.rng.gen_range(REFERENCE_MIN..=REFERENCE_MAX);
        while Some(number) == self.last {
            number = self.rng.gen_range(REFERENCE_MIN..=REFERENCE_MAX);
        }
        self.last = Some(number);
        BookingReference(number)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn looks_like_reference(s: &str) -> bool {
        s.len() == 9
            && s.starts_with("BK-")
            && s[3..].chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_generated_format() {
        let mut generator = RandomReferenceGenerator::seeded(7);
        for _ in 0..1_000 {
            let reference = generator.next_reference();
            let text = reference.to_string();
            assert!(looks_like_reference(&text), "bad reference {}", text);
            assert!((REFERENCE_MIN..=REFERENCE_MAX).contains(&reference.number()));
        }
    }

    #[test]
    fn test_no_immediate_repeat() {
        let mut generator = RandomReferenceGenerator::seeded(42);
        let mut previous = generator.next_reference();
        for _ in 0..10_000 {
            let next = generator.next_reference();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a: Vec<_> = {
            let mut generator = RandomReferenceGenerator::seeded(99);
            (0..5).map(|_| generator.next_reference()).collect()
        };
        let b: Vec<_> = {
            let mut generator = RandomReferenceGenerator::seeded(99);
            (0..5).map(|_| generator.next_reference()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_round_trip_via_serde() {
        let reference = BookingReference::parse("BK-100000").unwrap();
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, "\"BK-100000\"");

        let back: BookingReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);

        assert!(serde_json::from_str::<BookingReference>("\"BK-12\"").is_err());
    }

    #[test]
    fn test_from_number_bounds() {
        assert!(BookingReference::from_number(999_999).is_ok());
        assert!(BookingReference::from_number(99_999).is_err());
        assert!(BookingReference::from_number(1_000_000).is_err());
    }
}
