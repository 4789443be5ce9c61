//! Representability checks run on a decomposed value.
//!
//! # Precision capacity
//!
//! An `f64` carries a little under 16 significant decimal digits. Whatever the
//! integer part of the seconds magnitude uses is no longer available for the
//! fraction, so the digit budget is a step function of the magnitude:
//!
//! | Magnitude (whole seconds) | Example | Max fractional digits |
//! |---------------------------|---------|-----------------------|
//! | < 10 | a few arcseconds | 15 |
//! | < 10⁴ | 1° = 3600″ | 12 |
//! | < 10⁵ | 24h = 86400ˢ | 11 |
//! | < 10⁷ | 360° = 1296000″ | 9 |
//! | < 10¹⁶ | | 0 |
//! | ≥ 10¹⁶ | | none |
//!
//! Beyond 10¹⁶ seconds not even whole seconds are exact, and every precision,
//! including the minute and unit sentinels, overflows.
//!
//! # Width
//!
//! An explicit width is a hard limit on the first segment's digit count.
//!
//! Both checks look at the value after rounding and carry, so 9°59′59.999″ at
//! two places with width 1 overflows (it renders as 10°).
//!
//! For angles, hour angles and right ascensions the first segment has already
//! been wrapped into its period, so a value that rounds up to exactly 360° or
//! 24h is checked as 0 and gets the budget of a small magnitude.

use super::decompose::Decomposed;
use super::spec::Precision;
use crate::errors::OverflowCause;
use crate::math::digit_count;

/// `(exclusive upper bound of the seconds magnitude, fractional digits available)`.
const PRECISION_CAPACITY: [(u128, u8); 16] = [
    (10, 15),
    (100, 14),
    (1_000, 13),
    (10_000, 12),
    (100_000, 11),
    (1_000_000, 10),
    (10_000_000, 9),
    (100_000_000, 8),
    (1_000_000_000, 7),
    (10_000_000_000, 6),
    (100_000_000_000, 5),
    (1_000_000_000_000, 4),
    (10_000_000_000_000, 3),
    (100_000_000_000_000, 2),
    (1_000_000_000_000_000, 1),
    (10_000_000_000_000_000, 0),
];

/// Fractional digits that can be printed exactly for a magnitude in whole
/// seconds, or `None` if the magnitude is too large for any exact rendering.
pub fn precision_capacity(magnitude_seconds: u128) -> Option<u8> {
    PRECISION_CAPACITY
        .iter()
        .find(|(bound, _)| magnitude_seconds < *bound)
        .map(|&(_, digits)| digits)
}

/// Checks a decomposed value against the precision budget and the width.
///
/// # Errors
///
/// - [`OverflowCause::PrecisionExceedsCapacity`] when the requested decimals do
///   not fit the magnitude.
/// - [`OverflowCause::FirstSegmentExceedsWidth`] when `width` is given and the
///   first segment needs more digits.
pub fn check(decomposed: &Decomposed, width: Option<usize>) -> Result<(), OverflowCause> {
    let capacity = precision_capacity(decomposed.magnitude_seconds())
        .ok_or(OverflowCause::PrecisionExceedsCapacity)?;
    if let Precision::Digits(d) = decomposed.precision {
        if d > capacity {
            return Err(OverflowCause::PrecisionExceedsCapacity);
        }
    }

    if let Some(w) = width {
        if digit_count(decomposed.first) > w {
            return Err(OverflowCause::FirstSegmentExceedsWidth);
        }
    }
    Ok(())
}
