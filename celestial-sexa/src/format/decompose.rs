//! Splitting a raw value into sign, first segment, minutes and seconds.
//!
//! The magnitude is converted to seconds of the segment system (arcseconds for
//! angles, seconds of time otherwise), rounded once to the requested
//! granularity, and then split with integer arithmetic. Doing the rounding
//! before the split means carries cannot be missed: 59.996″ at two places is a
//! tick count that divides evenly into the next minute.
//!
//! Periodic kinds are normalized into one period before rounding, and the first
//! segment is wrapped again after the split, so 359°59′59.999″ at two places
//! comes out as 0°0′0″.00.

use super::spec::Precision;
use crate::errors::OverflowCause;
use crate::math::{fmod, pmod};
use crate::unit::UnitKind;
use crate::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TWOPI};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
    /// Right ascension: no sign is ever printed.
    Unsigned,
}

/// A value split into sexagesimal segments at a fixed precision.
///
/// `minutes` is below 60 and `second_ticks` is below `60 · 10^digits`.
/// Under [`Precision::Minutes`] the seconds are zero, under [`Precision::Units`]
/// minutes and seconds are both zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decomposed {
    pub sign: Sign,
    pub first: u64,
    pub minutes: u8,
    /// Seconds in units of 10^-digits.
    pub second_ticks: u64,
    pub precision: Precision,
}

impl Decomposed {
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    pub fn shows_minutes(&self) -> bool {
        self.precision != Precision::Units
    }

    #[inline]
    pub fn shows_seconds(&self) -> bool {
        matches!(self.precision, Precision::Digits(_))
    }

    /// Whole seconds.
    #[inline]
    pub fn whole_seconds(&self) -> u64 {
        self.second_ticks / tick_scale(self.precision.frac_digits())
    }

    /// Fractional seconds as an integer of `digits` decimal places.
    #[inline]
    pub fn frac_seconds(&self) -> u64 {
        self.second_ticks % tick_scale(self.precision.frac_digits())
    }

    /// Seconds including the fraction.
    pub fn seconds(&self) -> f64 {
        self.second_ticks as f64 / tick_scale(self.precision.frac_digits()) as f64
    }

    /// Magnitude truncated to whole seconds of the segment system.
    pub fn magnitude_seconds(&self) -> u128 {
        (self.first as u128) * 3600 + (self.minutes as u128) * 60 + self.whole_seconds() as u128
    }
}

#[inline]
fn tick_scale(digits: u8) -> u64 {
    10u64.pow(digits as u32)
}

/// Decomposes `value` (radians, or seconds for [`UnitKind::Time`]).
///
/// # Errors
///
/// [`OverflowCause::NonFinite`] for NaN or ±infinity, before any arithmetic.
pub fn decompose(
    value: f64,
    unit: UnitKind,
    precision: Precision,
) -> Result<Decomposed, OverflowCause> {
    if !value.is_finite() {
        return Err(OverflowCause::NonFinite);
    }

    let sign = if !unit.is_signed() {
        Sign::Unsigned
    } else if value < 0.0 {
        Sign::Negative
    } else {
        Sign::Positive
    };

    let magnitude = match unit {
        UnitKind::RightAscension => pmod(value, TWOPI),
        UnitKind::Angle | UnitKind::HourAngle => fmod(value.abs(), TWOPI),
        UnitKind::Time => value.abs(),
    };
    let seconds = magnitude * unit.seconds_per_raw();

    // Ticks of the last printed segment, rounded half away from zero. The cast
    // saturates for magnitudes far beyond any exact rendering; the overflow
    // policy rejects those by their size.
    let (first, minutes, second_ticks) = match precision {
        Precision::Digits(d) => {
            let per_second = tick_scale(d) as u128;
            let ticks = libm::round(seconds * per_second as f64) as u128;
            let per_minute = per_second * 60;
            let per_unit = per_minute * 60;
            let rem = ticks % per_unit;
            (ticks / per_unit, rem / per_minute, rem % per_minute)
        }
        Precision::Minutes => {
            let ticks = libm::round(seconds / SECONDS_PER_MINUTE) as u128;
            (ticks / 60, ticks % 60, 0)
        }
        Precision::Units => (libm::round(seconds / SECONDS_PER_HOUR) as u128, 0, 0),
    };

    let mut first = u64::try_from(first).unwrap_or(u64::MAX);
    if let Some(period) = unit.first_segment_period() {
        first %= period;
    }

    Ok(Decomposed {
        sign,
        first,
        minutes: minutes as u8,
        second_ticks: second_ticks as u64,
        precision,
    })
}
