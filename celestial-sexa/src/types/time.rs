use super::{components_to_seconds, Sexagesimal};
use crate::constants::{SECONDS_PER_DAY_F64, SECONDS_PER_HOUR, TWOPI};
use crate::errors::SexaResult;
use crate::unit::UnitKind;

/// A duration in seconds, printed as hours, minutes and seconds.
///
/// Unlike the angular types there is no 24h wrap: 27 hours prints as 27ʰ.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Time {
    seconds: f64,
}

impl Time {
    pub const ZERO: Self = Self { seconds: 0.0 };

    #[inline]
    pub const fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    #[inline]
    pub fn from_days(days: f64) -> Self {
        Self::from_seconds(days * SECONDS_PER_DAY_F64)
    }

    /// Creates a time from hours, minutes and seconds.
    ///
    /// # Errors
    ///
    /// [`SexaError::InvalidComponent`](crate::SexaError::InvalidComponent) if
    /// `h` is negative or non-finite, or `m` or `s` is outside [0, 60).
    pub fn from_hms(negative: bool, h: f64, m: f64, s: f64) -> SexaResult<Self> {
        components_to_seconds(negative, ("hours", h), m, s).map(Self::from_seconds)
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.seconds / SECONDS_PER_HOUR
    }

    #[inline]
    pub fn days(self) -> f64 {
        self.seconds / SECONDS_PER_DAY_F64
    }

    /// The time as a fraction of a turn, one day being 2π.
    #[inline]
    pub fn radians(self) -> f64 {
        self.days() * TWOPI
    }
}

impl Sexagesimal for Time {
    const KIND: UnitKind = UnitKind::Time;

    #[inline]
    fn raw(&self) -> f64 {
        self.seconds
    }
}
