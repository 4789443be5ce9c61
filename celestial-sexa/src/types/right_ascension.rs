use super::{components_to_seconds, Angle, HourAngle, Sexagesimal};
use crate::constants::{RAD_TO_TIME_SECONDS, TWOPI};
use crate::errors::SexaResult;
use crate::math::pmod;
use crate::unit::UnitKind;

/// A right ascension, held in [0, 2π) and always printed unsigned.
///
/// Every constructor wraps into range, so -1.5h is stored and printed as
/// 22ʰ30ᵐ0ˢ.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct RightAscension {
    rad: f64,
}

impl RightAscension {
    pub const ZERO: Self = Self { rad: 0.0 };

    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        Self {
            rad: pmod(rad, TWOPI),
        }
    }

    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::from_radians((h * 15.0).to_radians())
    }

    /// Creates a right ascension from hours, minutes and seconds of time.
    ///
    /// # Errors
    ///
    /// [`SexaError::InvalidComponent`](crate::SexaError::InvalidComponent) if
    /// `h` is negative or non-finite, or `m` or `s` is outside [0, 60).
    pub fn from_hms(h: f64, m: f64, s: f64) -> SexaResult<Self> {
        let seconds = components_to_seconds(false, ("hours", h), m, s)?;
        Ok(Self::from_radians(seconds / RAD_TO_TIME_SECONDS))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.rad.to_degrees() / 15.0
    }
}

impl Sexagesimal for RightAscension {
    const KIND: UnitKind = UnitKind::RightAscension;

    #[inline]
    fn raw(&self) -> f64 {
        self.rad
    }
}

impl From<Angle> for RightAscension {
    fn from(a: Angle) -> Self {
        Self::from_radians(a.radians())
    }
}

impl From<HourAngle> for RightAscension {
    fn from(h: HourAngle) -> Self {
        Self::from_radians(h.radians())
    }
}
