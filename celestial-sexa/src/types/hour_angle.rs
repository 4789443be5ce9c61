use super::{components_to_seconds, Angle, RightAscension, Sexagesimal};
use crate::constants::RAD_TO_TIME_SECONDS;
use crate::errors::SexaResult;
use crate::unit::UnitKind;

/// An hour angle in radians, printed as signed hours, minutes and seconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct HourAngle {
    rad: f64,
}

impl HourAngle {
    pub const ZERO: Self = Self { rad: 0.0 };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// 1h = 15°.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * 15.0).to_radians(),
        }
    }

    /// Creates an hour angle from hours, minutes and seconds of time.
    ///
    /// # Errors
    ///
    /// [`SexaError::InvalidComponent`](crate::SexaError::InvalidComponent) if
    /// `h` is negative or non-finite, or `m` or `s` is outside [0, 60).
    pub fn from_hms(negative: bool, h: f64, m: f64, s: f64) -> SexaResult<Self> {
        let seconds = components_to_seconds(negative, ("hours", h), m, s)?;
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

impl Sexagesimal for HourAngle {
    const KIND: UnitKind = UnitKind::HourAngle;

    #[inline]
    fn raw(&self) -> f64 {
        self.rad
    }
}

impl From<Angle> for HourAngle {
    fn from(a: Angle) -> Self {
        Self::from_radians(a.radians())
    }
}

impl From<RightAscension> for HourAngle {
    fn from(ra: RightAscension) -> Self {
        Self::from_radians(ra.radians())
    }
}
