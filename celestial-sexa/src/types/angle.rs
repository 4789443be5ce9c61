use super::{components_to_seconds, HourAngle, RightAscension, Sexagesimal};
use crate::constants::RAD_TO_ARCSEC;
use crate::errors::SexaResult;
use crate::unit::UnitKind;

/// An angle in radians, printed as degrees, arcminutes and arcseconds.
///
/// Formatting normalizes the magnitude into one turn and keeps the sign, so
/// declinations and latitudes print as `-18°53′16″` and 370° prints as 10°.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from degrees, arcminutes and arcseconds.
    ///
    /// # Errors
    ///
    /// [`SexaError::InvalidComponent`](crate::SexaError::InvalidComponent) if
    /// `d` is negative or non-finite, or `m` or `s` is outside [0, 60).
    ///
    /// ```
    /// use celestial_sexa::Angle;
    ///
    /// let a = Angle::from_dms(true, 23.0, 26.0, 21.0).unwrap();
    /// assert!((a.degrees() + 23.439166666666667).abs() < 1e-12);
    /// assert!(Angle::from_dms(false, 10.0, 75.0, 0.0).is_err());
    /// ```
    pub fn from_dms(negative: bool, d: f64, m: f64, s: f64) -> SexaResult<Self> {
        let arcsec = components_to_seconds(negative, ("degrees", d), m, s)?;
        Ok(Self::from_radians(arcsec / RAD_TO_ARCSEC))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.rad * RAD_TO_ARCSEC
    }
}

impl Sexagesimal for Angle {
    const KIND: UnitKind = UnitKind::Angle;

    #[inline]
    fn raw(&self) -> f64 {
        self.rad
    }
}

impl From<HourAngle> for Angle {
    fn from(h: HourAngle) -> Self {
        Self::from_radians(h.radians())
    }
}

impl From<RightAscension> for Angle {
    fn from(ra: RightAscension) -> Self {
        Self::from_radians(ra.radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatSpec;

    #[test]
    fn test_from_dms_matches_degrees() {
        let a = Angle::from_dms(false, 1.0, 30.0, 45.0).unwrap();
        assert!((a.degrees() - 1.5125).abs() < 1e-12);
        assert!((a.arcseconds() - 5445.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_dms_negative_below_one_degree() {
        let a = Angle::from_dms(true, 0.0, 30.0, 0.0).unwrap();
        assert!((a.degrees() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_dms_rejects_out_of_range() {
        assert!(Angle::from_dms(false, 1.0, 60.0, 0.0).is_err());
        assert!(Angle::from_dms(false, 1.0, 0.0, 60.0).is_err());
        assert!(Angle::from_dms(false, -1.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_render_sentinels() {
        let a = Angle::from_dms(false, 1.0, 30.0, 45.0).unwrap();
        let minutes: FormatSpec = "%.62s".parse().unwrap();
        let units: FormatSpec = "%.64s".parse().unwrap();
        assert_eq!(a.render(&minutes).unwrap(), "1°31′");
        assert_eq!(a.render(&units).unwrap(), "2°");
    }

    #[test]
    fn test_from_hour_angle() {
        let a = Angle::from(HourAngle::from_hours(6.0));
        assert!((a.degrees() - 90.0).abs() < 1e-12);
    }
}
