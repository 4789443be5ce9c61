//! Unit-type tags for sexagesimal quantities.
//!
//! | Kind | Underlying unit | First segment | Signed | Period |
//! |------|-----------------|---------------|--------|--------|
//! | [`Angle`](UnitKind::Angle) | radians | degrees | yes | 360° |
//! | [`HourAngle`](UnitKind::HourAngle) | radians | hours | yes | 24h |
//! | [`RightAscension`](UnitKind::RightAscension) | radians | hours | no | 24h |
//! | [`Time`](UnitKind::Time) | seconds | hours | yes | none |

use crate::constants::{
    DEGREES_PER_CIRCLE, HOURS_PER_DAY, RAD_TO_ARCSEC, RAD_TO_TIME_SECONDS,
};

/// Which kind of quantity a raw `f64` holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Angle,
    HourAngle,
    RightAscension,
    Time,
}

impl UnitKind {
    /// Whether sign flags apply. Right ascension is always rendered unsigned.
    #[inline]
    pub fn is_signed(self) -> bool {
        !matches!(self, Self::RightAscension)
    }

    /// Whether the first segment is hours (and the hour symbol triple applies).
    #[inline]
    pub fn uses_hours(self) -> bool {
        !matches!(self, Self::Angle)
    }

    /// Factor taking the raw value to seconds of the segment system:
    /// arcseconds for angles, seconds of time for everything else.
    #[inline]
    pub fn seconds_per_raw(self) -> f64 {
        match self {
            Self::Angle => RAD_TO_ARCSEC,
            Self::HourAngle | Self::RightAscension => RAD_TO_TIME_SECONDS,
            Self::Time => 1.0,
        }
    }

    /// Period of the first segment, if the kind wraps.
    #[inline]
    pub fn first_segment_period(self) -> Option<u64> {
        match self {
            Self::Angle => Some(DEGREES_PER_CIRCLE),
            Self::HourAngle | Self::RightAscension => Some(HOURS_PER_DAY),
            Self::Time => None,
        }
    }

    /// Digits the first segment occupies in a layout without explicit width.
    #[inline]
    pub fn natural_first_digits(self) -> usize {
        match self {
            Self::Angle => 3,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_right_ascension_is_unsigned() {
        assert!(UnitKind::Angle.is_signed());
        assert!(UnitKind::HourAngle.is_signed());
        assert!(UnitKind::Time.is_signed());
        assert!(!UnitKind::RightAscension.is_signed());
    }

    #[test]
    fn test_periods() {
        assert_eq!(UnitKind::Angle.first_segment_period(), Some(360));
        assert_eq!(UnitKind::RightAscension.first_segment_period(), Some(24));
        assert_eq!(UnitKind::Time.first_segment_period(), None);
    }

    #[test]
    fn test_full_circle_in_segment_seconds() {
        let circle = 2.0 * crate::constants::PI;
        let arcsec = circle * UnitKind::Angle.seconds_per_raw();
        assert!((arcsec - 1_296_000.0).abs() < 1e-6);
        let secs = circle * UnitKind::HourAngle.seconds_per_raw();
        assert!((secs - 86_400.0).abs() < 1e-7);
    }
}
