//! Quantities that print in sexagesimal.
//!
//! Four thin wrappers over `f64`, one per [`UnitKind`]:
//!
//! | Type | Stored as | Prints as |
//! |------|-----------|-----------|
//! | [`Angle`] | radians | `12°34′56″` |
//! | [`HourAngle`] | radians | `-1ʰ2ᵐ3ˢ` |
//! | [`RightAscension`] | radians in [0, 2π) | `21ʰ4ᵐ41ˢ` (never signed) |
//! | [`Time`] | seconds | `27ʰ0ᵐ0ˢ` (no 24h wrap) |
//!
//! Each type can be built from its raw unit or from validated components, and
//! implements [`Display`](core::fmt::Display) by mapping Rust's own format flags
//! onto a [`FormatSpec`]: `+` is the plus flag, `#` forces three segments, `0`
//! zero-pads, the width is the first segment's digit count, and the precision
//! is the seconds decimals (or 62 / 64). Use [`Sexagesimal::with_verb`] for the
//! other verbs.
//!
//! ```
//! use celestial_sexa::{Angle, RightAscension, Sexagesimal, Verb};
//!
//! let dec = Angle::from_dms(true, 18.0, 53.0, 16.84).unwrap();
//! assert_eq!(format!("{dec:.2}"), "-18°53′16.84″");
//!
//! let ra = RightAscension::from_hms(21.0, 4.0, 41.454).unwrap();
//! assert_eq!(format!("{:.3}", ra.with_verb(Verb::SymbolBeforePoint)), "21ʰ4ᵐ41ˢ.454");
//! ```

mod angle;
mod display;
mod hour_angle;
mod right_ascension;
#[cfg(feature = "serde")]
mod serde_;
mod time;

pub use angle::Angle;
pub use display::VerbDisplay;
pub use hour_angle::HourAngle;
pub use right_ascension::RightAscension;
pub use time::Time;

use crate::errors::{RenderError, SexaError, SexaResult};
use crate::format::{FormatSpec, SexaFormatter, Verb};
use crate::unit::UnitKind;

/// A value with a unit kind, renderable through a [`SexaFormatter`].
pub trait Sexagesimal: Copy {
    const KIND: UnitKind;

    /// The underlying value: radians, or seconds for [`Time`].
    fn raw(&self) -> f64;

    /// Renders with the default symbol set.
    fn render(&self, spec: &FormatSpec) -> Result<String, RenderError> {
        SexaFormatter::default().render(self.raw(), Self::KIND, spec)
    }

    fn render_with(
        &self,
        formatter: &SexaFormatter,
        spec: &FormatSpec,
    ) -> Result<String, RenderError> {
        formatter.render(self.raw(), Self::KIND, spec)
    }

    /// A [`Display`](core::fmt::Display) adapter using `verb` instead of the standard one.
    fn with_verb(self, verb: Verb) -> VerbDisplay<Self> {
        VerbDisplay::new(self, verb)
    }
}

/// Combines sexagesimal components into signed seconds of the segment system.
///
/// `first` must be finite and non-negative; `minutes` and `seconds` must be in
/// [0, 60). The sign lives only in `negative`.
pub(crate) fn components_to_seconds(
    negative: bool,
    first: (&'static str, f64),
    minutes: f64,
    seconds: f64,
) -> SexaResult<f64> {
    let (first_name, first) = first;
    if !first.is_finite() || first < 0.0 {
        return Err(SexaError::invalid_component(
            first_name,
            "must be finite and non-negative (sign is given separately)",
        ));
    }
    if !(0.0..60.0).contains(&minutes) {
        return Err(SexaError::invalid_component(
            "minutes",
            "must be in range [0, 60)",
        ));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(SexaError::invalid_component(
            "seconds",
            "must be in range [0, 60)",
        ));
    }
    let total = first * 3600.0 + minutes * 60.0 + seconds;
    Ok(if negative { -total } else { total })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_to_seconds() {
        assert_eq!(
            components_to_seconds(false, ("hours", 1.0), 2.0, 3.5).unwrap(),
            3723.5
        );
        assert_eq!(
            components_to_seconds(true, ("degrees", 0.0), 30.0, 0.0).unwrap(),
            -1800.0
        );
    }

    #[test]
    fn test_components_reject_out_of_range() {
        let err = components_to_seconds(false, ("degrees", 1.0), 60.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid minutes: must be in range [0, 60)");
        assert!(components_to_seconds(false, ("degrees", 1.0), 0.0, 60.0).is_err());
        assert!(components_to_seconds(false, ("degrees", 1.0), -1.0, 0.0).is_err());
        assert!(components_to_seconds(false, ("degrees", 1.0), 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_components_reject_signed_first_segment() {
        let err = components_to_seconds(false, ("degrees", -1.0), 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            SexaError::InvalidComponent {
                component: "degrees",
                ..
            }
        ));
        assert!(components_to_seconds(false, ("hours", f64::INFINITY), 0.0, 0.0).is_err());
    }
}
