//! `Display` for the sexagesimal types.

use super::{Angle, HourAngle, RightAscension, Sexagesimal, Time};
use crate::format::{FormatSpec, SexaFormatter, Verb};
use crate::unit::UnitKind;
use core::fmt;

/// Displays a value with a chosen [`Verb`], taking flags, width and precision
/// from the Rust format string.
///
/// ```
/// use celestial_sexa::{Angle, Sexagesimal, Verb};
///
/// let a = Angle::from_dms(false, 0.0, 0.0, 1.23).unwrap();
/// assert_eq!(format!("{:.2}", a.with_verb(Verb::DigitsOnly)), "123");
/// assert_eq!(format!("{:#.2}", a.with_verb(Verb::SymbolBeforePoint)), "0°0′1″.23");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VerbDisplay<T> {
    value: T,
    verb: Verb,
}

impl<T: Sexagesimal> VerbDisplay<T> {
    pub fn new(value: T, verb: Verb) -> Self {
        Self { value, verb }
    }
}

impl<T: Sexagesimal> fmt::Display for VerbDisplay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sexa(f, self.value.raw(), T::KIND, self.verb)
    }
}

/// Writes the rendering, or the placeholder when the value or the format
/// string's width or precision cannot be honored. Never returns an error of its own.
fn write_sexa(f: &mut fmt::Formatter<'_>, value: f64, unit: UnitKind, verb: Verb) -> fmt::Result {
    let formatter = SexaFormatter::default();
    let text = match FormatSpec::from_formatter(f, verb) {
        Ok(spec) => formatter.render_lossy(value, unit, &spec),
        Err(error) => {
            log::trace!("unusable width {:?} or precision {:?}: {error}", f.width(), f.precision());
            formatter.config_error(error, unit).into_placeholder()
        }
    };
    f.write_str(&text)
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_sexa(f, self.raw(), <$ty as Sexagesimal>::KIND, Verb::Standard)
                }
            }
        )*
    };
}

impl_display!(Angle, HourAngle, RightAscension, Time);
