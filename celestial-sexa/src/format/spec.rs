//! Format specifiers for sexagesimal output.
//!
//! The textual grammar is
//!
//! ```text
//! %[flags][width][.precision]verb
//! ```
//!
//! | Verb | Meaning | 1.23″ at precision 2 |
//! |------|---------|----------------------|
//! | `s` | standard | `1.23″` |
//! | `d` | unit symbol before the decimal point | `1″.23` |
//! | `c` | unit symbol with combining dot replacing the point | `1″̣23` |
//! | `x` | digits only, no symbols and no point | `123` |
//! | `v` | same as `s` | `1.23″` |
//!
//! | Flag | Meaning |
//! |------|---------|
//! | `+` | always print a sign (wins over space) |
//! | ` ` | leave a space where a `+` would go |
//! | `#` | always print all three segments, even when zero |
//! | `0` | zero-pad minutes and seconds, and the first segment up to the width |
//!
//! Width is the minimum digit count of the first segment (degrees or hours),
//! not of the whole string. Precision is the number of decimals on the seconds,
//! 0 to 15, or one of two sentinels: 62 rounds to whole minutes and drops the
//! seconds, 64 rounds to whole degrees or hours and drops minutes and seconds.
//!
//! For fixed-width output combine a sign flag, the `0` flag and a width.
//!
//! ```
//! use celestial_sexa::format::{FormatSpec, Precision, Verb};
//!
//! let spec: FormatSpec = "%+03.2d".parse().unwrap();
//! assert_eq!(spec.verb, Verb::SymbolBeforePoint);
//! assert!(spec.flags.plus && spec.flags.zero);
//! assert_eq!(spec.width, Some(3));
//! assert_eq!(spec.precision, Precision::Digits(2));
//! assert_eq!(spec.to_string(), "%+03.2d");
//! ```

use crate::errors::{SexaError, SexaResult};
use core::fmt;
use core::str::FromStr;

/// How the last segment's decimal point and the unit symbols are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Verb {
    /// `s`: `45.67″`
    #[default]
    Standard,
    /// `d`: `45″.67`
    SymbolBeforePoint,
    /// `c`: `45″̣67`
    Combining,
    /// `x`: `4567`
    DigitsOnly,
    /// `v`: rendered like [`Standard`](Self::Standard).
    Default,
}

impl Verb {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Standard),
            'd' => Some(Self::SymbolBeforePoint),
            'c' => Some(Self::Combining),
            'x' => Some(Self::DigitsOnly),
            'v' => Some(Self::Default),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Standard => 's',
            Self::SymbolBeforePoint => 'd',
            Self::Combining => 'c',
            Self::DigitsOnly => 'x',
            Self::Default => 'v',
        }
    }

    /// Whether unit symbols are printed at all.
    #[inline]
    pub fn shows_symbols(self) -> bool {
        !matches!(self, Self::DigitsOnly)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Flags {
    /// `+`
    pub plus: bool,
    /// ` `
    pub space: bool,
    /// `#`: force all three segments.
    pub alternate: bool,
    /// `0`
    pub zero: bool,
}

impl Flags {
    /// Whether a sign slot is reserved for non-negative values.
    #[inline]
    pub fn reserves_sign(&self) -> bool {
        self.plus || self.space
    }
}

/// Rounding granularity of the last printed segment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Decimal places on the seconds segment, 0 to 15.
    Digits(u8),
    /// Round to whole minutes; seconds are not printed (raw value 62).
    Minutes,
    /// Round to whole degrees or hours; only the first segment is printed (raw value 64).
    Units,
}

impl Precision {
    pub const MAX_DIGITS: u8 = 15;
    pub const MINUTES_SENTINEL: i64 = 62;
    pub const UNITS_SENTINEL: i64 = 64;

    /// Validates a raw precision value.
    ///
    /// # Errors
    ///
    /// [`SexaError::InvalidPrecision`] for anything outside {0..=15, 62, 64}.
    pub fn from_raw(raw: i64) -> SexaResult<Self> {
        match raw {
            d if (0..=i64::from(Self::MAX_DIGITS)).contains(&d) => Ok(Self::Digits(d as u8)),
            Self::MINUTES_SENTINEL => Ok(Self::Minutes),
            Self::UNITS_SENTINEL => Ok(Self::Units),
            _ => Err(SexaError::InvalidPrecision(raw)),
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            Self::Digits(d) => d as i64,
            Self::Minutes => Self::MINUTES_SENTINEL,
            Self::Units => Self::UNITS_SENTINEL,
        }
    }

    /// Fractional digit count on the seconds, zero for the sentinels.
    #[inline]
    pub fn frac_digits(self) -> u8 {
        match self {
            Self::Digits(d) => d,
            _ => 0,
        }
    }

    /// Number of printed segments: 3, 2 or 1.
    #[inline]
    pub fn segment_count(self) -> usize {
        match self {
            Self::Digits(_) => 3,
            Self::Minutes => 2,
            Self::Units => 1,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::Digits(0)
    }
}

/// A validated format specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct FormatSpec {
    pub verb: Verb,
    pub flags: Flags,
    /// Minimum digits of the first segment.
    pub width: Option<usize>,
    pub precision: Precision,
}

impl FormatSpec {
    /// Largest accepted first-segment width. A `u64` has at most 20 digits.
    pub const MAX_WIDTH: usize = 20;

    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the first-segment width. Zero clears it.
    ///
    /// # Errors
    ///
    /// [`SexaError::InvalidWidth`] above [`MAX_WIDTH`](Self::MAX_WIDTH).
    pub fn with_width(mut self, width: usize) -> SexaResult<Self> {
        if width > Self::MAX_WIDTH {
            return Err(SexaError::InvalidWidth(width));
        }
        self.width = (width > 0).then_some(width);
        Ok(self)
    }

    /// Checks the fields that can be set directly.
    ///
    /// # Errors
    ///
    /// [`SexaError::InvalidWidth`] for a width above [`MAX_WIDTH`](Self::MAX_WIDTH).
    pub fn validate(&self) -> SexaResult<()> {
        match self.width {
            Some(w) if w > Self::MAX_WIDTH => Err(SexaError::InvalidWidth(w)),
            _ => Ok(()),
        }
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Builds a spec from the flags, width and precision of a Rust formatter.
    ///
    /// `{:+#03.2}` maps to plus, alternate, zero, width 3 and precision 2. Rust
    /// has no space flag. A precision outside the permitted domain is an error.
    pub fn from_formatter(f: &fmt::Formatter<'_>, verb: Verb) -> SexaResult<Self> {
        let precision = match f.precision() {
            Some(p) => Precision::from_raw(i64::try_from(p).unwrap_or(i64::MAX))?,
            None => Precision::default(),
        };
        let flags = Flags {
            plus: f.sign_plus(),
            space: false,
            alternate: f.alternate(),
            zero: f.sign_aware_zero_pad(),
        };
        Ok(Self::new(verb)
            .with_flags(flags)
            .with_width(f.width().unwrap_or(0))?
            .with_precision(precision))
    }
}

impl FromStr for FormatSpec {
    type Err = SexaError;

    fn from_str(s: &str) -> SexaResult<Self> {
        let body = s
            .strip_prefix('%')
            .ok_or_else(|| SexaError::invalid_spec(s, "must start with '%'"))?;
        let mut chars = body.chars().peekable();

        let mut flags = Flags::default();
        while let Some(&c) = chars.peek() {
            match c {
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '#' => flags.alternate = true,
                '0' => flags.zero = true,
                _ => break,
            }
            chars.next();
        }

        let width = take_number(&mut chars, s, "width")?;

        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            let raw = take_number(&mut chars, s, "precision")?.unwrap_or(0);
            Precision::from_raw(i64::try_from(raw).unwrap_or(i64::MAX))?
        } else {
            Precision::default()
        };

        let verb_char = chars
            .next()
            .ok_or_else(|| SexaError::invalid_spec(s, "missing verb"))?;
        let verb = Verb::from_char(verb_char)
            .ok_or_else(|| SexaError::invalid_spec(s, &format!("unknown verb {verb_char:?}")))?;
        if let Some(extra) = chars.next() {
            return Err(SexaError::invalid_spec(
                s,
                &format!("unexpected {extra:?} after verb"),
            ));
        }

        Ok(Self::new(verb)
            .with_flags(flags)
            .with_width(width.unwrap_or(0))?
            .with_precision(precision))
    }
}

fn take_number(
    chars: &mut core::iter::Peekable<core::str::Chars<'_>>,
    spec: &str,
    what: &str,
) -> SexaResult<Option<usize>> {
    let mut value: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let next = value
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as usize))
            .ok_or_else(|| SexaError::invalid_spec(spec, &format!("{what} too large")))?;
        value = Some(next);
    }
    Ok(value)
}

impl fmt::Display for FormatSpec {
    /// Canonical textual form; parsing it back yields an equal spec.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if self.flags.plus {
            f.write_str("+")?;
        }
        if self.flags.space {
            f.write_str(" ")?;
        }
        if self.flags.alternate {
            f.write_str("#")?;
        }
        if self.flags.zero {
            f.write_str("0")?;
        }
        if let Some(w) = self.width {
            write!(f, "{w}")?;
        }
        write!(f, ".{}{}", self.precision.raw(), self.verb.as_char())
    }
}

#[cfg(feature = "serde")]
mod serde_ {
    use super::FormatSpec;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for FormatSpec {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for FormatSpec {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let text = String::deserialize(d)?;
            text.parse().map_err(serde::de::Error::custom)
        }
    }
}
