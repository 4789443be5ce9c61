//! The sexagesimal formatter.
//!
//! [`SexaFormatter::render`] runs one value through the pipeline
//!
//! ```text
//! spec ─▶ decompose ─▶ overflow check ─▶ segments ─▶ assembled text
//!   │          │              │
//!   └──────────┴──────────────┴─▶ RenderError { error, placeholder }
//! ```
//!
//! On failure the text is a run of `*` as long as the successful rendering
//! under the same spec would have been, so columns of fixed-width output stay
//! aligned.
//!
//! # Example
//!
//! ```
//! use celestial_sexa::{SexaFormatter, UnitKind};
//!
//! let fmt = SexaFormatter::default();
//! // 1.23 arcseconds
//! let v = 1.23 / 206264.80624709636;
//!
//! assert_eq!(fmt.render_str(v, UnitKind::Angle, "%.2s").unwrap(), "1.23″");
//! assert_eq!(fmt.render_str(v, UnitKind::Angle, "%.2d").unwrap(), "1″.23");
//! assert_eq!(fmt.render_str(v, UnitKind::Angle, "%.2x").unwrap(), "123");
//! assert_eq!(fmt.render_str(v, UnitKind::Angle, "%#.2d").unwrap(), "0°0′1″.23");
//!
//! let err = fmt.render_str(f64::NAN, UnitKind::Angle, "%.2s").unwrap_err();
//! assert_eq!(err.placeholder, "*************");
//! ```

use super::decompose::{decompose, Decomposed, Sign};
use super::decsym::{dec_sym_add, dec_sym_combine};
use super::overflow::check;
use super::spec::{FormatSpec, Precision, Verb};
use crate::errors::{RenderError, SexaError};
use crate::symbols::SymbolSet;
use crate::unit::UnitKind;

/// Formats raw values as sexagesimal text with a fixed symbol set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SexaFormatter {
    symbols: SymbolSet,
}

impl SexaFormatter {
    pub const fn new(symbols: SymbolSet) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Renders `value` (radians, or seconds for [`UnitKind::Time`]).
    ///
    /// # Errors
    ///
    /// [`RenderError`] holding [`SexaError::Overflow`] and the placeholder when
    /// the value is non-finite or does not fit the precision or width.
    pub fn render(
        &self,
        value: f64,
        unit: UnitKind,
        spec: &FormatSpec,
    ) -> Result<String, RenderError> {
        spec.validate().map_err(|error| {
            log::trace!("rejected format specifier {spec:?}: {error}");
            self.config_error(error, unit)
        })?;
        let decomposed = decompose(value, unit, spec.precision)
            .and_then(|d| check(&d, spec.width).map(|()| d))
            .map_err(|cause| {
                log::debug!("sexagesimal overflow for {value} as {unit:?} with {spec}: {cause}");
                RenderError::new(cause.into(), self.layout_len(unit, spec))
            })?;
        Ok(self.assemble(&decomposed, unit, spec))
    }

    /// Parses `spec` and renders `value` with it.
    ///
    /// # Errors
    ///
    /// As [`render`](Self::render), plus configuration errors from parsing. A
    /// spec that does not parse gets the placeholder of the default layout.
    pub fn render_str(&self, value: f64, unit: UnitKind, spec: &str) -> Result<String, RenderError> {
        let parsed = spec.parse::<FormatSpec>().map_err(|error| {
            log::trace!("rejected format specifier {spec:?}: {error}");
            self.config_error(error, unit)
        })?;
        self.render(value, unit, &parsed)
    }

    /// Like [`render`](Self::render), returning the placeholder on failure.
    pub fn render_lossy(&self, value: f64, unit: UnitKind, spec: &FormatSpec) -> String {
        self.render(value, unit, spec)
            .unwrap_or_else(RenderError::into_placeholder)
    }

    pub(crate) fn config_error(&self, error: SexaError, unit: UnitKind) -> RenderError {
        RenderError::new(error, self.layout_len(unit, &FormatSpec::default()))
    }

    /// Character count of a successful rendering's layout, independent of the value.
    ///
    /// This is the full-width layout: every segment present, two digits for
    /// minutes and seconds, and a sign slot only when a sign flag reserves one.
    pub fn layout_len(&self, unit: UnitKind, spec: &FormatSpec) -> usize {
        let sign = usize::from(unit.is_signed() && spec.flags.reserves_sign());
        let first = spec.width.unwrap_or(unit.natural_first_digits());
        let symbol = usize::from(spec.verb.shows_symbols());

        // Two digits for each segment after the first, one symbol per segment.
        let count = spec.precision.segment_count();
        let segments = first
            .saturating_add(2 * (count - 1))
            .saturating_add(count * symbol);
        let frac = match spec.precision.frac_digits() as usize {
            0 => 0,
            p => match spec.verb {
                Verb::DigitsOnly => p,
                // The point, or the combining dot standing in for it.
                _ => p + 1,
            },
        };
        segments.saturating_add(sign).saturating_add(frac)
    }

    fn assemble(&self, d: &Decomposed, unit: UnitKind, spec: &FormatSpec) -> String {
        let [s1, s2, s3] = *self.symbols.for_unit(unit);
        let flags = &spec.flags;
        let mut out = String::new();

        match d.sign {
            Sign::Negative => out.push('-'),
            Sign::Positive if flags.plus => out.push('+'),
            Sign::Positive if flags.space => out.push(' '),
            _ => {}
        }

        // Leading zero segments are dropped unless the layout is pinned by `#`
        // or an explicit width.
        let elide = !flags.alternate && spec.width.is_none();
        let show_first = !elide || d.first != 0 || !d.shows_minutes();
        let show_minutes =
            d.shows_minutes() && (show_first || d.minutes != 0 || !d.shows_seconds());

        if show_first {
            let first = match spec.width {
                Some(w) if flags.zero => format!("{:0w$}", d.first),
                Some(w) => format!("{:w$}", d.first),
                None => d.first.to_string(),
            };
            push_segment(&mut out, &first, s1, spec.verb);
        }
        if show_minutes {
            let minutes = pad2(d.minutes as u64, flags.zero);
            push_segment(&mut out, &minutes, s2, spec.verb);
        }
        if d.shows_seconds() {
            let mut seconds = pad2(d.whole_seconds(), flags.zero);
            let digits = d.precision.frac_digits() as usize;
            if digits > 0 {
                seconds.push_str(&format!(".{:0digits$}", d.frac_seconds()));
            }
            push_segment(&mut out, &seconds, s3, spec.verb);
        }
        out
    }
}

fn pad2(n: u64, zero: bool) -> String {
    if zero {
        format!("{n:02}")
    } else {
        n.to_string()
    }
}

/// Appends a numeral and its unit symbol, placing the symbol per the verb.
fn push_segment(out: &mut String, numeral: &str, unit: char, verb: Verb) {
    match verb {
        Verb::Standard | Verb::Default => {
            out.push_str(numeral);
            out.push(unit);
        }
        Verb::SymbolBeforePoint => out.push_str(&dec_sym_add(numeral, unit)),
        Verb::Combining => out.push_str(&dec_sym_combine(numeral, unit)),
        Verb::DigitsOnly => out.extend(numeral.chars().filter(|&c| c != '.')),
    }
}
