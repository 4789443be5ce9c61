//! Sexagesimal formatting for astronomical quantities.
//!
//! `celestial-sexa` turns angles, hour angles, right ascensions and times into
//! degree/hour, minute, second text under a printf-like format specifier, with
//! correct rounding carries and fixed-width overflow handling.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`format`] | Specifier grammar, segment decomposition, overflow policy, formatter, decimal-symbol transforms |
//! | [`types`] | [`Angle`], [`HourAngle`], [`RightAscension`], [`Time`] value types |
//! | [`unit`] | [`UnitKind`] tags |
//! | [`symbols`] | [`SymbolSet`] symbol tables |
//! | [`errors`] | [`SexaError`], [`RenderError`] and [`SexaResult`] |
//! | [`constants`] | Conversion factors |
//!
//! # Format specifiers
//!
//! `%[flags][width][.precision]verb`, with verbs `s d c x v`, flags `+ ' ' # 0`,
//! width counting first-segment digits and precision 0–15 or the sentinels 62
//! (whole minutes) and 64 (whole degrees/hours). See [`format::FormatSpec`].
//!
//! ```
//! use celestial_sexa::{Angle, SexaFormatter, Sexagesimal, UnitKind};
//!
//! let dec = Angle::from_dms(true, 18.0, 53.0, 16.84).unwrap();
//! assert_eq!(format!("{dec:.2}"), "-18°53′16.84″");
//!
//! let fmt = SexaFormatter::default();
//! let text = fmt.render_str(dec.raw(), UnitKind::Angle, "%+03.1d").unwrap();
//! assert_eq!(text, "-018°53′16″.8");
//! ```
//!
//! # Failure
//!
//! Rendering never panics. A value that cannot be shown (NaN, too many
//! decimals for its magnitude, too many digits for the width) or a bad
//! specifier yields a [`RenderError`] carrying the cause and a run of `*` of
//! the same length as a successful rendering would have had. `Display` impls
//! write that placeholder.
//!
//! # Design Notes
//!
//! - **No global state**: symbol tables are a [`SymbolSet`] bound into a
//!   [`SexaFormatter`]; everything else is computed per call.
//! - **Round once**: values are rounded to the final granularity before being
//!   split, so carries from seconds into minutes and degrees are exact.

pub mod constants;
pub mod errors;
pub mod format;
pub mod math;
pub mod symbols;
pub mod types;
pub mod unit;

pub use errors::{OverflowCause, RenderError, SexaError, SexaResult};
pub use format::{FormatSpec, Precision, SexaFormatter, Verb};
pub use symbols::SymbolSet;
pub use types::{Angle, HourAngle, RightAscension, Sexagesimal, Time, VerbDisplay};
pub use unit::UnitKind;
