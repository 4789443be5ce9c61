//! Error types for sexagesimal formatting.
//!
//! This module provides a unified error type [`SexaError`] that covers the failure
//! modes of the formatter: malformed format specifiers, out-of-domain precision,
//! invalid sexagesimal components, and values that cannot be rendered as requested.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Depends on value? |
//! |---------|----------|-------------------|
//! | [`InvalidSpec`](SexaError::InvalidSpec) | Malformed `%[flags][width][.precision]verb` text | No |
//! | [`InvalidPrecision`](SexaError::InvalidPrecision) | Precision outside {0..=15, 62, 64} | No |
//! | [`InvalidWidth`](SexaError::InvalidWidth) | First-segment width above 20 | No |
//! | [`InvalidComponent`](SexaError::InvalidComponent) | Degrees/minutes/seconds constructor input | Yes |
//! | [`Overflow`](SexaError::Overflow) | Non-finite value, precision or width too small | Yes |
//!
//! The first three are configuration errors and are detected before any numeric
//! work. Overflow errors are tied to one value and one request; nothing here is
//! fatal and none of it is worth retrying.
//!
//! # Usage
//!
//! ```
//! use celestial_sexa::{OverflowCause, SexaError};
//!
//! let err = SexaError::Overflow(OverflowCause::NonFinite);
//! assert!(err.is_overflow());
//! assert_eq!(err.to_string(), "value overflows format: value is NaN or infinite");
//! ```

use thiserror::Error;

/// Why a value could not be rendered under a given format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowCause {
    /// Input is NaN or ±infinity.
    NonFinite,
    /// More fractional digits were requested than the magnitude can carry exactly.
    PrecisionExceedsCapacity,
    /// The first segment needs more digits than the explicit width allows.
    FirstSegmentExceedsWidth,
}

impl core::fmt::Display for OverflowCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::NonFinite => "value is NaN or infinite",
            Self::PrecisionExceedsCapacity => "precision exceeds capacity for magnitude",
            Self::FirstSegmentExceedsWidth => "first segment exceeds width",
        };
        f.write_str(msg)
    }
}

/// Unified error type for sexagesimal construction and formatting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SexaError {
    /// Format specifier text does not follow `%[flags][width][.precision]verb`.
    #[error("Invalid format specifier {spec:?}: {message}")]
    InvalidSpec { spec: String, message: String },

    /// Precision is neither a digit count in [0, 15] nor one of the sentinels 62, 64.
    #[error("Invalid precision {0}: expected 0..=15, 62 or 64")]
    InvalidPrecision(i64),

    /// First-segment width beyond [`FormatSpec::MAX_WIDTH`](crate::FormatSpec::MAX_WIDTH).
    #[error("Invalid width {0}: expected at most 20 digits")]
    InvalidWidth(usize),

    /// A sexagesimal component passed to a constructor is out of range.
    #[error("Invalid {component}: {message}")]
    InvalidComponent {
        component: &'static str,
        message: String,
    },

    /// The value cannot be represented under the requested format.
    #[error("value overflows format: {0}")]
    Overflow(OverflowCause),
}

/// Convenience alias for `Result<T, SexaError>`.
pub type SexaResult<T> = Result<T, SexaError>;

impl SexaError {
    /// Creates an [`InvalidSpec`](Self::InvalidSpec) error.
    pub fn invalid_spec(spec: &str, reason: &str) -> Self {
        Self::InvalidSpec {
            spec: spec.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidComponent`](Self::InvalidComponent) error.
    pub fn invalid_component(component: &'static str, reason: &str) -> Self {
        Self::InvalidComponent {
            component,
            message: reason.to_string(),
        }
    }

    /// Returns `true` for errors raised before the value was looked at.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpec { .. } | Self::InvalidPrecision(_) | Self::InvalidWidth(_)
        )
    }

    /// Returns `true` if the value itself could not be represented.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// The overflow cause, if this is an overflow.
    pub fn overflow_cause(&self) -> Option<OverflowCause> {
        match self {
            Self::Overflow(cause) => Some(*cause),
            _ => None,
        }
    }
}

impl From<OverflowCause> for SexaError {
    fn from(cause: OverflowCause) -> Self {
        Self::Overflow(cause)
    }
}

/// A failed render: the structured error plus the asterisk placeholder that
/// stands in for the text.
///
/// The placeholder is exactly as long, in characters, as a successful rendering
/// under the same format would have been.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{error} (rendered as {placeholder})")]
pub struct RenderError {
    #[source]
    pub error: SexaError,
    pub placeholder: String,
}

impl RenderError {
    pub fn new(error: SexaError, width: usize) -> Self {
        Self {
            error,
            placeholder: "*".repeat(width),
        }
    }

    /// Consumes the error, keeping only the placeholder text.
    pub fn into_placeholder(self) -> String {
        self.placeholder
    }
}
