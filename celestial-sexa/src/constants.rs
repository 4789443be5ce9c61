#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

/// Radians to arcseconds (180/π·3600).
#[allow(clippy::excessive_precision)]
pub const RAD_TO_ARCSEC: f64 = 206264.8062470963551564734;

/// Radians to seconds of time (12/π·3600).
#[allow(clippy::excessive_precision)]
pub const RAD_TO_TIME_SECONDS: f64 = 13750.98708313975701043156;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const SECONDS_PER_MINUTE: f64 = 60.0;

pub const DEGREES_PER_CIRCLE: u64 = 360;

pub const HOURS_PER_DAY: u64 = 24;

/// U+0323 COMBINING DOT BELOW, drawn under the preceding unit symbol.
pub const COMBINING_DOT_BELOW: char = '\u{0323}';
