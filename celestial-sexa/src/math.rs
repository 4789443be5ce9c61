#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Positive modulo: the result is in [0, y) for y > 0.
///
/// `fmod` keeps the sign of the dividend, so negative inputs are shifted up by
/// one period. A result that rounds up to exactly `y` is folded back to zero.
#[inline]
pub fn pmod(x: f64, y: f64) -> f64 {
    let r = fmod(x, y);
    let r = if r < 0.0 { r + y } else { r };
    if r >= y {
        0.0
    } else {
        r
    }
}

/// Number of decimal digits needed to print `n`.
#[inline]
pub fn digit_count(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
