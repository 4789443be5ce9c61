//! Unit symbols placed on the decimal point.
//!
//! A convention in astronomical tables puts the unit symbol directly above the
//! decimal point, as in 16″̣84. Unicode can approximate it by replacing the
//! point with the symbol followed by U+0323 COMBINING DOT BELOW
//! ([`dec_sym_combine`]). Where that renders badly, [`dec_sym_add`] just puts
//! the symbol in front of the point. [`dec_sym_strip`] undoes either one.
//!
//! ```
//! use celestial_sexa::format::{dec_sym_add, dec_sym_combine, dec_sym_strip};
//!
//! assert_eq!(dec_sym_add("16.84", '″'), "16″.84");
//! assert_eq!(dec_sym_combine("16.84", '″'), "16″\u{323}84");
//! assert_eq!(dec_sym_strip("16″.84", '″'), "16.84");
//! ```

use crate::constants::COMBINING_DOT_BELOW;

/// Inserts `unit` immediately before the decimal point of `numeral`.
///
/// Without a point, `unit` is appended.
pub fn dec_sym_add(numeral: &str, unit: char) -> String {
    let mut out = String::with_capacity(numeral.len() + unit.len_utf8());
    match numeral.find('.') {
        Some(i) => {
            out.push_str(&numeral[..i]);
            out.push(unit);
            out.push_str(&numeral[i..]);
        }
        None => {
            out.push_str(numeral);
            out.push(unit);
        }
    }
    out
}

/// Replaces the decimal point of `numeral` with `unit` and a combining dot below.
///
/// Without a point, `unit` is appended.
pub fn dec_sym_combine(numeral: &str, unit: char) -> String {
    let mut out = String::with_capacity(numeral.len() + unit.len_utf8() + 2);
    match numeral.find('.') {
        Some(i) => {
            out.push_str(&numeral[..i]);
            out.push(unit);
            out.push(COMBINING_DOT_BELOW);
            out.push_str(&numeral[i + 1..]);
        }
        None => {
            out.push_str(numeral);
            out.push(unit);
        }
    }
    out
}

/// Removes a `unit` placed by [`dec_sym_add`] or [`dec_sym_combine`].
///
/// The first occurrence of `unit` that is followed by `.`, by the combining dot
/// or by nothing is removed, and a combining dot becomes a plain point again.
/// Occurrences of `unit` elsewhere are kept, so a full sexagesimal string such
/// as `1°30′45″.67` strips to `1°30′45.67`. Text without such an occurrence
/// comes back unchanged.
pub fn dec_sym_strip(text: &str, unit: char) -> String {
    for (i, c) in text.char_indices().filter(|&(_, c)| c == unit) {
        let rest = &text[i + c.len_utf8()..];
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..i]);
        if let Some(after) = rest.strip_prefix(COMBINING_DOT_BELOW) {
            out.push('.');
            out.push_str(after);
            return out;
        }
        if rest.is_empty() || rest.starts_with('.') {
            out.push_str(rest);
            return out;
        }
    }
    text.to_string()
}
