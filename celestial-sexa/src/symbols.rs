//! Unit symbol tables.
//!
//! A [`SymbolSet`] holds two ordered triples: degree/minute/second symbols for
//! [`UnitKind::Angle`] and hour/minute/second symbols for the hour kinds. The set
//! is bound into a [`SexaFormatter`](crate::SexaFormatter) when it is built and
//! never changes afterwards.
//!
//! ```
//! use celestial_sexa::{SymbolSet, UnitKind};
//!
//! let symbols = SymbolSet::DEFAULT;
//! assert_eq!(symbols.for_unit(UnitKind::Angle), &['°', '′', '″']);
//! assert_eq!(symbols.for_unit(UnitKind::Time), &['ʰ', 'ᵐ', 'ˢ']);
//! ```

use crate::unit::UnitKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolSet {
    /// Degree, arcminute, arcsecond.
    pub dms: [char; 3],
    /// Hour, minute, second.
    pub hms: [char; 3],
}

impl SymbolSet {
    pub const DEFAULT: Self = Self {
        dms: ['°', '′', '″'],
        hms: ['ʰ', 'ᵐ', 'ˢ'],
    };

    /// Plain letters, for terminals that cannot draw the superscripts.
    pub const ASCII: Self = Self {
        dms: ['d', 'm', 's'],
        hms: ['h', 'm', 's'],
    };

    #[inline]
    pub fn for_unit(&self, unit: UnitKind) -> &[char; 3] {
        if unit.uses_hours() {
            &self.hms
        } else {
            &self.dms
        }
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}
