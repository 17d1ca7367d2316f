use crate::data::{
    err::ConversionError,
    mappings::{NOT_ACGT, to_dna_index},
};
use std::fmt::Display;

/// One of the four canonical nucleotide bases.
///
/// The discriminant is the base's index in `ACGT` order, which is also the
/// order used by [`BaseFrequencies`](crate::composition::BaseFrequencies) and
/// the pair tallies in [`SubstitutionTally`](crate::distance::SubstitutionTally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Base {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Base {
    /// All bases in index order.
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Looks up a base from a byte, ignoring case. Returns [`None`] for gaps,
    /// ambiguity codes, `U`, and anything else outside of `ACGTacgt`.
    #[inline]
    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match to_dna_index(b) {
            NOT_ACGT => None,
            i => Some(Self::ALL[i as usize]),
        }
    }

    /// The base's index in `ACGT` order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The uppercase byte for this base.
    #[inline]
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
        }
    }

    /// Purines are `A` and `G`; pyrimidines are `C` and `T`.
    #[inline]
    #[must_use]
    pub const fn is_purine(self) -> bool {
        matches!(self, Base::A | Base::G)
    }

    /// Whether a substitution from `self` to `other` is a transition (A ↔ G
    /// or C ↔ T). Identical bases are not a substitution.
    #[inline]
    #[must_use]
    pub const fn is_transition(self, other: Base) -> bool {
        self as u8 != other as u8 && self.is_purine() == other.is_purine()
    }

    /// Whether a substitution from `self` to `other` is a transversion
    /// (purine ↔ pyrimidine).
    #[inline]
    #[must_use]
    pub const fn is_transversion(self, other: Base) -> bool {
        self.is_purine() != other.is_purine()
    }
}

impl TryFrom<u8> for Base {
    type Error = ConversionError;

    #[inline]
    fn try_from(b: u8) -> Result<Self, Self::Error> {
        Base::from_byte(b).ok_or(ConversionError::InvalidSymbol(b))
    }
}

impl From<Base> for u8 {
    #[inline]
    fn from(base: Base) -> Self {
        base.to_byte()
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.to_byte()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(Base::try_from(b'g'), Ok(Base::G));
        assert_eq!(Base::try_from(b'T'), Ok(Base::T));
        assert_eq!(Base::try_from(b'-'), Err(ConversionError::InvalidSymbol(b'-')));
        assert_eq!(Base::from_byte(b'N'), None);
        assert_eq!(Base::from_byte(b'U'), None);

        for base in Base::ALL {
            assert_eq!(Base::from_byte(base.to_byte()), Some(base));
            assert_eq!(Base::ALL[base.index()], base);
        }
    }

    #[test]
    fn substitution_classes() {
        let transitions = [(Base::A, Base::G), (Base::G, Base::A), (Base::C, Base::T), (Base::T, Base::C)];

        for x in Base::ALL {
            for y in Base::ALL {
                let ts = transitions.contains(&(x, y));
                assert_eq!(x.is_transition(y), ts, "{x}{y}");
                assert_eq!(x.is_transversion(y), x != y && !ts, "{x}{y}");
            }
        }
    }
}
