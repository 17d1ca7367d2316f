use super::BaseCounts;
use crate::{
    data::{
        err::{ConversionError, DistanceError},
        types::base::Base,
    },
    math::CheckedFloat,
};
use std::ops::Index;

/// Relative frequencies of `A`, `C`, `G`, and `T`.
///
/// Each frequency is the base's count divided by the *total* length of the
/// input, so gaps and ambiguity codes lower the frequencies without appearing
/// as keys. The four values only sum to one when the input is made entirely of
/// canonical bases.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BaseFrequencies([f64; 4]);

impl BaseFrequencies {
    /// Converts counts into frequencies over [`BaseCounts::total`].
    ///
    /// # Errors
    ///
    /// Empty counts give a [`DomainError::DivisionByZero`].
    ///
    /// [`DomainError::DivisionByZero`]: crate::data::err::DomainError::DivisionByZero
    #[allow(clippy::cast_precision_loss)]
    pub fn from_counts(counts: &BaseCounts) -> Result<Self, DistanceError> {
        let total = counts.total() as f64;
        let mut out = [0.0; 4];
        for base in Base::ALL {
            out[base.index()] = (counts.get(base) as f64).checked_quotient(total)?;
        }
        Ok(BaseFrequencies(out))
    }

    /// The frequency of a base.
    #[inline]
    #[must_use]
    pub fn get(&self, base: Base) -> f64 {
        self.0[base.index()]
    }

    /// The frequency of the base written as `byte`, ignoring case.
    ///
    /// # Errors
    ///
    /// Bytes other than `ACGTacgt` are not keys of the table.
    #[inline]
    pub fn get_byte(&self, byte: u8) -> Result<f64, ConversionError> {
        Base::try_from(byte).map(|base| self.get(base))
    }

    /// Iterates over `(base, frequency)` pairs in `ACGT` order.
    pub fn iter(&self) -> impl Iterator<Item = (Base, f64)> + '_ {
        Base::ALL.into_iter().zip(self.0)
    }

    /// The sum of the four frequencies.
    #[inline]
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// The sum of the squared frequencies, the probability that two bases
    /// drawn at random are identical.
    #[inline]
    #[must_use]
    pub fn sum_of_squares(&self) -> f64 {
        self.0.iter().map(|f| f * f).sum()
    }

    /// GC content: the combined frequency of `C` and `G`.
    #[inline]
    #[must_use]
    pub fn gc_content(&self) -> f64 {
        self.get(Base::C) + self.get(Base::G)
    }

    /// Retrieves the frequencies as an array in `ACGT` order.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [f64; 4] {
        self.0
    }
}

impl Index<Base> for BaseFrequencies {
    type Output = f64;

    #[inline]
    fn index(&self, base: Base) -> &f64 {
        &self.0[base.index()]
    }
}

/// Calculates the relative frequency of each canonical base in a sequence,
/// ignoring case.
///
/// # Example
/// ```
/// # use seqdist::{assert_fp_eq, composition::nt_frequency, data::types::base::Base};
/// let freqs = nt_frequency(b"ACGTaa-N").unwrap();
///
/// assert_fp_eq!(freqs[Base::A], 0.375);
/// assert_fp_eq!(freqs.get_byte(b't').unwrap(), 0.125);
/// assert_fp_eq!(freqs.sum(), 0.75);
/// ```
///
/// # Errors
///
/// An empty sequence has no frequencies and gives
/// [`DomainError::DivisionByZero`](crate::data::err::DomainError::DivisionByZero).
#[inline]
pub fn nt_frequency<Q: AsRef<[u8]> + ?Sized>(sequence: &Q) -> Result<BaseFrequencies, DistanceError> {
    BaseFrequencies::from_counts(&BaseCounts::from_seq(sequence))
}

/// Base frequencies over the concatenation of two sequences, without
/// allocating the concatenation.
///
/// # Errors
///
/// Both sequences being empty gives
/// [`DomainError::DivisionByZero`](crate::data::err::DomainError::DivisionByZero).
#[inline]
pub fn nt_frequency_combined<Q: AsRef<[u8]> + ?Sized, R: AsRef<[u8]> + ?Sized>(
    seq1: &Q, seq2: &R,
) -> Result<BaseFrequencies, DistanceError> {
    let mut counts = BaseCounts::from_seq(seq1);
    counts.tally_from_seq(seq2);
    BaseFrequencies::from_counts(&counts)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_fp_eq, data::err::DomainError};

    #[test]
    fn frequencies_sum_to_one() {
        let freqs = nt_frequency(b"GATTACAgattacaCCGGTTAA").unwrap();
        assert_fp_eq!(@absolute, freqs.sum(), 1.0, 1e-9);

        let expected = [8.0 / 22.0, 4.0 / 22.0, 4.0 / 22.0, 6.0 / 22.0];
        assert_fp_eq!(freqs.into_inner(), expected);
        for (base, f) in freqs.iter() {
            assert_fp_eq!(f, expected[base.index()]);
        }
    }

    #[test]
    fn gaps_and_ambiguity_count_toward_length() {
        let freqs = nt_frequency("AC-GTRYN").unwrap();
        assert_fp_eq!(freqs.sum(), 0.5);
        assert_fp_eq!(freqs.gc_content(), 0.25);
        assert_eq!(freqs.get_byte(b'R'), Err(ConversionError::InvalidSymbol(b'R')));
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(nt_frequency(b""), Err(DistanceError::Domain(DomainError::DivisionByZero)));
        assert!(nt_frequency_combined(b"", b"A").is_ok());
    }

    #[test]
    fn combined_matches_concatenation() {
        let (s1, s2) = (b"AACGTT-".as_slice(), b"GGCCATN".as_slice());
        let concatenated = [s1, s2].concat();
        assert_eq!(nt_frequency_combined(s1, s2).unwrap(), nt_frequency(&concatenated).unwrap());
        assert_fp_eq!(nt_frequency(s1).unwrap().sum_of_squares(), 2.0 * (2.0f64 / 7.0).powi(2) + 2.0 * (1.0f64 / 7.0).powi(2));
    }
}
