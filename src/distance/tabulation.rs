use super::general::check_lengths;
use crate::{
    data::{
        err::{DistanceError, DomainError},
        mappings::{NOT_ACGT, is_gap, to_dna_index},
        types::base::Base,
    },
    math::CheckedFloat,
};

/// Collects the ordered, uppercase symbol pairs of two aligned sequences,
/// dropping every position where either sequence has a gap.
///
/// ### Example
/// ```
/// # use seqdist::distance::retained_pairs;
/// let pairs = retained_pairs(b"AC-Gt", b"ATTG-").unwrap();
/// assert_eq!(pairs, vec![(b'A', b'A'), (b'C', b'T'), (b'G', b'G')]);
/// ```
///
/// # Errors
///
/// Sequences of different lengths give [`DistanceError::LengthMismatch`].
pub fn retained_pairs(seq1: &[u8], seq2: &[u8]) -> Result<Vec<(u8, u8)>, DistanceError> {
    check_lengths(seq1, seq2)?;
    Ok(iter_retained_pairs(seq1, seq2).collect())
}

#[inline]
fn iter_retained_pairs<'a>(seq1: &'a [u8], seq2: &'a [u8]) -> impl Iterator<Item = (u8, u8)> + 'a {
    std::iter::zip(seq1, seq2)
        .filter(|&(&a, &b)| !is_gap(a) && !is_gap(b))
        .map(|(a, b)| (a.to_ascii_uppercase(), b.to_ascii_uppercase()))
}

/// ## Substitution counts between two aligned sequences.
///
/// Holds a 4x4 matrix of retained pairs between canonical bases, where rows
/// refer to bases in the first sequence and columns to bases in the second
/// (both in `ACGT` order), and the total number of retained pairs. Pairs
/// involving a non-canonical symbol still count toward
/// [`length`](SubstitutionTally::length) but are not placed in the matrix, so
/// they are neither transitions nor transversions.
///
/// ### Example
/// ```
/// # use seqdist::distance::SubstitutionTally;
/// let tally = SubstitutionTally::from_sequences(b"GATCAGATTNGCA-TGG", b"GATCATATTAACATTGC").unwrap();
///
/// assert_eq!(tally.length(), 16);
/// assert_eq!(tally.transitions(), 1);
/// assert_eq!(tally.transversions(), 2);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SubstitutionTally {
    matrix: [[usize; 4]; 4],
    length: usize,
}

impl SubstitutionTally {
    /// Tallies already retained pairs, such as those produced by
    /// [`retained_pairs`]. Case is ignored.
    pub fn from_pairs<I: IntoIterator<Item = (u8, u8)>>(pairs: I) -> Self {
        let mut tally = Self::default();
        for (a, b) in pairs {
            let (i, j) = (to_dna_index(a), to_dna_index(b));
            if i != NOT_ACGT && j != NOT_ACGT {
                tally.matrix[i as usize][j as usize] += 1;
            }
            tally.length += 1;
        }
        tally
    }

    /// Tallies the retained pairs of two aligned sequences.
    ///
    /// # Errors
    ///
    /// Sequences of different lengths give [`DistanceError::LengthMismatch`].
    pub fn from_sequences(seq1: &[u8], seq2: &[u8]) -> Result<Self, DistanceError> {
        check_lengths(seq1, seq2)?;
        Ok(Self::from_pairs(iter_retained_pairs(seq1, seq2)))
    }

    /// The substitution matrix in `ACGT` order.
    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &[[usize; 4]; 4] {
        &self.matrix
    }

    /// The number of retained (gap-free) pairs, including pairs with
    /// ambiguous symbols.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// The number of A ↔ G and C ↔ T substitutions.
    #[inline]
    #[must_use]
    pub fn transitions(&self) -> usize {
        self.count_where(Base::is_transition)
    }

    /// The number of purine ↔ pyrimidine substitutions.
    #[inline]
    #[must_use]
    pub fn transversions(&self) -> usize {
        self.count_where(Base::is_transversion)
    }

    /// The number of substitutions between canonical bases, or the sum of the
    /// off-diagonal values in the matrix.
    #[inline]
    #[must_use]
    pub fn substitutions(&self) -> usize {
        self.count_where(|x, y| x != y)
    }

    /// The number of pairs `(x, y)` or `(y, x)`, so the order of the two
    /// sequences does not matter. For `x == y` this is the number of identical
    /// pairs.
    #[inline]
    #[must_use]
    pub fn pair_count(&self, x: Base, y: Base) -> usize {
        if x == y {
            self.matrix[x.index()][x.index()]
        } else {
            self.matrix[x.index()][y.index()] + self.matrix[y.index()][x.index()]
        }
    }

    /// The proportions of transitions and transversions among the retained
    /// pairs, usually written `p` and `q`.
    ///
    /// # Errors
    ///
    /// A tally with no retained pairs gives [`DomainError::DivisionByZero`].
    #[allow(clippy::cast_precision_loss)]
    pub fn proportions(&self) -> Result<(f64, f64), DomainError> {
        let length = self.length as f64;
        let p = (self.transitions() as f64).checked_quotient(length)?;
        let q = (self.transversions() as f64).checked_quotient(length)?;
        Ok((p, q))
    }

    fn count_where(&self, f: impl Fn(Base, Base) -> bool) -> usize {
        let mut count = 0;
        for x in Base::ALL {
            for y in Base::ALL {
                if f(x, y) {
                    count += self.matrix[x.index()][y.index()];
                }
            }
        }
        count
    }
}
