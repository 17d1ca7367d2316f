use crate::data::{mappings::to_dna_index, types::base::Base};
use std::ops::{Add, AddAssign};

/// Counts of the four canonical bases along with the total number of bytes
/// seen, which includes gaps, ambiguity codes, and anything else.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BaseCounts {
    inner: [usize; 4],
    total: usize,
}

impl BaseCounts {
    /// Creates a new [`BaseCounts`] object with counts initialized to 0.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`BaseCounts`] from the bytes in `seq`.
    #[inline]
    #[must_use]
    pub fn from_seq<Q: AsRef<[u8]> + ?Sized>(seq: &Q) -> Self {
        let mut counts = Self::new();
        counts.tally_from_seq(seq);
        counts
    }

    /// Increments the counts using the bytes in `seq`.
    #[inline]
    pub fn tally_from_seq<Q: AsRef<[u8]> + ?Sized>(&mut self, seq: &Q) {
        for byte in seq.as_ref() {
            *self += *byte;
        }
    }

    /// Retrieves the count of a base.
    #[inline]
    #[must_use]
    pub fn get(&self, base: Base) -> usize {
        self.inner[base.index()]
    }

    /// The number of bytes tallied, canonical or not.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Retrieves the counts as an array in `ACGT` order.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [usize; 4] {
        self.inner
    }
}

impl Add<u8> for BaseCounts {
    type Output = Self;

    #[inline]
    fn add(mut self, other: u8) -> Self {
        self += other;
        self
    }
}

impl AddAssign<u8> for BaseCounts {
    #[inline]
    fn add_assign(&mut self, other: u8) {
        if let Some(count) = self.inner.get_mut(to_dna_index(other) as usize) {
            *count += 1;
        }
        self.total += 1;
    }
}

impl Add for BaseCounts {
    type Output = Self;

    #[inline]
    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl AddAssign for BaseCounts {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        for (a, b) in self.inner.iter_mut().zip(other.inner) {
            *a += b;
        }
        self.total += other.total;
    }
}
