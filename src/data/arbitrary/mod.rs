//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for aligned sequence pairs, so that the distance functions can be fuzzed.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use arbitrary::{Arbitrary, Result, Unstructured};

/// A pair of equal-length sequences whose
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// implementation only generates symbols in `ACGTNacgtn-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair(pub Vec<u8>, pub Vec<u8>);

impl<'a> Arbitrary<'a> for AlignedPair {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"ACGTNacgtn-";
        let length = u.arbitrary_len::<(u8, u8)>()?;
        let (mut seq1, mut seq2) = (Vec::with_capacity(length), Vec::with_capacity(length));

        for _ in 0..length {
            let (a, b) = <(u8, u8)>::arbitrary(u)?;
            seq1.push(ALPHA[a as usize % ALPHA.len()]);
            seq2.push(ALPHA[b as usize % ALPHA.len()]);
        }

        Ok(AlignedPair(seq1, seq2))
    }
}

/// A pair of sequences of arbitrary bytes and independent lengths.
#[derive(Debug, Clone, PartialEq, Eq, Arbitrary)]
pub struct UnalignedPair(pub Vec<u8>, pub Vec<u8>);
