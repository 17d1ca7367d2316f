use crate::data::{
    alphas::DNA_ACGT_UC,
    err::ConversionError,
    mappings::AA_UNAMBIG,
};
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};
use std::{fmt::Display, str::FromStr};

/// The symbols used when generating or mutating sequences.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Alphabet {
    /// The bases `ACGT`.
    #[default]
    Nucleotide,
    /// The twenty unambiguous amino acids.
    AminoAcid,
}

impl Alphabet {
    #[inline]
    #[must_use]
    pub const fn symbols(self) -> &'static [u8] {
        match self {
            Alphabet::Nucleotide => DNA_ACGT_UC,
            Alphabet::AminoAcid => AA_UNAMBIG,
        }
    }
}

impl FromStr for Alphabet {
    type Err = ConversionError;

    /// Accepts `nt` or `aa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nt" => Ok(Alphabet::Nucleotide),
            "aa" => Ok(Alphabet::AminoAcid),
            _ => Err(ConversionError::InvalidOption(s.to_string())),
        }
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Alphabet::Nucleotide => "nt",
            Alphabet::AminoAcid => "aa",
        })
    }
}

/// A uniform index below `n`, which must be non-zero. The modulo reduction is
/// biased by at most `n / 2^64`, which is negligible for alphabet sizes and
/// sequence lengths.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn uniform_index(rng: &mut Xoshiro256PlusPlus, n: usize) -> usize {
    (rng.next_u64() % n as u64) as usize
}

/// Draws `length` symbols uniformly from `alpha` using a seeded
/// [`Xoshiro256PlusPlus`]. An empty alphabet gives an empty sequence.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    if alpha.is_empty() {
        return Vec::new();
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (1..=length).map(|_| alpha[uniform_index(&mut rng, alpha.len())]).collect()
}

/// Generates a random sequence of `length` symbols from `alphabet`. The same
/// seed always gives the same sequence.
///
/// ### Example
/// ```
/// # use seqdist::generate::{Alphabet, random_sequence};
/// let seq = random_sequence(200, Alphabet::Nucleotide, 42);
///
/// assert_eq!(seq.len(), 200);
/// assert!(seq.iter().all(|b| b"ACGT".contains(b)));
/// assert_eq!(seq, random_sequence(200, Alphabet::Nucleotide, 42));
/// ```
#[inline]
#[must_use]
pub fn random_sequence(length: usize, alphabet: Alphabet, seed: u64) -> Vec<u8> {
    rand_sequence(alphabet.symbols(), length, seed)
}

/// Shuffles a sequence with a Fisher-Yates shuffle, keeping its composition.
#[must_use]
pub fn shuffle_sequence(sequence: &[u8], seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut out = sequence.to_vec();

    for i in (1..out.len()).rev() {
        let j = uniform_index(&mut rng, i + 1);
        out.swap(i, j);
    }
    out
}

/// Applies `mutations` point substitutions at random positions. Each
/// substitution replaces the current symbol with a different symbol from
/// `alphabet`, but the same position may be drawn more than once, so at most
/// `mutations` positions differ from the input.
#[must_use]
pub fn mutate_sequence(sequence: &[u8], mutations: usize, alphabet: Alphabet, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut out = sequence.to_vec();
    if out.is_empty() {
        return out;
    }

    let symbols = alphabet.symbols();
    for _ in 0..mutations {
        let position = uniform_index(&mut rng, out.len());
        let current = out[position];

        let candidates = symbols.iter().filter(|&&s| !s.eq_ignore_ascii_case(&current)).count();
        let pick = uniform_index(&mut rng, candidates);
        if let Some(&s) = symbols.iter().filter(|&&s| !s.eq_ignore_ascii_case(&current)).nth(pick) {
            out[position] = s;
        }
    }
    out
}
