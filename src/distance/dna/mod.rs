#![allow(clippy::doc_markdown)]
use crate::{
    composition::{BaseFrequencies, nt_frequency, nt_frequency_combined},
    data::{
        err::{ConversionError, DistanceError, DomainError},
        types::base::Base,
    },
    distance::{SubstitutionTally, hamming_distance, p_distance},
    math::CheckedFloat,
};
use std::{fmt::Display, str::FromStr};

/// Distance methods for anything that can be viewed as nucleotide bytes, such
/// as `&[u8]`, `Vec<u8>`, `&str`, or `String`.
///
/// # Example
/// ```
/// # use seqdist::distance::dna::NucleotideDistances;
/// let s1 = "ATGCATCGATCGATCGATCGATCGATCGATGC";
/// let s2 = b"ATGCATTGATCGATCGATCGAACGATCGATCC";
///
/// assert_eq!(s1.distance_hamming(s2, false), Ok(3));
/// assert!(s1.distance_kimura(s2).unwrap() > s1.distance_p(s2).unwrap());
/// ```
pub trait NucleotideDistances: AsRef<[u8]> {
    /// Calculates the gap-aware Hamming distance between [`self`] and another
    /// sequence. See [`hamming_distance`].
    #[inline]
    fn distance_hamming<T: AsRef<[u8]> + ?Sized>(&self, other: &T, ignore_case: bool) -> Result<usize, DistanceError> {
        hamming_distance(self.as_ref(), other.as_ref(), ignore_case)
    }

    /// Computes the p-distance between [`self`] and another sequence. See
    /// [`p_distance`].
    #[inline]
    fn distance_p<T: AsRef<[u8]> + ?Sized>(&self, other: &T) -> Result<f64, DistanceError> {
        p_distance(self.as_ref(), other.as_ref())
    }

    /// Computes the Jukes-Cantor distance between [`self`] and another
    /// sequence. See [`jukes_cantor_distance`].
    #[inline]
    fn distance_jukes_cantor<T: AsRef<[u8]> + ?Sized>(&self, other: &T) -> Result<f64, DistanceError> {
        jukes_cantor_distance(self.as_ref(), other.as_ref())
    }

    /// Computes the Tajima-Nei distance between [`self`] and another sequence.
    /// See [`tajima_nei_distance`].
    #[inline]
    fn distance_tajima_nei<T: AsRef<[u8]> + ?Sized>(&self, other: &T) -> Result<f64, DistanceError> {
        tajima_nei_distance(self.as_ref(), other.as_ref())
    }

    /// Computes the Kimura 2-parameter distance between [`self`] and another
    /// sequence. See [`kimura_distance`].
    #[inline]
    fn distance_kimura<T: AsRef<[u8]> + ?Sized>(&self, other: &T) -> Result<f64, DistanceError> {
        kimura_distance(self.as_ref(), other.as_ref())
    }

    /// Computes the Tamura distance between [`self`] and another sequence. See
    /// [`tamura_distance`].
    #[inline]
    fn distance_tamura<T: AsRef<[u8]> + ?Sized>(&self, other: &T) -> Result<f64, DistanceError> {
        tamura_distance(self.as_ref(), other.as_ref())
    }

    /// Collects the statistics shared by all estimators once, so that several
    /// distances can be computed for the same pair. See [`PairStatistics`].
    #[inline]
    fn distance_statistics<T: AsRef<[u8]> + ?Sized>(&self, other: &T) -> Result<PairStatistics, DistanceError> {
        PairStatistics::from_sequences(self.as_ref(), other.as_ref())
    }
}

impl<T: AsRef<[u8]> + ?Sized> NucleotideDistances for T {}

/// ## Jukes-Cantor nucleotide substitution model.
///
/// Assumes equal base frequencies and equal rates among all possible
/// substitutions. The formula used is:
///
/// $$ d = -b \ln \left(1 - \frac{p}{b} \right), \quad b = \frac{3}{4} $$
///
/// where $p$ is the [`p_distance`] between the sequences.
///
/// # Example
/// ```
/// # use seqdist::{assert_fp_eq, distance::dna::jukes_cantor_distance};
/// let d = jukes_cantor_distance(b"ACGTACGTAC", b"ACGTAGGTTC").unwrap();
/// assert_fp_eq!(d, 0.2326161962278796);
/// ```
///
/// # Errors
///
/// Sequences must be the same length. When $p \geq b$ the logarithm is
/// undefined and [`DomainError::NonPositiveLogarithm`] is returned.
///
/// ### Citations
///
/// - Jukes, T., and Cantor, C. (1969). "Evolution of Protein Molecules."
///   Mammalian Protein Metabolism, New York: Academic Press, III(3), 21–132.
pub fn jukes_cantor_distance(seq1: &[u8], seq2: &[u8]) -> Result<f64, DistanceError> {
    let p = p_distance(seq1, seq2)?;
    Ok(jukes_cantor(p)?)
}

/// ## Tajima-Nei nucleotide substitution model.
///
/// Extends Jukes-Cantor to unequal base frequencies and to unequal
/// frequencies of the pairs of bases involved in substitutions:
///
/// $$ d = -b \ln \left(1 - \frac{p}{b} \right) $$
/// $$ b = \frac{1}{2} \left( 1 - \sum_i G_i^2 + \frac{p^2}{h} \right) $$
/// $$ h = \sum_{i < j} \frac{1}{2} \frac{(X_{ij} / n)^2}{G_i G_j} $$
///
/// where $p$ is the [`p_distance`], $G_i$ is the frequency of base $i$ over
/// both sequences together (see [`nt_frequency`]), $X_{ij}$ counts the
/// retained pairs $(i, j)$ or $(j, i)$ and $n$ is the number of retained
/// pairs.
///
/// # Errors
///
/// Sequences must be the same length. Identical sequences have $h = 0$, and a
/// base missing from both sequences has $G_i = 0$; both give
/// [`DomainError::DivisionByZero`]. Highly divergent sequences give
/// [`DomainError::NonPositiveLogarithm`].
///
/// ### Citations
///
/// - Tajima, F., and Nei, M. (1984). "Estimation of evolutionary distance
///   between nucleotide sequences." Mol. Biol. Evol. 1(3), 269–285.
pub fn tajima_nei_distance(seq1: &[u8], seq2: &[u8]) -> Result<f64, DistanceError> {
    let p = p_distance(seq1, seq2)?;
    let tally = SubstitutionTally::from_sequences(seq1, seq2)?;
    let frequencies = nt_frequency_combined(seq1, seq2)?;
    Ok(tajima_nei(p, &tally, &frequencies)?)
}

/// ## Kimura 2-parameter nucleotide substitution model.
///
/// Accounts for different rates of **transitions** (A ↔ G or C ↔ T) and
/// **transversions** (A ↔ C, A ↔ T, C ↔ G, G ↔ T). The formula used is:
///
/// $$ d = -\frac{1}{2} \ln\left[ (1 - 2p - q) \sqrt{1 - 2q} \right] $$
///
/// where $p$ and $q$ are the proportions of transitions and transversions
/// among the retained pairs (see [`SubstitutionTally::proportions`]).
///
/// # Example
/// ```
/// # use seqdist::{assert_fp_eq, distance::dna::kimura_distance};
/// let d = kimura_distance(b"ACGTACGTAC", b"GCGTACATAC").unwrap();
/// assert_fp_eq!(d, 0.25541281188299536);
/// ```
///
/// # Errors
///
/// Sequences must be the same length and have at least one retained pair.
/// When $1 - 2p - q \leq 0$ the result is [`DomainError::NonPositiveLogarithm`],
/// and when $1 - 2q < 0$ it is [`DomainError::NegativeSquareRoot`].
///
/// ### Citations
///
/// - Kimura, M. (1980). "A simple method for estimating evolutionary rates of
///   base substitutions through comparative studies of nucleotide sequences."
///   Journal of Molecular Evolution. 16, 111-120.
pub fn kimura_distance(seq1: &[u8], seq2: &[u8]) -> Result<f64, DistanceError> {
    let (p, q) = SubstitutionTally::from_sequences(seq1, seq2)?.proportions()?;
    Ok(kimura(p, q)?)
}

/// ## Tamura nucleotide substitution model.
///
/// Extends Kimura 2-parameter to sequences with unequal GC content:
///
/// $$ d = -C \ln \left(1 - \frac{p}{C} - q \right) - \frac{1}{2}(1 - C) \ln(1 - 2q) $$
/// $$ C = GC_1 + GC_2 - 2 \cdot GC_1 \cdot GC_2 $$
///
/// where $p$ and $q$ are the proportions of transitions and transversions
/// among the retained pairs and $GC_1$, $GC_2$ are the GC contents of each
/// sequence on its own (see [`BaseFrequencies::gc_content`]).
///
/// # Errors
///
/// Sequences must be the same length and have at least one retained pair.
/// Sequences without G or C (or both made entirely of G and C) have $C = 0$
/// and give [`DomainError::DivisionByZero`]. Highly divergent sequences give
/// [`DomainError::NonPositiveLogarithm`].
///
/// ### Citations
///
/// - Tamura, K. (1992). "Estimation of the number of nucleotide substitutions
///   when there are strong transition-transversion and G+C-content biases."
///   Mol. Biol. Evol. 9(4), 678–687.
pub fn tamura_distance(seq1: &[u8], seq2: &[u8]) -> Result<f64, DistanceError> {
    let (p, q) = SubstitutionTally::from_sequences(seq1, seq2)?.proportions()?;
    let gc1 = nt_frequency(seq1)?.gc_content();
    let gc2 = nt_frequency(seq2)?.gc_content();
    Ok(tamura(p, q, gc1, gc2)?)
}

fn jukes_cantor(p: f64) -> Result<f64, DomainError> {
    const B: f64 = 0.75;
    (-B * (1.0 - p / B).checked_ln()?).into_finite()
}

#[allow(clippy::cast_precision_loss)]
fn tajima_nei(p: f64, tally: &SubstitutionTally, frequencies: &BaseFrequencies) -> Result<f64, DomainError> {
    let n = tally.length() as f64;

    let mut h = 0.0;
    for (i, &x) in Base::ALL.iter().enumerate() {
        for &y in &Base::ALL[i + 1..] {
            let x_ij = (tally.pair_count(x, y) as f64).checked_quotient(n)?;
            h += (0.5 * x_ij * x_ij).checked_quotient(frequencies[x] * frequencies[y])?;
        }
    }

    let b = 0.5 * (1.0 - frequencies.sum_of_squares() + (p * p).checked_quotient(h)?);
    (-b * (1.0 - p.checked_quotient(b)?).checked_ln()?).into_finite()
}

fn kimura(p: f64, q: f64) -> Result<f64, DomainError> {
    let transversion_term = (1.0 - 2.0 * q).checked_sqrt()?;
    (-0.5 * ((1.0 - 2.0 * p - q) * transversion_term).checked_ln()?).into_finite()
}

fn tamura(p: f64, q: f64, gc1: f64, gc2: f64) -> Result<f64, DomainError> {
    let c = gc1 + gc2 - 2.0 * gc1 * gc2;
    let transition_term = (1.0 - p.checked_quotient(c)? - q).checked_ln()?;
    let transversion_term = (1.0 - 2.0 * q).checked_ln()?;
    (-c * transition_term - 0.5 * (1.0 - c) * transversion_term).into_finite()
}

/// The statistics shared by the estimators for a single pair of aligned
/// sequences.
///
/// Building this once and then asking for several distances avoids
/// re-scanning the sequences. Every distance is identical to the one computed
/// by the corresponding free function.
///
/// # Example
/// ```
/// # use seqdist::distance::dna::{DistanceModel, PairStatistics, tamura_distance};
/// let (s1, s2) = (b"ACGTTGCAAGCT", b"ACGATGCTAGCA");
/// let stats = PairStatistics::from_sequences(s1, s2).unwrap();
///
/// assert_eq!(stats.tamura(), tamura_distance(s1, s2));
/// for model in DistanceModel::ALL {
///     assert!(stats.distance(model).unwrap() >= stats.p_distance());
/// }
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PairStatistics {
    p_distance:  f64,
    tally:       SubstitutionTally,
    combined:    BaseFrequencies,
    gc_contents: (f64, f64),
}

impl PairStatistics {
    /// Collects the p-distance, the substitution tally, the combined base
    /// frequencies, and the GC content of each sequence.
    ///
    /// # Errors
    ///
    /// Sequences of different lengths give [`DistanceError::LengthMismatch`],
    /// and empty sequences give [`DomainError::DivisionByZero`].
    pub fn from_sequences(seq1: &[u8], seq2: &[u8]) -> Result<Self, DistanceError> {
        Ok(PairStatistics {
            p_distance:  p_distance(seq1, seq2)?,
            tally:       SubstitutionTally::from_sequences(seq1, seq2)?,
            combined:    nt_frequency_combined(seq1, seq2)?,
            gc_contents: (nt_frequency(seq1)?.gc_content(), nt_frequency(seq2)?.gc_content()),
        })
    }

    /// The uncorrected distance. See [`p_distance`].
    #[inline]
    #[must_use]
    pub fn p_distance(&self) -> f64 {
        self.p_distance
    }

    /// The substitution tally of the retained pairs.
    #[inline]
    #[must_use]
    pub fn tally(&self) -> &SubstitutionTally {
        &self.tally
    }

    /// The base frequencies over both sequences together.
    #[inline]
    #[must_use]
    pub fn combined_frequencies(&self) -> &BaseFrequencies {
        &self.combined
    }

    /// The GC content of the first and second sequence.
    #[inline]
    #[must_use]
    pub fn gc_contents(&self) -> (f64, f64) {
        self.gc_contents
    }

    /// See [`jukes_cantor_distance`].
    ///
    /// # Errors
    ///
    /// See [`jukes_cantor_distance`].
    #[inline]
    pub fn jukes_cantor(&self) -> Result<f64, DistanceError> {
        Ok(jukes_cantor(self.p_distance)?)
    }

    /// See [`tajima_nei_distance`].
    ///
    /// # Errors
    ///
    /// See [`tajima_nei_distance`].
    #[inline]
    pub fn tajima_nei(&self) -> Result<f64, DistanceError> {
        Ok(tajima_nei(self.p_distance, &self.tally, &self.combined)?)
    }

    /// See [`kimura_distance`].
    ///
    /// # Errors
    ///
    /// See [`kimura_distance`].
    #[inline]
    pub fn kimura(&self) -> Result<f64, DistanceError> {
        let (p, q) = self.tally.proportions()?;
        Ok(kimura(p, q)?)
    }

    /// See [`tamura_distance`].
    ///
    /// # Errors
    ///
    /// See [`tamura_distance`].
    #[inline]
    pub fn tamura(&self) -> Result<f64, DistanceError> {
        let (p, q) = self.tally.proportions()?;
        let (gc1, gc2) = self.gc_contents;
        Ok(tamura(p, q, gc1, gc2)?)
    }

    /// Computes the distance for the given model.
    ///
    /// # Errors
    ///
    /// See the model's free function.
    pub fn distance(&self, model: DistanceModel) -> Result<f64, DistanceError> {
        match model {
            DistanceModel::PDistance => Ok(self.p_distance),
            DistanceModel::JukesCantor => self.jukes_cantor(),
            DistanceModel::TajimaNei => self.tajima_nei(),
            DistanceModel::Kimura => self.kimura(),
            DistanceModel::Tamura => self.tamura(),
        }
    }
}

/// The available pairwise distance estimators.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DistanceModel {
    PDistance,
    JukesCantor,
    TajimaNei,
    Kimura,
    Tamura,
}

impl DistanceModel {
    /// Every model, uncorrected first.
    pub const ALL: [DistanceModel; 5] = [
        DistanceModel::PDistance,
        DistanceModel::JukesCantor,
        DistanceModel::TajimaNei,
        DistanceModel::Kimura,
        DistanceModel::Tamura,
    ];

    /// A short, kebab-case name for the model.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DistanceModel::PDistance => "p-distance",
            DistanceModel::JukesCantor => "jukes-cantor",
            DistanceModel::TajimaNei => "tajima-nei",
            DistanceModel::Kimura => "kimura",
            DistanceModel::Tamura => "tamura",
        }
    }

    /// Computes this model's distance between two aligned sequences.
    ///
    /// # Errors
    ///
    /// See the model's free function.
    pub fn compute(self, seq1: &[u8], seq2: &[u8]) -> Result<f64, DistanceError> {
        match self {
            DistanceModel::PDistance => p_distance(seq1, seq2),
            DistanceModel::JukesCantor => jukes_cantor_distance(seq1, seq2),
            DistanceModel::TajimaNei => tajima_nei_distance(seq1, seq2),
            DistanceModel::Kimura => kimura_distance(seq1, seq2),
            DistanceModel::Tamura => tamura_distance(seq1, seq2),
        }
    }
}

impl Display for DistanceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceModel {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::InvalidOption(s.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod test;
