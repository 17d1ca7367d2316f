/// Nucleotide substitution models for calculating evolutionary distances
/// between two aligned DNA sequences.
///
/// ## Assumptions:
///
/// * __Alignment:__ both sequences must be aligned and of equal length;
///   otherwise [`LengthMismatch`] is returned.
/// * __Pairwise deletion:__ If a gap is present in either sequence at a
///   position, that position is excluded from the substitution tally for both
///   sequences. Ambiguous (non-ACGT) symbols are kept in the tally's length
///   but are never counted as a substitution.
/// * __Undefined estimates:__ Saturated or degenerate inputs make the closed
///   form undefined (a logarithm of a non-positive number, a negative square
///   root, or a division by zero). These give a [`DomainError`] rather than
///   `NaN` or an infinity.
///
/// ## Example:
/// ```
/// # use seqdist::distance::dna::jukes_cantor_distance;
/// let seq1: &[u8] = b"ACGT";
/// let seq2: &[u8] = b"ACGA";
///
/// let jc_distance = jukes_cantor_distance(seq1, seq2).unwrap();
/// ```
///
/// [`LengthMismatch`]: crate::data::err::DistanceError::LengthMismatch
/// [`DomainError`]: crate::data::err::DomainError
pub mod dna;

/// General string-based distance functions.
mod general;
/// Pairing and tallying of aligned positions.
mod tabulation;

pub use general::*;
pub use tabulation::*;
