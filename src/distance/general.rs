use crate::{
    data::{err::DistanceError, mappings::is_gap},
    math::CheckedFloat,
};

/// Fails with [`DistanceError::LengthMismatch`] unless both sequences have the
/// same length.
#[inline]
pub(crate) fn check_lengths(seq1: &[u8], seq2: &[u8]) -> Result<(), DistanceError> {
    if seq1.len() == seq2.len() {
        Ok(())
    } else {
        Err(DistanceError::LengthMismatch {
            left:  seq1.len(),
            right: seq2.len(),
        })
    }
}

/// Calculates the number of differences between two aligned sequences at the
/// byte (base/residue) level. Positions where either sequence has a gap (`-`)
/// are skipped: they count neither as a match nor as a mismatch.
///
/// When `ignore_case` is set, bytes are compared after ASCII uppercasing.
///
/// # Example
/// ```
/// use seqdist::distance::hamming_distance;
///
/// assert_eq!(hamming_distance(b"CAGATA", b"GTCTAT", false), Ok(6));
/// assert_eq!(hamming_distance(b"CAGATA", b"cagata", false), Ok(6));
/// assert_eq!(hamming_distance(b"CAGATA", b"cagata", true), Ok(0));
/// assert_eq!(hamming_distance(b"CA-ATA", b"GTCTAT", false), Ok(5));
/// ```
///
/// # Errors
///
/// Sequences of different lengths give [`DistanceError::LengthMismatch`].
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub fn hamming_distance(seq1: &[u8], seq2: &[u8], ignore_case: bool) -> Result<usize, DistanceError> {
    check_lengths(seq1, seq2)?;

    let differs: fn(u8, u8) -> bool = if ignore_case {
        |a: u8, b: u8| !a.eq_ignore_ascii_case(&b)
    } else {
        |a: u8, b: u8| a != b
    };

    Ok(std::iter::zip(seq1, seq2)
        .filter(|&(&a, &b)| !is_gap(a) && !is_gap(b) && differs(a, b))
        .count())
}

/// The uncorrected proportion of differing sites: the case-insensitive
/// [`hamming_distance`] divided by the length of `seq1`.
///
/// The divisor is the full alignment length, including any gap positions that
/// the numerator skipped.
///
/// # Example
/// ```
/// use seqdist::distance::p_distance;
///
/// assert_eq!(p_distance(b"ACGTACGTAC", b"ACGTAGGTTC"), Ok(0.2));
/// assert_eq!(p_distance(b"AC-T", b"ACGA"), Ok(0.25));
/// ```
///
/// # Errors
///
/// Sequences of different lengths give [`DistanceError::LengthMismatch`], and
/// empty sequences give
/// [`DomainError::DivisionByZero`](crate::data::err::DomainError::DivisionByZero).
#[allow(clippy::cast_precision_loss)]
pub fn p_distance(seq1: &[u8], seq2: &[u8]) -> Result<f64, DistanceError> {
    let mismatches = hamming_distance(seq1, seq2, true)?;
    Ok((mismatches as f64).checked_quotient(seq1.len() as f64)?)
}
