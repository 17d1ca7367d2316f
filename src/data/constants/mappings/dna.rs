use super::*;
use crate::data::alphas::*;

/// Sentinel used by [`TO_DNA_INDEX`] for anything that is not `ACGT`.
pub(crate) const NOT_ACGT: u8 = 4;

/// A boolean mapping of alignment gap symbols.
pub(crate) const IS_GAP: [bool; 256] = make_is_alpha_mapping(GAPS);

/// Maps `ACGT` (either case) to the indices 0 through 3. All other bytes map
/// to [`NOT_ACGT`].
#[rustfmt::skip]
pub(crate) const TO_DNA_INDEX: [u8; 256] = make_mapping_with_default(
    b"acgtACGT",
    &[0, 1, 2, 3, 0, 1, 2, 3],
    NOT_ACGT,
);

/// Maps valid IUPAC nucleotides to their uppercase complement. `N` and gaps
/// map to themselves and the 0-byte marks a byte without a complement.
pub(crate) const TO_COMPLEMENT_UC: [u8; 256] = make_mapping_with_default(
    b"acgturyswkmbdhvnACGTURYSWKMBDHVN-.",
    b"TGCAAYRSWMKVHDBNTGCAAYRSWMKVHDBN-.",
    0,
);

/// A boolean mapping of nucleotides that have a complement, excluding `N` and
/// gaps.
#[cfg(test)]
pub(crate) const IS_DNA_IUPAC_COMPLEMENTABLE: [bool; 256] = make_is_alpha_mapping(DNA_IUPAC_COMPLEMENTABLE);

/// Returns the base index (0 through 3 for `ACGT`) of a byte, or [`NOT_ACGT`].
#[inline]
#[must_use]
pub(crate) const fn to_dna_index(b: u8) -> u8 {
    TO_DNA_INDEX[b as usize]
}

/// Whether the byte is an alignment gap.
#[inline]
#[must_use]
pub(crate) const fn is_gap(b: u8) -> bool {
    IS_GAP[b as usize]
}
