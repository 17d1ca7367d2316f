/// Canonical uppercase nucleotide bases, in index order.
#[cfg_attr(not(feature = "rand"), allow(dead_code))]
pub(crate) const DNA_ACGT_UC: &[u8; 4] = b"ACGT";

/// IUPAC nucleotide codes with complements, including lower and upper case.
#[cfg(test)]
pub(crate) const DNA_IUPAC_COMPLEMENTABLE: &[u8; 30] = b"acgturyswkmbdhvACGTURYSWKMBDHV";

/// Symbols marking an alignment gap.
pub(crate) const GAPS: &[u8; 1] = b"-";

/// IUPAC Amino Acids in upper case.
pub(crate) const AA_IUPAC_NO_GAPS_UC: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";
