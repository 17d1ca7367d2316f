use crate::data::{
    err::ConversionError,
    mappings::{TO_AA_THREE_LETTER, TO_COMPLEMENT_UC, from_aa_three_letter},
};
use std::{fmt::Display, str::FromStr};

/// The orientation change applied by [`convert`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Conversion {
    Reverse,
    Complement,
    #[default]
    ReverseComplement,
}

impl FromStr for Conversion {
    type Err = ConversionError;

    /// Accepts `reverse`, `complement`, `reverse_complement`, or their
    /// abbreviations `r`, `c`, and `rc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reverse" | "r" => Ok(Conversion::Reverse),
            "complement" | "c" => Ok(Conversion::Complement),
            "reverse_complement" | "rc" => Ok(Conversion::ReverseComplement),
            _ => Err(ConversionError::InvalidOption(s.to_string())),
        }
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Conversion::Reverse => "reverse",
            Conversion::Complement => "complement",
            Conversion::ReverseComplement => "reverse_complement",
        })
    }
}

/// Reverses a sequence without changing its symbols.
#[inline]
#[must_use]
pub fn reverse(bases: &[u8]) -> Vec<u8> {
    bases.iter().rev().copied().collect()
}

/// Complements a nucleotide sequence using IUPAC codes. The output is
/// uppercase; `U` complements to `A`, and `N` and gaps map to themselves.
///
/// # Errors
///
/// Any symbol without a complement gives [`ConversionError::InvalidSymbol`].
#[inline]
pub fn complement(bases: &[u8]) -> Result<Vec<u8>, ConversionError> {
    bases.iter().map(|&b| complement_base(b)).collect()
}

/// The reverse complement of a nucleotide sequence. See [`complement`].
///
/// ### Example
/// ```
/// # use seqdist::data::convert::reverse_complement;
/// assert_eq!(reverse_complement(b"TATCTG").unwrap(), b"CAGATA");
/// assert_eq!(reverse_complement(b"acgn-").unwrap(), b"-NCGT");
/// assert!(reverse_complement(b"ACGTJ").is_err());
/// ```
///
/// # Errors
///
/// Any symbol without a complement gives [`ConversionError::InvalidSymbol`].
#[inline]
pub fn reverse_complement(bases: &[u8]) -> Result<Vec<u8>, ConversionError> {
    bases.iter().rev().map(|&b| complement_base(b)).collect()
}

/// Applies a [`Conversion`] to a nucleotide sequence.
///
/// # Errors
///
/// Complementing conversions fail on symbols without a complement.
pub fn convert(bases: &[u8], conversion: Conversion) -> Result<Vec<u8>, ConversionError> {
    match conversion {
        Conversion::Reverse => Ok(reverse(bases)),
        Conversion::Complement => complement(bases),
        Conversion::ReverseComplement => reverse_complement(bases),
    }
}

#[inline]
fn complement_base(b: u8) -> Result<u8, ConversionError> {
    match TO_COMPLEMENT_UC[b as usize] {
        0 => Err(ConversionError::InvalidSymbol(b)),
        c => Ok(c),
    }
}

/// Converts a one-letter amino acid sequence to three-letter codes, ignoring
/// case.
///
/// ### Example
/// ```
/// # use seqdist::data::convert::aa_one_to_three;
/// assert_eq!(aa_one_to_three(b"canne").unwrap(), b"CysAlaAsnAsnGlu");
/// ```
///
/// # Errors
///
/// Residues other than the twenty amino acids, `B`, `Z`, `X`, and the stop
/// `*` give [`ConversionError::InvalidSymbol`].
pub fn aa_one_to_three(residues: &[u8]) -> Result<Vec<u8>, ConversionError> {
    let mut out = Vec::with_capacity(residues.len() * 3);
    for &aa in residues {
        let code = TO_AA_THREE_LETTER[aa as usize].ok_or(ConversionError::InvalidSymbol(aa))?;
        out.extend_from_slice(code);
    }
    Ok(out)
}

/// Converts a three-letter amino acid sequence to one-letter codes, ignoring
/// case. The output is uppercase.
///
/// ### Example
/// ```
/// # use seqdist::data::convert::aa_three_to_one;
/// assert_eq!(aa_three_to_one(b"cysALAAsnasnGlu").unwrap(), b"CANNE");
/// ```
///
/// # Errors
///
/// A length that is not a multiple of three gives
/// [`ConversionError::IncompleteCodon`]. An unknown code gives
/// [`ConversionError::InvalidSymbol`] holding the first byte of that code.
pub fn aa_three_to_one(residues: &[u8]) -> Result<Vec<u8>, ConversionError> {
    if residues.len() % 3 != 0 {
        return Err(ConversionError::IncompleteCodon);
    }

    residues
        .chunks_exact(3)
        .map(|code| from_aa_three_letter(code).ok_or(ConversionError::InvalidSymbol(code[0])))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(convert(b"TATCTG", Conversion::ReverseComplement).unwrap(), b"CAGATA");
        assert_eq!(convert(b"ATAGAC", Conversion::Reverse).unwrap(), b"CAGATA");
        assert_eq!(convert(b"GTCTAT", Conversion::Complement).unwrap(), b"CAGATA");
        assert_eq!(reverse(b"acGT-"), b"-TGca");
        assert_eq!(complement(b"uRYSWKMBDHVN.").unwrap(), b"AYRSWMKVHDBN.");
    }

    #[test]
    fn reverse_complement_is_involution() {
        let seq = b"ACGTRYSWKMBDHVN-";
        let twice = reverse_complement(&reverse_complement(seq).unwrap()).unwrap();
        assert_eq!(twice, seq);
    }

    #[test]
    fn invalid_symbols() {
        assert_eq!(complement(b"ACXT"), Err(ConversionError::InvalidSymbol(b'X')));
        assert_eq!(reverse_complement(b"AC T"), Err(ConversionError::InvalidSymbol(b' ')));
        assert_eq!(reverse(b"not checked"), b"dekcehc ton");
    }

    #[test]
    fn parse_conversion() {
        for (name, conversion) in [
            ("reverse", Conversion::Reverse),
            ("r", Conversion::Reverse),
            ("complement", Conversion::Complement),
            ("c", Conversion::Complement),
            ("reverse_complement", Conversion::ReverseComplement),
            ("rc", Conversion::ReverseComplement),
        ] {
            assert_eq!(name.parse::<Conversion>(), Ok(conversion));
        }
        assert_eq!(Conversion::default().to_string().parse::<Conversion>(), Ok(Conversion::ReverseComplement));
        assert_eq!(
            "invalid".parse::<Conversion>(),
            Err(ConversionError::InvalidOption("invalid".to_string()))
        );
    }

    #[test]
    fn amino_acid_codes() {
        assert_eq!(aa_one_to_three(b"CANNE").unwrap(), b"CysAlaAsnAsnGlu");
        assert_eq!(aa_one_to_three(b"m*").unwrap(), b"Met***");
        assert_eq!(aa_one_to_three(b"CAJ"), Err(ConversionError::InvalidSymbol(b'J')));

        assert_eq!(aa_three_to_one(b"CysAlaAsnAsnGlu").unwrap(), b"CANNE");
        assert_eq!(aa_three_to_one(b"cysalaasnasnglu").unwrap(), b"CANNE");
        assert_eq!(aa_three_to_one(b"CysAl"), Err(ConversionError::IncompleteCodon));
        assert_eq!(aa_three_to_one(b"CysFoo"), Err(ConversionError::InvalidSymbol(b'F')));
        assert_eq!(aa_three_to_one(b""), Ok(Vec::new()));
    }

    #[test]
    fn amino_acid_round_trip() {
        let residues = b"ACDEFGHIKLMNPQRSTVWYBZX*";
        assert_eq!(aa_three_to_one(&aa_one_to_three(residues).unwrap()).unwrap(), residues);
    }
}
