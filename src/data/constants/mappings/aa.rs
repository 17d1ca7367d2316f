use crate::data::alphas::AA_IUPAC_NO_GAPS_UC;

/// One-letter amino acid codes paired with their three-letter codes. The
/// ambiguity codes `B`, `Z`, and `X` and the stop `*` are included.
#[rustfmt::skip]
pub(crate) const AA_THREE_LETTER: [(u8, &[u8; 3]); 24] = [
    (b'A', b"Ala"), (b'B', b"Asx"), (b'C', b"Cys"), (b'D', b"Asp"), (b'E', b"Glu"), (b'F', b"Phe"),
    (b'G', b"Gly"), (b'H', b"His"), (b'I', b"Ile"), (b'K', b"Lys"), (b'L', b"Leu"), (b'M', b"Met"),
    (b'N', b"Asn"), (b'P', b"Pro"), (b'Q', b"Gln"), (b'R', b"Arg"), (b'S', b"Ser"), (b'T', b"Thr"),
    (b'V', b"Val"), (b'W', b"Trp"), (b'X', b"Xaa"), (b'Y', b"Tyr"), (b'Z', b"Glx"), (b'*', b"***"),
];

/// Case-insensitive map from one-letter amino acid codes to three-letter codes.
pub(crate) const TO_AA_THREE_LETTER: [Option<&[u8; 3]>; 256] = make_three_letter_mapping();

/// The twenty unambiguous amino acids.
#[cfg_attr(not(feature = "rand"), allow(dead_code))]
pub(crate) const AA_UNAMBIG: &[u8; 20] = AA_IUPAC_NO_GAPS_UC;

const fn make_three_letter_mapping() -> [Option<&'static [u8; 3]>; 256] {
    let mut mapping = [None; 256];
    let mut i = 0;

    while i < AA_THREE_LETTER.len() {
        let (one, three) = AA_THREE_LETTER[i];
        mapping[one as usize] = Some(three);
        mapping[one.to_ascii_lowercase() as usize] = Some(three);
        i += 1;
    }
    mapping
}

/// Finds the one-letter code for a three-letter amino acid code, ignoring case.
#[must_use]
pub(crate) fn from_aa_three_letter(code: &[u8]) -> Option<u8> {
    AA_THREE_LETTER
        .iter()
        .find(|(_, three)| three.eq_ignore_ascii_case(code))
        .map(|&(one, _)| one)
}
