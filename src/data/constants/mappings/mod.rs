pub(crate) mod aa;
pub(crate) mod dna;


pub(crate) use aa::*;
pub(crate) use dna::*;

/// Utility function for building *is alpha*-like maps
const fn make_is_alpha_mapping<const N: usize>(alpha: &[u8; N]) -> [bool; 256] {
    let mut mapping = [false; 256];
    let mut i = 0;

    while i < N {
        mapping[alpha[i] as usize] = true;
        i += 1;
    }
    mapping
}

/// Utility function for making a mapping with a default value.
const fn make_mapping_with_default<const N: usize>(from_byte: &[u8; N], dest_byte: &[u8; N], all_others: u8) -> [u8; 256] {
    let mut mapping = [all_others; 256];
    let mut i = 0;

    while i < N {
        mapping[from_byte[i] as usize] = dest_byte[i];
        i += 1;
    }
    mapping
}
