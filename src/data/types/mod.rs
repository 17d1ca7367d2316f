/// The four canonical nucleotide bases.
pub mod base;
