/// Alphabets used to build the lookup tables.
pub(crate) mod alphas;
/// Byte lookup tables for nucleotides and amino acids.
pub(crate) mod mappings;
