#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]

/// Base counts and frequencies.
pub mod composition;
/// Sequence alphabets, conversions, and error types.
pub mod data;
/// Distance functions, especially for sequence data.
pub mod distance;

/// Generate, shuffle, and mutate sequences.
#[cfg(feature = "rand")]
pub mod generate;
/// Checked floating point operations and comparisons.
pub mod math;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::composition::{BaseFrequencies, nt_frequency};
    pub use crate::data::{
        convert::{Conversion, reverse_complement},
        err::{DistanceError, DomainError, OrFail},
        types::base::Base,
    };
    pub use crate::distance::{
        SubstitutionTally,
        dna::{DistanceModel, NucleotideDistances, PairStatistics},
        hamming_distance, p_distance,
    };
    #[cfg(feature = "rand")]
    pub use crate::generate::{Alphabet, random_sequence};
}
