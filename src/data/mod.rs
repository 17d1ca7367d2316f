//! ## Sequence alphabets, conversions, and error types.
//!
//! ## IUPAC Standards
//!
//! Nucleotide complements follow the [IUPAC
//! definitions](https://www.bioinformatics.org/sms/iupac.html), including
//! ambiguous base calls: `R` ↔ `Y`, `K` ↔ `M`, `B` ↔ `V`, `D` ↔ `H`, while `S`,
//! `W`, and `N` are their own complements. `U` complements to `A`.
//!
//! Amino acid codes include the ambiguity codes `B` (`Asx`), `Z` (`Glx`), and
//! `X` (`Xaa`) as well as the stop `*` (`***`).
//!
//! ## Errors
//!
//! As a library, *seqdist* avoids making assumptions on the style of error
//! handling chosen by users, in particular by not adopting any error handling
//! crate as a dependency. Distance functions return [`DistanceError`], which
//! either reports sequences of different lengths or wraps a [`DomainError`]
//! when a closed-form estimate is undefined. Conversions and option parsing
//! return [`ConversionError`]. Binaries can use [`unwrap_or_fail`] to print the
//! message and exit.
//!
//! [`DistanceError`]: err::DistanceError
//! [`DomainError`]: err::DomainError
//! [`ConversionError`]: err::ConversionError
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// Reverse complements and amino acid code conversions.
pub mod convert;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for storing more fundamental types, like
/// [`Base`](self::types::base::Base).
pub mod types;

/// A private module for helper alphabets and maps that can be used within
/// public methods.
pub(crate) mod constants;

pub(crate) use constants::{alphas, mappings};
