use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// A closed-form correction was evaluated outside of its valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DomainError {
    /// The argument to a logarithm was zero or negative.
    NonPositiveLogarithm,
    /// The argument to a square root was negative.
    NegativeSquareRoot,
    /// A denominator, such as a sequence length or a frequency product, was
    /// zero.
    DivisionByZero,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let message = match self {
            DomainError::NonPositiveLogarithm => "cannot compute logarithm of a non-positive number",
            DomainError::NegativeSquareRoot => "cannot compute square root of a negative number",
            DomainError::DivisionByZero => "cannot divide by zero",
        };

        write!(f, "{message}")
    }
}

impl std::error::Error for DomainError {}

impl GetCode for DomainError {}

/// Errors produced by the pairwise distance and frequency functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DistanceError {
    /// The two sequences had different lengths. Sequences must already be
    /// aligned.
    LengthMismatch { left: usize, right: usize },
    /// The estimator could not be evaluated for these sequences.
    Domain(DomainError),
}

impl DistanceError {
    /// Whether the error came from the numeric guard rather than from the
    /// inputs' shape.
    #[inline]
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, DistanceError::Domain(_))
    }
}

impl Display for DistanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DistanceError::LengthMismatch { left, right } => {
                write!(f, "cannot compare sequences with different lengths ({left} and {right})")
            }
            DistanceError::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DistanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DistanceError::Domain(e) => Some(e),
            DistanceError::LengthMismatch { .. } => None,
        }
    }
}

impl From<DomainError> for DistanceError {
    #[inline]
    fn from(e: DomainError) -> Self {
        DistanceError::Domain(e)
    }
}

impl GetCode for DistanceError {}

/// Errors produced when converting between sequence representations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConversionError {
    /// A byte had no mapping in the requested table.
    InvalidSymbol(u8),
    /// A named option (such as a conversion type or alphabet) was not
    /// recognized.
    InvalidOption(String),
    /// A three-letter amino acid sequence ended with a partial code.
    IncompleteCodon,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConversionError::InvalidSymbol(b) if b.is_ascii_graphic() => {
                write!(f, "unrecognized symbol '{}'", char::from(*b))
            }
            ConversionError::InvalidSymbol(b) => write!(f, "unrecognized byte 0x{b:02X}"),
            ConversionError::InvalidOption(option) => write!(f, "invalid option '{option}'"),
            ConversionError::IncompleteCodon => {
                write!(f, "three-letter amino acid sequence length is not a multiple of three")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl GetCode for ConversionError {}
