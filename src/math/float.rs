use crate::data::err::DomainError;

/// Checked floating point operations used by the distance estimators. Each
/// operation either produces a finite value or reports why it could not,
/// rather than letting `NaN` or an infinity leak into a distance.
pub trait CheckedFloat: Sized + Copy {
    /// Natural logarithm, failing with [`DomainError::NonPositiveLogarithm`]
    /// when `self <= 0` (or is `NaN`).
    ///
    /// # Errors
    ///
    /// See above.
    fn checked_ln(self) -> Result<Self, DomainError>;

    /// Square root, failing with [`DomainError::NegativeSquareRoot`] when
    /// `self < 0` (or is `NaN`).
    ///
    /// # Errors
    ///
    /// See above.
    fn checked_sqrt(self) -> Result<Self, DomainError>;

    /// Division, failing with [`DomainError::DivisionByZero`] when `rhs` is
    /// zero.
    ///
    /// # Errors
    ///
    /// See above.
    fn checked_quotient(self, rhs: Self) -> Result<Self, DomainError>;

    /// Passes finite values through and maps `NaN` or infinities to
    /// [`DomainError::DivisionByZero`], which is the only way the estimators
    /// can produce them once the other guards have passed.
    ///
    /// # Errors
    ///
    /// See above.
    fn into_finite(self) -> Result<Self, DomainError>;
}

/// Implement [`CheckedFloat`] for multiple floating point primitive types
macro_rules! impl_checked_float {
    {$($ty:ty),* } => {
        $(
        impl CheckedFloat for $ty {
            #[inline]
            fn checked_ln(self) -> Result<Self, DomainError> {
                if self > 0.0 {
                    Ok(self.ln())
                } else {
                    Err(DomainError::NonPositiveLogarithm)
                }
            }

            #[inline]
            fn checked_sqrt(self) -> Result<Self, DomainError> {
                if self >= 0.0 {
                    Ok(self.sqrt())
                } else {
                    Err(DomainError::NegativeSquareRoot)
                }
            }

            #[inline]
            fn checked_quotient(self, rhs: Self) -> Result<Self, DomainError> {
                if rhs == 0.0 {
                    Err(DomainError::DivisionByZero)
                } else {
                    (self / rhs).into_finite()
                }
            }

            #[inline]
            fn into_finite(self) -> Result<Self, DomainError> {
                if self.is_finite() {
                    Ok(self)
                } else {
                    Err(DomainError::DivisionByZero)
                }
            }
        } )*
     }
}

impl_checked_float!(f32, f64);
