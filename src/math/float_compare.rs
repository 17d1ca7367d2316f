/// An enum for the provided floating point comparison methods.
///
/// <div class="warning">
///
/// **Warning**
///
/// This is an implementation detail and *should not* be called directly! Use
/// [`assert_fp_eq`](crate::assert_fp_eq) instead.
///
/// </div>
#[doc(hidden)]
pub enum NearlyEqualStrategy<T> {
    /// Compare the floating point values using relative error with a tolerance
    /// of `eps`
    Relative { eps: T },
    /// Compare the floating point values using absolute error with a tolerance
    /// of `eps`
    Absolute { eps: T },
}

/// A trait for enabling equality comparisons involving floating point numbers.
/// `T` is the underlying floating point type (and the type used for the
/// tolerance).
///
/// The second value in the returned tuple holds the pair of floats responsible
/// for an inequality, when there is one.
#[doc(hidden)]
pub trait NearlyEqual<T> {
    fn nearly_equal(&self, b: &Self, strategy: &NearlyEqualStrategy<T>) -> (bool, Option<(T, T)>);
}

/// Implement [`NearlyEqual`] for floating point primitives.
macro_rules! impl_float_nearly_equal {
    {$($ty:ty),* } => {
        $(
            impl NearlyEqual<$ty> for $ty {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn nearly_equal(&self, b: &Self, strategy: &NearlyEqualStrategy<$ty>) -> (bool, Option<($ty, $ty)>) {
                    let (a, b) = (*self, *b);
                    let eq = match strategy {
                        // Relative error port courtesy of
                        // <https://floating-point-gui.de/errors/comparison/>
                        NearlyEqualStrategy::Relative { eps } => {
                            let diff = (a - b).abs();
                            if a == b {
                                true
                            } else if a == 0.0 || b == 0.0 || (a.abs() + b.abs() < <$ty>::MIN_POSITIVE) {
                                diff < *eps * <$ty>::MIN_POSITIVE
                            } else {
                                diff / (a.abs() + b.abs()).min(<$ty>::MAX) < *eps
                            }
                        }
                        NearlyEqualStrategy::Absolute { eps } => a == b || (a - b).abs() < *eps,
                    };

                    if eq { (true, None) } else { (false, Some((a, b))) }
                }
            }
        )*
    }
}

impl_float_nearly_equal!(f32, f64);

impl<T: Copy, S: NearlyEqual<T>, const N: usize> NearlyEqual<T> for [S; N] {
    #[inline]
    fn nearly_equal(&self, b: &Self, strategy: &NearlyEqualStrategy<T>) -> (bool, Option<(T, T)>) {
        for (eq, vals) in self.iter().zip(b).map(|(x, y)| x.nearly_equal(y, strategy)) {
            if !eq {
                return (false, vals);
            }
        }
        (true, None)
    }
}

impl<T, S: NearlyEqual<T>> NearlyEqual<T> for Option<S> {
    #[inline]
    fn nearly_equal(&self, b: &Self, strategy: &NearlyEqualStrategy<T>) -> (bool, Option<(T, T)>) {
        match (self, b) {
            (Some(x), Some(y)) => x.nearly_equal(y, strategy),
            (None, None) => (true, None),
            _ => (false, None),
        }
    }
}

/// Assert that two floating point values are approximately equal.
///
/// The most basic usage of this macro is:
/// ```
/// # use seqdist::assert_fp_eq;
/// assert_fp_eq!(3.0, 1.0 + 2.0);
/// ```
///
/// This uses a default tolerance of $\epsilon=10^{-8}$ and compares the floats
/// using relative error. A third argument sets the tolerance, and the method
/// can be switched to absolute error:
/// ```
/// # use seqdist::assert_fp_eq;
/// assert_fp_eq!(3.0, 2.99999, 1e-4);
/// assert_fp_eq!(@absolute, 1e-10, 2e-10, 1e-8);
/// assert_fp_eq!([0.25, 0.75], [0.25, 0.7500000001]);
/// ```
#[macro_export]
macro_rules! assert_fp_eq {
    ($(@$method:tt,)? $a:expr, $b:expr) => {
        $crate::assert_fp_eq!($(@$method,)? $a, $b, 1e-8);
    };
    ($(@relative,)? $a:expr, $b:expr, $epsilon:expr) => {
        $crate::assert_fp_eq!(@strategy, $a, $b, $epsilon, $crate::math::NearlyEqualStrategy::Relative { eps: $epsilon });
    };
    (@absolute, $a:expr, $b:expr, $epsilon:expr) => {
        $crate::assert_fp_eq!(@strategy, $a, $b, $epsilon, $crate::math::NearlyEqualStrategy::Absolute { eps: $epsilon });
    };
    (@strategy, $a:expr, $b:expr, $epsilon:expr, $strategy:expr) => {
        let (eq, vals) = $crate::math::NearlyEqual::nearly_equal(&$a, &$b, &$strategy);
        if !eq {
            if let Some((a, b)) = vals {
                panic!("assertion failed: `(found ≈ expected)`\n left:\t`{:?}`,\n right:\t`{:?}`,\n eps:\t`{}`,\n\n Caused by the comparison of:\n left:\t`{:?}`,\n right:\t`{:?}`", $a, $b, $epsilon, a, b)
            } else {
                panic!("assertion failed: `(found ≈ expected)`\n left:\t`{:?}`,\n right:\t`{:?}`,\n eps:\t`{}`", $a, $b, $epsilon)
            }
        }
    };
}
