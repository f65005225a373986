//! Matrix element type constraints
//!
//! Values are signed integers. Every arithmetic step goes through the
//! checked operations below, so overflow surfaces as an error instead of
//! wrapping.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::num::ParseIntError;
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - Eq + Hash: Exact comparison, no floating point
/// - Display + FromStr: Round-trip through the text format
pub trait MatrixElement:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = ParseIntError> + Send + Sync + 'static
{
    /// The additive identity; never stored
    const ZERO: Self;

    /// Short type name used in logs
    const NAME: &'static str;

    /// Sum, or `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Difference, or `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Product, or `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Whether this value would be dropped by `set`
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;
                const NAME: &'static str = stringify!($ty);

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

impl_matrix_element!(i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_ops() {
        assert_eq!(MatrixElement::checked_add(2i64, 3), Some(5));
        assert_eq!(MatrixElement::checked_sub(2i32, 3), Some(-1));
        assert_eq!(MatrixElement::checked_mul(i32::MAX, 2), None);
        assert_eq!(MatrixElement::checked_add(i64::MAX, 1), None);
    }

    #[test]
    fn test_zero() {
        assert!(0i128.is_zero());
        assert!(!(-1i64).is_zero());
        assert_eq!(<i32 as MatrixElement>::NAME, "i32");
    }
}
