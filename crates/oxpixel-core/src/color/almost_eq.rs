//! Tolerance-based equality shared by all color spaces

/// Tolerance used by the `PartialEq` impls of the color space types
pub const EPSILON: f32 = 0.001;

/// Component-wise comparison of two fixed-arity records
///
/// Returns true when every component differs by strictly less than
/// `epsilon`. Any NaN component makes the records unequal.
#[inline]
pub fn almost_equal<const N: usize>(a: [f32; N], b: [f32; N], epsilon: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < epsilon)
}

/// Approximate equality for color space values
pub trait AlmostEq {
    /// Compare with a caller-chosen tolerance
    fn almost_eq(&self, other: &Self, epsilon: f32) -> bool;
}

/// Implement `AlmostEq` and `PartialEq` (at [`EPSILON`]) over a
/// `components()` accessor.
macro_rules! impl_almost_eq {
    ($ty:ty) => {
        impl $crate::color::AlmostEq for $ty {
            #[inline]
            fn almost_eq(&self, other: &Self, epsilon: f32) -> bool {
                $crate::color::almost_equal(self.components(), other.components(), epsilon)
            }
        }

        impl PartialEq for $ty {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $crate::color::AlmostEq::almost_eq(self, other, $crate::color::EPSILON)
            }
        }
    };
}

pub(crate) use impl_almost_eq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_epsilon() {
        assert!(almost_equal([0.5, 0.25], [0.5005, 0.2495], EPSILON));
    }

    #[test]
    fn test_outside_epsilon() {
        assert!(!almost_equal([0.5, 0.25, 0.0], [0.5, 0.25, 0.01], EPSILON));
    }

    #[test]
    fn test_nan_is_never_equal() {
        assert!(!almost_equal([f32::NAN], [f32::NAN], EPSILON));
    }
}
