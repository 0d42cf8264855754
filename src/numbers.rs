//! Null-safe defaults for optional numbers.

/// Replace an absent number with a fixed sentinel.
pub trait NullSafe {
    /// The unwrapped numeric type.
    type Output;

    /// Return the wrapped value, or the sentinel when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use jems::NullSafe;
    ///
    /// assert_eq!(Some(10_i32).get_null_safe(), 10);
    /// assert_eq!(None::<i32>.get_null_safe(), i32::MIN);
    /// ```
    fn get_null_safe(self) -> Self::Output;
}

macro_rules! impl_null_safe_int {
    ($($ty:ty),*) => {
        $(
            impl NullSafe for Option<$ty> {
                type Output = $ty;

                fn get_null_safe(self) -> $ty {
                    self.unwrap_or(<$ty>::MIN)
                }
            }
        )*
    };
}

impl_null_safe_int!(i16, i32, i64);

/// Smallest positive subnormal `f32`, i.e. `2^-149`.
pub const F32_MIN_POSITIVE_SUBNORMAL: f32 = f32::from_bits(1);

impl NullSafe for Option<f32> {
    type Output = f32;

    fn get_null_safe(self) -> f32 {
        self.unwrap_or(F32_MIN_POSITIVE_SUBNORMAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_sentinels() {
        assert_eq!(None::<i16>.get_null_safe(), i16::MIN);
        assert_eq!(None::<i64>.get_null_safe(), i64::MIN);
        assert_eq!(Some(-5_i16).get_null_safe(), -5);
        assert_eq!(Some(i64::MAX).get_null_safe(), i64::MAX);
    }

    #[test]
    fn test_float_sentinel_is_smallest_subnormal() {
        let sentinel = None::<f32>.get_null_safe();
        assert!(sentinel > 0.0);
        assert_eq!(sentinel.to_bits(), 1);
        assert_eq!(sentinel, f32::MIN_POSITIVE / 8_388_608.0);
        assert_eq!(Some(10.5_f32).get_null_safe(), 10.5);
    }
}
