use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::{Float, Num};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Generic types that can be stored in the math containers.
pub trait ValueType:
    Num
    + PartialOrd
    + ToPrimitive
    + FromPrimitive
    + Copy
    + AddAssign
    + DivAssign
    + MulAssign
    + SubAssign
    + std::fmt::Debug
{
    /// Returns the smaller of `self` and `other`.
    fn mini(self, other: Self) -> Self;
    /// Returns the larger of `self` and `other`.
    fn maxi(self, other: Self) -> Self;
}

/// Floating point [ValueType]s.
pub trait FloatValueType: ValueType + Float {}

impl<T> FloatValueType for T where T: ValueType + Float {}

macro_rules! impl_value_type {
    ( $( $t:ty ),+ ) => {
        $(
            impl ValueType for $t {
                #[inline]
                fn mini(self, other: $t) -> $t {
                    if other < self {
                        other
                    } else {
                        self
                    }
                }

                #[inline]
                fn maxi(self, other: $t) -> $t {
                    if other > self {
                        other
                    } else {
                        self
                    }
                }
            }
        )*
    };
}
impl_value_type!(f32, f64, u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// Clamps `v` into `[0, 1]`.
#[inline]
pub fn saturate(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Linear interpolation from `a` at `t = 0` to `b` at `t = 1`.
#[inline]
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: std::ops::Mul<f32, Output = T> + std::ops::Add<Output = T>,
{
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::{lerp, saturate, ValueType};

    #[test]
    fn mini_maxi() {
        assert_eq!(3u16.mini(5), 3);
        assert_eq!(3u16.maxi(5), 5);
        assert_eq!((-1.0f32).mini(2.0), -1.0);
        assert_eq!((-1.0f32).maxi(2.0), 2.0);
    }

    #[test]
    fn saturate_clamps() {
        assert_eq!(saturate(-0.5), 0.0);
        assert_eq!(saturate(0.25), 0.25);
        assert_eq!(saturate(7.0), 1.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0f32, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0f32, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0f32, 4.0, 0.5), 3.0);
    }
}
