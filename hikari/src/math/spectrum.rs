use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

use super::common::{saturate, ValueType};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Spectrum<T>
where
    T: ValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

impl_component_ops!(Spectrum [r 0 g 1 b 2]);

impl<T> Mul for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
        }
    }
}

impl<T> Div for Spectrum<T>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        Self {
            r: self.r / other.r,
            g: self.g / other.g,
            b: self.b / other.b,
        }
    }
}

impl<T> Spectrum<T>
where
    T: ValueType,
{
    /// Returns `true` if all components are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Finds the value of the maximum component.
    #[inline]
    pub fn max_comp(&self) -> T {
        self.r.maxi(self.g.maxi(self.b))
    }
}

impl Spectrum<f32> {
    /// Clamps every component into `[0, 1]`.
    #[inline]
    pub fn saturated(&self) -> Self {
        Self::new(saturate(self.r), saturate(self.g), saturate(self.b))
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}
