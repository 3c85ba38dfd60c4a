use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use super::{common::ValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x coordinate of the point.
    pub x: T,
    /// The y coordinate of the point.
    pub y: T,
    /// The z coordinate of the point.
    pub z: T,
}

impl<T> Point3<T>
where
    T: ValueType,
{
    /// Constructs a new point.
    ///
    /// Has a debug assert that checks for NaNs.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        #[allow(clippy::eq_op)]
        let nan = x != x || y != y || z != z;
        debug_assert!(!nan);

        Self { x, y, z }
    }

    /// Constructs the origin.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T> Add<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn add(self, v: Vec3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T> Sub<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T> Sub for Point3<T>
where
    T: ValueType,
{
    type Output = Vec3<T>;

    /// Returns the vector from `other` to `self`.
    #[inline]
    fn sub(self, other: Self) -> Vec3<T> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
