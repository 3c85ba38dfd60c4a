use serde::{Deserialize, Serialize};

use super::{
    common::{FloatValueType, ValueType},
    point::Point3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html

/// A two-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec2<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A three-dimensional vector.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Vec3<T>
where
    T: ValueType,
{
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

impl_component_ops!(Vec2 [x 0 y 1]);
impl_component_ops!(Vec3 [x 0 y 1 z 2]);

/// Shorthand constructor
#[inline]
pub fn vec2<T>(x: T, y: T) -> Vec2<T>
where
    T: ValueType,
{
    Vec2::new(x, y)
}

/// Shorthand constructor
#[inline]
pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T>
where
    T: ValueType,
{
    Vec3::new(x, y, z)
}

impl<T> Vec2<T>
where
    T: ValueType,
{
    /// Returns the dot product of the two vectors.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T> Vec3<T>
where
    T: ValueType,
{
    /// Returns the dot product of the two vectors.
    #[inline]
    pub fn dot(&self, other: Self) -> T {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the vector's squared length.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(*self)
    }

    /// Finds the value of the maximum component in this `Vec3`.
    #[inline]
    pub fn max_comp(&self) -> T {
        self.x.maxi(self.y.maxi(self.z))
    }

    /// Finds the index of the maximum component in this `Vec3`.
    ///
    /// Ties resolve to the lower index.
    #[inline]
    pub fn max_dimension(&self) -> usize {
        debug_assert!(!self.has_nans());

        if self.x >= self.y {
            if self.x >= self.z {
                0
            } else {
                2
            }
        } else if self.y >= self.z {
            1
        } else {
            2
        }
    }

    /// Permutes the components according to the given indices.
    #[inline]
    pub fn permuted(&self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }
}

impl<T> From<Point3<T>> for Vec3<T>
where
    T: ValueType,
{
    fn from(p: Point3<T>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl<T> Vec3<T>
where
    T: FloatValueType,
{
    /// Returns the vector's length.
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns the vector with absolute values of the components.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns the normalized vector.
    ///
    /// Normalizing a zero-length vector is a bug in the caller. Debug builds
    /// assert, release builds return +Z so that shading can carry on.
    #[inline]
    pub fn normalized(&self) -> Self {
        let len = self.len();
        debug_assert!(len > T::zero(), "Tried to normalize a zero-length vector");

        if len > T::zero() {
            *self / len
        } else {
            Self::new(T::zero(), T::zero(), T::one())
        }
    }

    /// Calculates the cross product of this `Vec3` and another `Vec3`.
    //
    // Always uses `f64` internally to avoid errors on "catastrophic cancellation".
    // http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Vectors.html#DotandCrossProduct
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        debug_assert!(!self.has_nans());
        debug_assert!(!other.has_nans());

        let to_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);
        let (v1x, v1y, v1z) = (to_f64(self.x), to_f64(self.y), to_f64(self.z));
        let (v2x, v2y, v2z) = (to_f64(other.x), to_f64(other.y), to_f64(other.z));
        let from_f64 = |v: f64| T::from_f64(v).unwrap_or_else(T::nan);

        Self {
            x: from_f64((v1y * v2z) - (v1z * v2y)),
            y: from_f64((v1z * v2x) - (v1x * v2z)),
            z: from_f64((v1x * v2y) - (v1y * v2x)),
        }
    }

    /// Mirrors this direction about `n`: `2(n·v)n - v`.
    ///
    /// Both point away from the surface.
    #[inline]
    pub fn reflected(&self, n: Self) -> Self {
        n * (T::from_f32(2.0).unwrap_or_else(T::one) * self.dot(n)) - *self
    }
}

#[cfg(test)]
mod tests {
    use super::{vec3, Vec3};
    use approx::assert_abs_diff_eq;

    #[test]
    fn ops() {
        let a = Vec3::new(1.0f32, 2.0, 3.0);
        let b = Vec3::new(4.0f32, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a[2], 3.0);
    }

    #[test]
    fn dot_cross() {
        let x = vec3(1.0f32, 0.0, 0.0);
        let y = vec3(0.0f32, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), vec3(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), vec3(0.0, 0.0, -1.0));
    }

    #[test]
    fn normalized() {
        assert_abs_diff_eq!(Vec3::new(1.0f32, 1.0, 1.0).normalized().len(), 1.0);
        assert_abs_diff_eq!(
            Vec3::new(0.0f32, 3.0, 0.0).normalized(),
            Vec3::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn normalized_zero_asserts() {
        let _ = Vec3::<f32>::zeros().normalized();
    }

    #[test]
    fn max_dimension_ties_to_lower_index() {
        assert_eq!(vec3(1.0f32, 1.0, 0.0).max_dimension(), 0);
        assert_eq!(vec3(0.0f32, 1.0, 1.0).max_dimension(), 1);
        assert_eq!(vec3(1.0f32, 0.0, 1.0).max_dimension(), 0);
        assert_eq!(vec3(0.0f32, 0.0, 1.0).max_dimension(), 2);
    }

    #[test]
    fn reflected() {
        let n = vec3(0.0f32, 0.0, 1.0);
        let v = vec3(1.0f32, 0.0, 1.0).normalized();
        assert_abs_diff_eq!(
            v.reflected(n),
            vec3(-1.0, 0.0, 1.0).normalized(),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(n.reflected(n), n);
    }
}
