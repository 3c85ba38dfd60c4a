use super::{Point3, Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

/// A half-line with a maximum parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T>
where
    T: super::ValueType,
{
    /// Origin
    pub o: Point3<T>,
    /// Direction, not required to be unit length
    pub d: Vec3<T>,
    /// Parameter past which hits are ignored
    pub t_max: T,
}

impl Ray<f32> {
    /// Creates a new `Ray`.
    pub fn new(o: Point3<f32>, d: Vec3<f32>, t_max: f32) -> Self {
        Self { o, d, t_max }
    }

    /// Returns the point at parameter `t` along this `Ray`.
    #[inline]
    pub fn point(&self, t: f32) -> Point3<f32> {
        self.o + self.d * t
    }
}
