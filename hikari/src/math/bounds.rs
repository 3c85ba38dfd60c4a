use super::{common::ValueType, vector::Vec2};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// A two-dimensional axis-aligned box. `p_max` is exclusive when iterating.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds2<T>
where
    T: ValueType,
{
    pub p_min: Vec2<T>,
    pub p_max: Vec2<T>,
}

impl<T> Bounds2<T>
where
    T: ValueType,
{
    /// Creates a new `Bounds2` spanning the two corners.
    pub fn new(p0: Vec2<T>, p1: Vec2<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    pub fn width(&self) -> T {
        self.p_max.x - self.p_min.x
    }

    pub fn height(&self) -> T {
        self.p_max.y - self.p_min.y
    }

    pub fn area(&self) -> T {
        self.width() * self.height()
    }
}

/// Iterates the integer coordinates inside a `Bounds2` in row-major order.
pub struct Bounds2Iter {
    bb: Bounds2<u16>,
    next: Option<Vec2<u16>>,
}

impl Iterator for Bounds2Iter {
    type Item = Vec2<u16>;

    fn next(&mut self) -> Option<Vec2<u16>> {
        let current = self.next?;

        let mut next = current;
        next.x += 1;
        if next.x >= self.bb.p_max.x {
            next.x = self.bb.p_min.x;
            next.y += 1;
        }
        self.next = if next.y < self.bb.p_max.y {
            Some(next)
        } else {
            None
        };

        Some(current)
    }
}

impl IntoIterator for Bounds2<u16> {
    type Item = Vec2<u16>;
    type IntoIter = Bounds2Iter;

    fn into_iter(self) -> Bounds2Iter {
        let empty = self.p_min.x >= self.p_max.x || self.p_min.y >= self.p_max.y;
        Bounds2Iter {
            bb: self,
            next: if empty { None } else { Some(self.p_min) },
        }
    }
}
