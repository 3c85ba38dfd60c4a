use serde::{Deserialize, Serialize};

use super::Vec3;

/// How [Frame::from_normal] picks the helper axis it crosses with the normal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum FrameHelper {
    /// World +Z, or world +X when the normal is within ~2.5 degrees of Z.
    #[default]
    WorldUp,
    /// Rotate the normal in the plane of its dominant of x and z.
    ComponentCompare,
}

/// A right-handed orthonormal basis with `z` along a given normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub x: Vec3<f32>,
    pub y: Vec3<f32>,
    pub z: Vec3<f32>,
}

impl Frame {
    /// Builds a frame around `n` using [FrameHelper::WorldUp].
    pub fn from_normal(n: Vec3<f32>) -> Self {
        Self::with_helper(n, FrameHelper::WorldUp)
    }

    /// Builds a frame around `n`. `n` doesn't need to be normalized.
    pub fn with_helper(n: Vec3<f32>, helper: FrameHelper) -> Self {
        let z = n.normalized();
        let x = match helper {
            FrameHelper::WorldUp => {
                let up = if z.z.abs() > 0.999 {
                    Vec3::new(1.0, 0.0, 0.0)
                } else {
                    Vec3::new(0.0, 0.0, 1.0)
                };
                up.cross(z).normalized()
            }
            FrameHelper::ComponentCompare => {
                // Already orthogonal to z, only needs scaling
                let o = if z.x.abs() > z.z.abs() {
                    Vec3::new(-z.y, z.x, 0.0)
                } else {
                    Vec3::new(0.0, -z.z, z.y)
                };
                o.normalized()
            }
        };
        let y = z.cross(x).normalized();

        Self { x, y, z }
    }

    /// Rotates `local` from this frame into world space and renormalizes.
    #[inline]
    pub fn to_world(&self, local: Vec3<f32>) -> Vec3<f32> {
        (self.x * local.x + self.y * local.y + self.z * local.z).normalized()
    }

    /// Projects `world` onto the axes of this frame.
    #[inline]
    pub fn to_local(&self, world: Vec3<f32>) -> Vec3<f32> {
        Vec3::new(world.dot(self.x), world.dot(self.y), world.dot(self.z))
    }
}
