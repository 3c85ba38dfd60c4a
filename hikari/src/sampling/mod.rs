mod uniform;

pub use uniform::UniformSampler;

use crate::math::{Vec2, Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Sampling_and_Reconstruction/Sampling_Interface.html

/// Source of uniform random numbers in `[0, 1)`.
pub trait Sampler: Send + Sync {
    /// Clones a `Sampler` that draws from the given prng `stream`.
    fn clone_seeded(&self, stream: u64) -> Box<dyn Sampler>;
    /// Returns the next uniform sample.
    fn get_1d(&mut self) -> f32;
    /// Returns the next two uniform samples.
    fn get_2d(&mut self) -> Vec2<f32>;
}

/// Converts spherical coordinates around +Z to a unit vector.
#[inline]
pub fn spherical_direction(sin_theta: f32, cos_theta: f32, phi: f32) -> Vec3<f32> {
    Vec3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}
