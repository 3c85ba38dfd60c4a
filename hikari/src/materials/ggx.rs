use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_2_PI, PI};
use strum::{Display, EnumIter, EnumString};

use crate::{
    math::Vec3,
    sampling::{spherical_direction, Sampler},
};

pub const MIN_ROUGHNESS: f32 = 0.01;
pub const MAX_ROUGHNESS: f32 = 0.99;

/// How [GgxSampler] picks microfacet directions.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString,
)]
pub enum SamplingStrategy {
    /// Invert the CDF of the GGX polar angle. Unbiased.
    #[default]
    InverseCdf,
    /// Invert the CDF, then accept only candidates with a scaled density above `1 - roughness`.
    /// Reproduces the look of the reference renders but is not an unbiased estimator.
    Rejection,
}

/// Draws local-space directions around +Z from the GGX distribution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GgxSampler {
    pub strategy: SamplingStrategy,
    /// Candidates drawn by [SamplingStrategy::Rejection] before giving up
    pub max_attempts: u32,
}

impl Default for GgxSampler {
    fn default() -> Self {
        Self {
            strategy: SamplingStrategy::default(),
            max_attempts: 64,
        }
    }
}

/// Clamps `roughness` into the range the sampler is defined for.
#[inline]
pub fn clamp_roughness(roughness: f32) -> f32 {
    if roughness.is_nan() {
        return MAX_ROUGHNESS;
    }
    roughness.clamp(MIN_ROUGHNESS, MAX_ROUGHNESS)
}

/// Inverts the CDF of the GGX polar angle for the uniform sample `e`.
#[inline]
pub fn sample_theta(alpha: f32, e: f32) -> f32 {
    let cos_theta_2 = (1.0 - e) / (e * (alpha * alpha - 1.0) + 1.0);
    cos_theta_2.clamp(0.0, 1.0).sqrt().acos()
}

/// The GGX density of polar angle `theta`, including the `sin(theta)` of the solid angle measure.
#[inline]
pub fn density(theta: f32, alpha: f32) -> f32 {
    let alpha_2 = alpha * alpha;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let d = (alpha_2 - 1.0) * cos_theta * cos_theta + 1.0;
    2.0 * alpha_2 * cos_theta * sin_theta / (d * d)
}

impl GgxSampler {
    pub fn new(strategy: SamplingStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Returns a unit direction in the local frame where +Z is the lobe's axis.
    pub fn sample(&self, roughness: f32, sampler: &mut dyn Sampler) -> Vec3<f32> {
        let alpha = clamp_roughness(roughness);

        let (theta, phi) = match self.strategy {
            SamplingStrategy::InverseCdf => Self::candidate(alpha, sampler),
            SamplingStrategy::Rejection => {
                let mut candidate = Self::candidate(alpha, sampler);
                for _ in 1..self.max_attempts {
                    let (theta, _) = candidate;
                    if density(theta, alpha) * FRAC_2_PI > 1.0 - alpha {
                        break;
                    }
                    candidate = Self::candidate(alpha, sampler);
                }
                candidate
            }
        };

        let (sin_theta, cos_theta) = theta.sin_cos();
        spherical_direction(sin_theta, cos_theta, phi)
    }

    fn candidate(alpha: f32, sampler: &mut dyn Sampler) -> (f32, f32) {
        let u = sampler.get_2d();
        (sample_theta(alpha, u.x), 2.0 * PI * u.y)
    }
}
