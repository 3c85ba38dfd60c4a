mod fresnel;
pub mod ggx;
pub mod microfacet;

pub use fresnel::{f0_from_ior, Fresnel, Schlick};
pub use ggx::{GgxSampler, SamplingStrategy};
pub use microfacet::{SampleFrame, SpecularEstimate, SpecularEvaluator};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::math::{lerp, saturate, Spectrum};

/// Keeps derived roughness strictly positive.
pub const ROUGHNESS_EPSILON: f32 = 1e-3;

/// Surface description as stored in the scene.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Material {
    pub diffuse: Spectrum<f32>,
    pub specular: Spectrum<f32>,
    /// Index of refraction, non-positive when unknown
    pub ior: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: Spectrum::from(0.5),
            specular: Spectrum::zeros(),
            ior: 0.0,
        }
    }
}

/// Base colors of common metals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MetalPreset {
    Gold,
    Silver,
    Iron,
    Aluminium,
    Chromium,
}

impl MetalPreset {
    pub fn base_color(self) -> Spectrum<f32> {
        match self {
            MetalPreset::Gold => Spectrum::new(1.0, 0.766, 0.336),
            MetalPreset::Silver => Spectrum::new(0.972, 0.960, 0.915),
            MetalPreset::Iron => Spectrum::new(0.560, 0.570, 0.580),
            MetalPreset::Aluminium => Spectrum::new(0.913, 0.921, 0.925),
            MetalPreset::Chromium => Spectrum::new(0.550, 0.556, 0.554),
        }
    }
}

/// Per-render replacements for values otherwise derived from the hit [Material].
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShadingOverrides {
    pub base_color: Option<Spectrum<f32>>,
    /// Used for the base color when `base_color` isn't set
    pub metal: Option<MetalPreset>,
    pub ior: Option<f32>,
    pub roughness: Option<f32>,
    pub metallic: Option<f32>,
}

/// Inputs of the specular model at a single hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadingParams {
    pub base_color: Spectrum<f32>,
    pub ior: f32,
    /// In `[0.01, 0.99]`
    pub roughness: f32,
    /// In `[0, 1]`
    pub metallic: f32,
}

impl ShadingParams {
    /// Fills in whatever `overrides` leaves unset from `material`.
    ///
    /// Missing values are derived from the base color: `ior = 1 + r`,
    /// `roughness = g` and `metallic = b`.
    pub fn resolve(overrides: &ShadingOverrides, material: &Material) -> Self {
        let base_color = overrides
            .base_color
            .or_else(|| overrides.metal.map(MetalPreset::base_color))
            .unwrap_or(material.diffuse);

        let ior = overrides.ior.unwrap_or(if material.ior > 0.0 {
            material.ior
        } else {
            1.0 + base_color.r
        });
        let roughness = overrides
            .roughness
            .unwrap_or_else(|| saturate(base_color.g - ROUGHNESS_EPSILON) + ROUGHNESS_EPSILON);
        let metallic = overrides.metallic.unwrap_or(base_color.b);

        Self {
            base_color,
            ior: ior.max(f32::EPSILON),
            roughness: ggx::clamp_roughness(roughness),
            metallic: saturate(metallic),
        }
    }

    /// Reflectance at normal incidence, blended from the dielectric value toward the base color.
    pub fn f0(&self) -> Spectrum<f32> {
        lerp(
            Spectrum::from(f0_from_ior(self.ior)),
            self.base_color,
            self.metallic,
        )
    }
}
