use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{
    fresnel::{Fresnel, Schlick},
    ggx::{clamp_roughness, GgxSampler},
};
use crate::{
    math::{saturate, Frame, FrameHelper, Spectrum, Vec3},
    sampling::Sampler,
    textures::Environment,
};

// Cook-Torrance with a GGX distribution, integrated against an environment
// http://www.codinglabs.net/article_physically_based_rendering_cook_torrance.aspx

/// Keeps the Cook-Torrance denominator away from zero.
const DENOMINATOR_BIAS: f32 = 0.05;

/// Axis the GGX lobe is centered on in world space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Display, EnumString)]
pub enum SampleFrame {
    /// The view direction mirrored about the normal
    #[default]
    Reflection,
    /// The surface normal
    Normal,
}

/// Monte Carlo estimate of the specular lobe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpecularEstimate {
    /// Mean reflected radiance
    pub radiance: Spectrum<f32>,
    /// Mean Fresnel weight, in `[0,1]`
    pub mean_fresnel: Spectrum<f32>,
}

impl SpecularEstimate {
    pub fn zeros() -> Self {
        Self {
            radiance: Spectrum::zeros(),
            mean_fresnel: Spectrum::zeros(),
        }
    }

    /// Weight left for the diffuse lobe.
    pub fn diffuse_weight(&self, metallic: f32) -> Spectrum<f32> {
        (Spectrum::ones() - self.mean_fresnel) * (1.0 - metallic)
    }
}

/// Smith-style masking of `v` by microfacets with half-vector `h`.
///
/// The usual `chi(V.H / V.N)` factor is folded into `V.H > 0` since `V.N` is saturated.
pub fn partial_geometry(v: Vec3<f32>, h: Vec3<f32>, alpha: f32) -> f32 {
    let v_o_h = saturate(v.dot(h));
    if v_o_h <= 0.0 {
        return 0.0;
    }

    let v_o_h_2 = v_o_h * v_o_h;
    let tan_2 = (1.0 - v_o_h_2) / v_o_h_2;
    2.0 / (1.0 + (1.0 + alpha * alpha * tan_2).sqrt())
}

/// Estimates environment light reflected by a GGX microfacet surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpecularEvaluator {
    pub ggx: GgxSampler,
    pub frame: SampleFrame,
    pub frame_helper: FrameHelper,
}

impl SpecularEvaluator {
    /// Estimates reflected radiance toward `view` with `sample_count` samples.
    ///
    /// `normal` and `view` both point away from the surface and don't need to be normalized.
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate(
        &self,
        env: &dyn Environment,
        normal: Vec3<f32>,
        view: Vec3<f32>,
        roughness: f32,
        f0: Spectrum<f32>,
        sample_count: u32,
        sampler: &mut dyn Sampler,
    ) -> SpecularEstimate {
        if sample_count == 0 {
            return SpecularEstimate::zeros();
        }

        let n = normal.normalized();
        let v = view.normalized();
        let alpha = clamp_roughness(roughness);
        let n_o_v = saturate(n.dot(v));
        let fresnel = Schlick::new(f0);

        let lobe_axis = match self.frame {
            SampleFrame::Reflection => v.reflected(n).normalized(),
            SampleFrame::Normal => n,
        };
        let frame = Frame::with_helper(lobe_axis, self.frame_helper);

        let mut radiance = Spectrum::zeros();
        let mut fresnel_sum = Spectrum::zeros();
        for _ in 0..sample_count {
            let wi = frame.to_world(self.ggx.sample(alpha, sampler));

            let h = {
                let h = wi + v;
                // wi opposite to v has no well defined half-vector
                if h.len_sqr() == 0.0 {
                    n
                } else {
                    h.normalized()
                }
            };

            let cos_theta = saturate(wi.dot(n));
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

            let f = fresnel.evaluate(saturate(h.dot(v)));
            let g = partial_geometry(v, h, alpha) * partial_geometry(wi, h, alpha);
            let denominator = saturate(4.0 * (n_o_v * saturate(h.dot(n)) + DENOMINATOR_BIAS));

            radiance += env.texel(wi) * f * (g * sin_theta / denominator);
            fresnel_sum += f;
        }

        let inv_count = 1.0 / sample_count as f32;
        SpecularEstimate {
            radiance: radiance * inv_count,
            mean_fresnel: (fresnel_sum * inv_count).saturated(),
        }
    }
}
