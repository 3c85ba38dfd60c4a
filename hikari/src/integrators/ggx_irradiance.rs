use serde::{Deserialize, Serialize};

use super::{facing_normal, Integrator, RadianceResult};
use crate::{
    materials::GgxSampler,
    math::{Frame, FrameHelper, Ray, Spectrum},
    renderer::RenderContext,
    sampling::Sampler,
    scene::Intersector,
};

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    pub sample_count: u32,
    pub roughness: f32,
    pub ggx: GgxSampler,
    pub frame_helper: FrameHelper,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            sample_count: 64,
            roughness: 0.5,
            ggx: GgxSampler::default(),
            frame_helper: FrameHelper::default(),
        }
    }
}

/// Averages environment radiance over GGX directions around the shading normal.
///
/// Shows where the sampled lobe lands on the environment without any BRDF weighting.
pub struct GgxIrradiance {
    params: Params,
}

impl GgxIrradiance {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Integrator for GgxIrradiance {
    fn li(&self, ray: Ray<f32>, ctx: &RenderContext, sampler: &mut dyn Sampler) -> RadianceResult {
        let li = match ctx.scene.intersect(ray) {
            Some(hit) if self.params.sample_count > 0 => {
                let n = facing_normal(ctx.scene.normal(&hit), ray.d);
                let frame = Frame::with_helper(n, self.params.frame_helper);

                let mut sum = Spectrum::zeros();
                for _ in 0..self.params.sample_count {
                    let wi = frame.to_world(self.params.ggx.sample(self.params.roughness, sampler));
                    sum += ctx.environment.texel(wi);
                }
                sum / self.params.sample_count as f32
            }
            Some(_) => Spectrum::zeros(),
            None => ctx.environment.texel(ray.d),
        };

        RadianceResult {
            li,
            ray_scene_intersections: 1,
        }
    }
}
