use serde::{Deserialize, Serialize};

use super::{facing_normal, Integrator, RadianceResult};
use crate::{
    materials::{ggx::clamp_roughness, microfacet::partial_geometry, GgxSampler, SampleFrame},
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
    pub frame: SampleFrame,
    pub frame_helper: FrameHelper,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            sample_count: 64,
            roughness: 0.5,
            ggx: GgxSampler::default(),
            frame: SampleFrame::default(),
            frame_helper: FrameHelper::default(),
        }
    }
}

/// Shows the mean Smith masking-shadowing `G1(v,h) * G1(wi,h)` over GGX samples as gray.
/// Misses show the environment.
pub struct GeometryTerm {
    params: Params,
}

impl GeometryTerm {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Integrator for GeometryTerm {
    fn li(&self, ray: Ray<f32>, ctx: &RenderContext, sampler: &mut dyn Sampler) -> RadianceResult {
        let hit = match ctx.scene.intersect(ray) {
            Some(hit) => hit,
            None => {
                return RadianceResult {
                    li: ctx.environment.texel(ray.d),
                    ray_scene_intersections: 1,
                }
            }
        };

        let mut li = Spectrum::zeros();
        if self.params.sample_count > 0 {
            let n = facing_normal(ctx.scene.normal(&hit), ray.d);
            let v = -ray.d.normalized();
            let alpha = clamp_roughness(self.params.roughness);

            let lobe_axis = match self.params.frame {
                SampleFrame::Reflection => v.reflected(n).normalized(),
                SampleFrame::Normal => n,
            };
            let frame = Frame::with_helper(lobe_axis, self.params.frame_helper);

            let mut sum = 0.0;
            for _ in 0..self.params.sample_count {
                let wi = frame.to_world(self.params.ggx.sample(alpha, sampler));
                let h = (wi + v).normalized();
                sum += partial_geometry(v, h, alpha) * partial_geometry(wi, h, alpha);
            }
            li = Spectrum::from(sum / self.params.sample_count as f32);
        }

        RadianceResult {
            li,
            ray_scene_intersections: 1,
        }
    }
}
