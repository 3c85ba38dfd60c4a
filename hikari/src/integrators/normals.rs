use super::{Integrator, RadianceResult};
use crate::{
    math::{Ray, Spectrum},
    renderer::RenderContext,
    sampling::Sampler,
    scene::Intersector,
};

/// Maps surface normals from `[-1,1]` to `[0,1]` colors. Misses show the environment.
pub struct Normals {}

impl Integrator for Normals {
    fn li(&self, ray: Ray<f32>, ctx: &RenderContext, _sampler: &mut dyn Sampler) -> RadianceResult {
        let color = match ctx.scene.intersect(ray) {
            Some(hit) => {
                let n = ctx.scene.normal(&hit).normalized();
                (Spectrum::new(n.x, n.y, n.z) + Spectrum::ones()) * 0.5
            }
            None => ctx.environment.texel(ray.d),
        };

        RadianceResult {
            li: color,
            ray_scene_intersections: 1,
        }
    }
}
