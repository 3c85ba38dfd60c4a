use serde::{Deserialize, Serialize};

use super::{facing_normal, Integrator, RadianceResult};
use crate::{
    materials::{ShadingOverrides, ShadingParams, SpecularEvaluator},
    math::{Ray, Vec3},
    renderer::RenderContext,
    sampling::Sampler,
    scene::Intersector,
};

/// Direction the specular lobe is evaluated toward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub enum ViewVector {
    /// Back along the camera ray
    #[default]
    Camera,
    /// The same world space direction for every pixel. Has to be non-zero.
    Fixed(Vec3<f32>),
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Params {
    /// Specular samples per shading point
    pub sample_count: u32,
    pub view: ViewVector,
    pub overrides: ShadingOverrides,
    pub evaluator: SpecularEvaluator,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            sample_count: 64,
            view: ViewVector::default(),
            overrides: ShadingOverrides::default(),
            evaluator: SpecularEvaluator::default(),
        }
    }
}

/// Lights primary hits with the environment through a diffuse term and a sampled GGX specular lobe.
pub struct GgxEnvironment {
    params: Params,
}

impl GgxEnvironment {
    pub fn new(params: Params) -> Self {
        Self { params }
    }
}

impl Integrator for GgxEnvironment {
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

        // Shade the side facing the ray origin
        let n = facing_normal(ctx.scene.normal(&hit), ray.d);
        let view = match self.params.view {
            ViewVector::Camera => -ray.d,
            ViewVector::Fixed(d) => d,
        };

        let shading = ShadingParams::resolve(&self.params.overrides, ctx.scene.material(&hit));
        let specular = self.params.evaluator.evaluate(
            ctx.environment,
            n,
            view,
            shading.roughness,
            shading.f0(),
            self.params.sample_count,
            sampler,
        );

        let diffuse = specular.diffuse_weight(shading.metallic)
            * shading.base_color
            * ctx.environment.texel(n);

        RadianceResult {
            li: diffuse + specular.radiance,
            ray_scene_intersections: 1,
        }
    }
}
