mod geometry_term;
mod ggx_environment;
mod ggx_irradiance;
mod normals;

pub use geometry_term::GeometryTerm;
pub use ggx_environment::{GgxEnvironment, ViewVector};
pub use ggx_irradiance::GgxIrradiance;
pub use normals::Normals;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::{
    film::FilmTile,
    math::{Ray, Spectrum, Vec2, Vec3},
    renderer::RenderContext,
    sampling::Sampler,
};

pub type GgxEnvironmentParams = ggx_environment::Params;
pub type GeometryTermParams = geometry_term::Params;
pub type GgxIrradianceParams = ggx_irradiance::Params;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize, Display, EnumVariantNames, EnumString)]
pub enum IntegratorType {
    GgxEnvironment(ggx_environment::Params),
    Normals,
    GeometryTerm(geometry_term::Params),
    GgxIrradiance(ggx_irradiance::Params),
}

impl IntegratorType {
    pub fn instantiate(self) -> Box<dyn Integrator> {
        match self {
            IntegratorType::GgxEnvironment(params) => Box::new(GgxEnvironment::new(params)),
            IntegratorType::Normals => Box::new(Normals {}),
            IntegratorType::GeometryTerm(params) => Box::new(GeometryTerm::new(params)),
            IntegratorType::GgxIrradiance(params) => Box::new(GgxIrradiance::new(params)),
        }
    }
}

#[allow(clippy::derivable_impls)] // Can't derive Default for non unit variants
impl Default for IntegratorType {
    fn default() -> Self {
        IntegratorType::GgxEnvironment(ggx_environment::Params::default())
    }
}

/// Returns the normalized `n`, flipped to face against `d`.
fn facing_normal(n: Vec3<f32>, d: Vec3<f32>) -> Vec3<f32> {
    let n = n.normalized();
    if n.dot(d) > 0.0 {
        -n
    } else {
        n
    }
}

pub struct RadianceResult {
    pub li: Spectrum<f32>,
    pub ray_scene_intersections: usize,
}

impl Default for RadianceResult {
    fn default() -> Self {
        Self {
            li: Spectrum::zeros(),
            ray_scene_intersections: 0,
        }
    }
}

// Public interface for scene integrators.
pub trait Integrator {
    /// Evaluates the incoming radiance along `ray`. Also returns the number of rays intersected with the scene.
    fn li(&self, ray: Ray<f32>, ctx: &RenderContext, sampler: &mut dyn Sampler) -> RadianceResult;

    /// Renders the given `Tile` through pixel centers. Returns the number of rays intersected with the scene.
    fn render(&self, ctx: &RenderContext, sampler: &dyn Sampler, tile: &mut FilmTile) -> usize {
        let tile_width = tile.bb.width() as usize;

        // Init per tile to get the same results regardless of which threads take which tiles
        let mut sampler = sampler.clone_seeded(tile.index as u64);

        let mut ray_count = 0;
        for p in tile.bb {
            let p_film = Vec2::new(p.x as f32 + 0.5, p.y as f32 + 0.5);
            let ray = ctx.camera.ray(p_film);

            let result = self.li(ray, ctx, sampler.as_mut());
            ray_count += result.ray_scene_intersections;

            let Vec2 {
                x: tile_x,
                y: tile_y,
            } = p - tile.bb.p_min;
            let pixel_offset = (tile_y as usize) * tile_width + (tile_x as usize);
            tile.pixels[pixel_offset] = result.li;
        }
        ray_count
    }
}
