mod shapes;

pub use shapes::{Mesh, Sphere};

use serde::{Deserialize, Serialize};

use crate::{
    hikari_info,
    materials::Material,
    math::{Point3, Ray, Vec2, Vec3},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Basic_Shape_Interface.html#Shape

/// Intersection of a ray with a single [Shape].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeHit {
    pub t: f32,
    pub primitive_id: usize,
    /// Surface parameterization of the hit point, defined by the shape
    pub u: f32,
    pub v: f32,
}

/// Intersection of a ray with the [Scene].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    /// Hit distance
    pub t: f32,
    /// Index of the hit surface in the scene
    pub surface_id: usize,
    /// Index of the hit primitive within the surface
    pub primitive_id: usize,
    pub u: f32,
    pub v: f32,
}

pub trait Shape: Send + Sync {
    /// Intersects [Ray] with this object, ignoring hits past `ray.t_max`.
    fn intersect(&self, ray: Ray<f32>) -> Option<ShapeHit>;
    /// Returns the surface normal at the given parametric position. Not necessarily normalized.
    fn normal(&self, primitive_id: usize, u: f32, v: f32) -> Vec3<f32>;
    /// Returns the texture coordinates at the given parametric position.
    fn texture_coord(&self, primitive_id: usize, u: f32, v: f32) -> Vec2<f32>;
}

/// Ray queries against a collection of surfaces.
pub trait Intersector: Send + Sync {
    /// Finds the closest hit along `ray`.
    fn intersect(&self, ray: Ray<f32>) -> Option<Hit>;
    /// Returns `true` if anything blocks `ray` before `ray.t_max`.
    fn occluded(&self, ray: Ray<f32>) -> bool {
        self.intersect(ray).is_some()
    }
}

struct Surface {
    shape: Box<dyn Shape>,
    material: Material,
}

/// Shapes with their materials. Intersection tests every shape.
#[derive(Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the shapes listed in `settings`.
    pub fn build(settings: &SceneSettings) -> Self {
        let mut scene = Self::new();
        for shape in &settings.shapes {
            match *shape {
                ShapeSettings::Sphere {
                    center,
                    radius,
                    material,
                } => {
                    scene.add(Box::new(Sphere::new(center, radius)), material);
                }
                ShapeSettings::Quad { corners, material } => {
                    scene.add(Box::new(Mesh::quad(corners)), material);
                }
            }
        }
        hikari_info!("Built a scene with {} surfaces", scene.len());
        scene
    }

    /// Adds a surface and returns its id.
    pub fn add(&mut self, shape: Box<dyn Shape>, material: Material) -> usize {
        self.surfaces.push(Surface { shape, material });
        self.surfaces.len() - 1
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Returns the unnormalized surface normal at `hit`.
    pub fn normal(&self, hit: &Hit) -> Vec3<f32> {
        self.surfaces[hit.surface_id]
            .shape
            .normal(hit.primitive_id, hit.u, hit.v)
    }

    pub fn texture_coord(&self, hit: &Hit) -> Vec2<f32> {
        self.surfaces[hit.surface_id]
            .shape
            .texture_coord(hit.primitive_id, hit.u, hit.v)
    }

    pub fn material(&self, hit: &Hit) -> &Material {
        &self.surfaces[hit.surface_id].material
    }
}

impl Intersector for Scene {
    fn intersect(&self, mut ray: Ray<f32>) -> Option<Hit> {
        let mut closest = None;
        for (surface_id, surface) in self.surfaces.iter().enumerate() {
            if let Some(ShapeHit {
                t,
                primitive_id,
                u,
                v,
            }) = surface.shape.intersect(ray)
            {
                ray.t_max = t;
                closest = Some(Hit {
                    t,
                    surface_id,
                    primitive_id,
                    u,
                    v,
                });
            }
        }
        closest
    }

    fn occluded(&self, ray: Ray<f32>) -> bool {
        self.surfaces
            .iter()
            .any(|surface| surface.shape.intersect(ray).is_some())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum ShapeSettings {
    Sphere {
        center: Point3<f32>,
        radius: f32,
        #[serde(default)]
        material: Material,
    },
    /// Corners in counter clockwise order
    Quad {
        corners: [Point3<f32>; 4],
        #[serde(default)]
        material: Material,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneSettings {
    pub shapes: Vec<ShapeSettings>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            shapes: vec![ShapeSettings::Sphere {
                center: Point3::zeros(),
                radius: 1.0,
                material: Material::default(),
            }],
        }
    }
}
