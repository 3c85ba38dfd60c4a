use crate::{
    math::{Point3, Ray, Vec2, Vec3},
    scene::{Shape, ShapeHit},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Triangle_Meshes.html

/// An indexed triangle mesh with optional per-vertex normals and texture coordinates.
///
/// Hits report the triangle index as the primitive and the barycentrics of
/// its second and third vertex as `u` and `v`.
pub struct Mesh {
    pub points: Vec<Point3<f32>>,
    /// Per-vertex normals, empty to use the geometric normal
    pub normals: Vec<Vec3<f32>>,
    /// Per-vertex texture coordinates, empty to use the barycentrics
    pub uvs: Vec<Vec2<f32>>,
    /// Three vertex indices per triangle, counter clockwise
    pub indices: Vec<usize>,
}

impl Mesh {
    /// Creates a new `Mesh`.
    pub fn new(
        points: Vec<Point3<f32>>,
        normals: Vec<Vec3<f32>>,
        uvs: Vec<Vec2<f32>>,
        indices: Vec<usize>,
    ) -> Self {
        assert!(indices.len() % 3 == 0, "Mesh indices don't form triangles");
        assert!(indices.iter().all(|&i| i < points.len()));
        assert!(normals.is_empty() || normals.len() == points.len());
        assert!(uvs.is_empty() || uvs.len() == points.len());

        Self {
            points,
            normals,
            uvs,
            indices,
        }
    }

    /// Creates a quad from four corners in counter clockwise order.
    pub fn quad(corners: [Point3<f32>; 4]) -> Self {
        Self::new(
            corners.to_vec(),
            Vec::new(),
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn vertices(&self, triangle: usize) -> [usize; 3] {
        let first = triangle * 3;
        [
            self.indices[first],
            self.indices[first + 1],
            self.indices[first + 2],
        ]
    }

    // Returns the hit distance and barycentrics
    fn intersect_triangle(&self, triangle: usize, ray: Ray<f32>) -> Option<(f32, [f32; 3])> {
        let [i0, i1, i2] = self.vertices(triangle);
        let (p, z_scale) = to_ray_space([self.points[i0], self.points[i1], self.points[i2]], ray);

        let e = edge_functions(p);
        let inside_ccw = e.iter().all(|&e| e >= 0.0);
        let inside_cw = e.iter().all(|&e| e <= 0.0);
        if !inside_ccw && !inside_cw {
            return None;
        }

        // Zero when the ray grazes the triangle's plane
        let det: f32 = e.iter().sum();
        if det == 0.0 {
            return None;
        }

        let t_scaled: f32 = e.iter().zip(&p).map(|(e, p)| e * p.z * z_scale).sum();
        let t = t_scaled / det;
        if t <= 0.0 || t > ray.t_max {
            return None;
        }

        Some((t, e.map(|e| e / det)))
    }
}

/// Translates, permutes and shears `points` so that `ray` starts at the origin and points down +Z.
///
/// Z is left unscaled, multiplying it with the returned factor gives distances along the ray.
fn to_ray_space(points: [Point3<f32>; 3], ray: Ray<f32>) -> ([Vec3<f32>; 3], f32) {
    // Largest direction component becomes Z so the shear never divides by zero
    let kz = ray.d.abs().max_dimension();
    let kx = (kz + 1) % 3;
    let ky = (kx + 1) % 3;
    let d = ray.d.permuted(kx, ky, kz);
    let shear_x = -d.x / d.z;
    let shear_y = -d.y / d.z;

    let to_local = |p: Point3<f32>| {
        let mut p = (p - ray.o).permuted(kx, ky, kz);
        p.x += shear_x * p.z;
        p.y += shear_y * p.z;
        p
    };
    (points.map(to_local), 1.0 / d.z)
}

/// Twice the signed areas, seen down +Z, of the sub-triangles opposite each vertex.
fn edge_functions([p0, p1, p2]: [Vec3<f32>; 3]) -> [f32; 3] {
    let edge = |a: Vec3<f32>, b: Vec3<f32>| a.x * b.y - a.y * b.x;
    let e = [edge(p1, p2), edge(p2, p0), edge(p0, p1)];
    if !e.contains(&0.0) {
        return e;
    }

    // Exact zeros get another look in double precision so shared edges stay watertight
    let edge = |a: Vec3<f32>, b: Vec3<f32>| {
        ((a.x as f64) * (b.y as f64) - (a.y as f64) * (b.x as f64)) as f32
    };
    [edge(p1, p2), edge(p2, p0), edge(p0, p1)]
}

impl Shape for Mesh {
    fn intersect(&self, mut ray: Ray<f32>) -> Option<ShapeHit> {
        let mut closest = None;
        for triangle in 0..self.triangle_count() {
            if let Some((t, [_, b1, b2])) = self.intersect_triangle(triangle, ray) {
                ray.t_max = t;
                closest = Some(ShapeHit {
                    t,
                    primitive_id: triangle,
                    u: b1,
                    v: b2,
                });
            }
        }
        closest
    }

    fn normal(&self, primitive_id: usize, u: f32, v: f32) -> Vec3<f32> {
        let [i0, i1, i2] = self.vertices(primitive_id);
        if self.normals.is_empty() {
            let p0 = self.points[i0];
            (self.points[i1] - p0).cross(self.points[i2] - p0)
        } else {
            self.normals[i0] * (1.0 - u - v) + self.normals[i1] * u + self.normals[i2] * v
        }
    }

    fn texture_coord(&self, primitive_id: usize, u: f32, v: f32) -> Vec2<f32> {
        if self.uvs.is_empty() {
            return Vec2::new(u, v);
        }
        let [i0, i1, i2] = self.vertices(primitive_id);
        self.uvs[i0] * (1.0 - u - v) + self.uvs[i1] * u + self.uvs[i2] * v
    }
}
