use std::f32::consts::PI;

use crate::{
    math::{Point3, Ray, Vec2, Vec3},
    sampling::spherical_direction,
    scene::{Shape, ShapeHit},
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Spheres.html

/// A sphere parameterized by `u = phi / 2pi` and `v = theta / pi` around +Z.
pub struct Sphere {
    center: Point3<f32>,
    radius: f32,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Point3<f32>, radius: f32) -> Self {
        assert!(radius > 0.0, "Sphere radius has to be positive");
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: Ray<f32>) -> Option<ShapeHit> {
        let Ray { o, d, t_max } = ray;
        let o = o - self.center;

        // Quadratic coefficients
        let a = d.len_sqr();
        let b = 2.0 * d.dot(o);
        let c = o.len_sqr() - self.radius * self.radius;

        // Solve quadratic equation for ts
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }
        let rd = disc.sqrt();

        let q = if b < 0.0 {
            -0.5 * (b - rd)
        } else {
            -0.5 * (b + rd)
        };

        // Find hit points
        let mut t0 = q / a;
        let mut t1 = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > t_max || t1 <= 0.0 {
            return None;
        }
        let mut t = t0;
        if t <= 0.0 {
            t = t1;
            if t > t_max {
                return None;
            }
        };

        let p = (o + d * t) / self.radius;
        let mut phi = p.y.atan2(p.x);
        if phi < 0.0 {
            phi += 2.0 * PI;
        }
        let theta = p.z.clamp(-1.0, 1.0).acos();

        Some(ShapeHit {
            t,
            primitive_id: 0,
            u: phi / (2.0 * PI),
            v: theta / PI,
        })
    }

    fn normal(&self, _primitive_id: usize, u: f32, v: f32) -> Vec3<f32> {
        let (sin_theta, cos_theta) = (v * PI).sin_cos();
        spherical_direction(sin_theta, cos_theta, u * 2.0 * PI)
    }

    fn texture_coord(&self, _primitive_id: usize, u: f32, v: f32) -> Vec2<f32> {
        Vec2::new(u, v)
    }
}
