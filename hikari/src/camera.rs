use serde::{Deserialize, Serialize};

use crate::math::{Point3, Ray, Vec2, Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Camera_Models.html

/// Generates primary rays for points on the film.
pub trait CameraRays: Send + Sync {
    /// Returns the ray through the continuous film position `p_film`, in pixels from the top left corner.
    fn ray(&self, p_film: Vec2<f32>) -> Ray<f32>;
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraParameters {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vec3<f32>,
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, 4.0),
            target: Point3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 40.0,
        }
    }
}

/// A simple pinhole camera
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    position: Point3<f32>,
    forward: Vec3<f32>,
    // Scaled by the half extent of the image plane at distance 1
    right: Vec3<f32>,
    up: Vec3<f32>,
    res: Vec2<f32>,
}

impl Camera {
    /// Creates a new `Camera` for a film of resolution `res`.
    pub fn new(params: CameraParameters, res: Vec2<u16>) -> Self {
        let forward = (params.target - params.position).normalized();
        let right = forward.cross(params.up).normalized();
        let up = right.cross(forward);

        let res = Vec2::new(res.x as f32, res.y as f32);
        let half_height = (params.fov_y.to_radians() / 2.0).tan();
        let half_width = half_height * res.x / res.y;

        Self {
            position: params.position,
            forward,
            right: right * half_width,
            up: up * half_height,
            res,
        }
    }
}

impl CameraRays for Camera {
    fn ray(&self, p_film: Vec2<f32>) -> Ray<f32> {
        // [-1,1] with +y up
        let sx = 2.0 * p_film.x / self.res.x - 1.0;
        let sy = 1.0 - 2.0 * p_film.y / self.res.y;

        let d = (self.forward + self.right * sx + self.up * sy).normalized();
        Ray::new(self.position, d, f32::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::{Camera, CameraParameters, CameraRays};
    use crate::math::{Point3, Vec2, Vec3};
    use approx::assert_abs_diff_eq;

    #[test]
    fn center_ray_looks_at_target() {
        let camera = Camera::new(CameraParameters::default(), Vec2::new(64, 32));
        let ray = camera.ray(Vec2::new(32.0, 16.0));
        assert_eq!(ray.o, Point3::new(0.0, 0.0, 4.0));
        assert_abs_diff_eq!(ray.d, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn corners_follow_fov() {
        let params = CameraParameters {
            fov_y: 90.0,
            ..CameraParameters::default()
        };
        let camera = Camera::new(params, Vec2::new(20, 10));
        // Top left corner: x = -2 and y = 1 at distance 1 with a 2:1 aspect
        let ray = camera.ray(Vec2::new(0.0, 0.0));
        assert_abs_diff_eq!(
            ray.d,
            Vec3::new(-2.0, 1.0, -1.0).normalized(),
            epsilon = 1e-5
        );
    }
}
