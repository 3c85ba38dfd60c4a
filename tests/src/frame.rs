#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use hikari::{
        math::{Frame, FrameHelper, Vec3},
        sampling::{spherical_direction, Sampler, UniformSampler},
    };
    use std::f32::consts::PI;

    fn normals() -> Vec<Vec3<f32>> {
        let mut sampler = UniformSampler::new(23);
        let mut normals: Vec<Vec3<f32>> = (0..10000)
            .map(|_| {
                let u = sampler.get_2d();
                let cos_theta = 1.0 - 2.0 * u.x;
                let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
                spherical_direction(sin_theta, cos_theta, 2.0 * PI * u.y)
            })
            .collect();
        normals.extend_from_slice(&[
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0435, 0.999).normalized(),
            Vec3::new(0.0, 0.0447, 0.999).normalized(),
            Vec3::new(1.0, 0.0, 1.0).normalized(),
            Vec3::new(0.0, 1.0, 1.0).normalized(),
        ]);
        normals
    }

    #[test]
    fn orthonormal() {
        for helper in [FrameHelper::WorldUp, FrameHelper::ComponentCompare] {
            for n in normals() {
                let f = Frame::with_helper(n, helper);
                assert_abs_diff_eq!(f.x.dot(f.y), 0.0, epsilon = 1e-4);
                assert_abs_diff_eq!(f.x.dot(f.z), 0.0, epsilon = 1e-4);
                assert_abs_diff_eq!(f.y.dot(f.z), 0.0, epsilon = 1e-4);
                assert_abs_diff_eq!(f.x.len(), 1.0, epsilon = 1e-4);
                assert_abs_diff_eq!(f.y.len(), 1.0, epsilon = 1e-4);
                assert_abs_diff_eq!(f.z.len(), 1.0, epsilon = 1e-4);
                assert_abs_diff_eq!(f.z, n, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn right_handed() {
        for helper in [FrameHelper::WorldUp, FrameHelper::ComponentCompare] {
            for n in normals() {
                let f = Frame::with_helper(n, helper);
                assert_abs_diff_eq!(f.x.cross(f.y), f.z, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn basis_maps_to_axes() {
        for helper in [FrameHelper::WorldUp, FrameHelper::ComponentCompare] {
            for n in normals() {
                let f = Frame::with_helper(n, helper);
                assert_abs_diff_eq!(f.to_world(Vec3::new(1.0, 0.0, 0.0)), f.x, epsilon = 1e-4);
                assert_abs_diff_eq!(f.to_world(Vec3::new(0.0, 1.0, 0.0)), f.y, epsilon = 1e-4);
                assert_abs_diff_eq!(f.to_world(Vec3::new(0.0, 0.0, 1.0)), f.z, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn unnormalized_normal() {
        let f = Frame::from_normal(Vec3::new(0.0, 3.0, 4.0));
        assert_abs_diff_eq!(f.z, Vec3::new(0.0, 0.6, 0.8), epsilon = 1e-6);
    }
}
