#[cfg(test)]
mod tests {
    use hikari::{
        math::{Spectrum, Vec3},
        sampling::{spherical_direction, Sampler, UniformSampler},
        textures::{CubeFace, CubeMap, Environment, ImageTexture, TexelFilter, NEUTRAL_GRAY},
    };
    use std::f32::consts::PI;

    const FACE_RES: usize = 4;

    fn random_face(sampler: &mut dyn Sampler) -> Option<ImageTexture> {
        let texels = (0..FACE_RES * FACE_RES)
            .map(|_| Spectrum::new(sampler.get_1d(), sampler.get_1d(), sampler.get_1d()))
            .collect();
        Some(ImageTexture::from_texels(FACE_RES, FACE_RES, texels))
    }

    fn random_cube_map(filter: TexelFilter) -> CubeMap {
        let mut sampler = UniformSampler::new(5);
        let mut face = || random_face(&mut sampler);
        CubeMap::from_faces([face(), face(), face(), face(), face(), face()], filter)
    }

    fn sphere_directions(count: usize) -> Vec<Vec3<f32>> {
        let mut sampler = UniformSampler::new(17);
        let mut dirs: Vec<Vec3<f32>> = (0..count)
            .map(|_| {
                let u = sampler.get_2d();
                let cos_theta = 1.0 - 2.0 * u.x;
                let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
                spherical_direction(sin_theta, cos_theta, 2.0 * PI * u.y)
            })
            .collect();
        // Axes, edges and corners
        for x in [-1.0, 0.0, 1.0] {
            for y in [-1.0, 0.0, 1.0] {
                for z in [-1.0, 0.0, 1.0] {
                    if x != 0.0 || y != 0.0 || z != 0.0 {
                        dirs.push(Vec3::new(x, y, z));
                    }
                }
            }
        }
        dirs
    }

    #[test]
    fn texels_stay_in_stored_range() {
        for filter in [TexelFilter::Nearest, TexelFilter::Bilinear] {
            let cube_map = random_cube_map(filter);
            for d in sphere_directions(5000) {
                // Length shouldn't matter
                for scale in [1e-25, 1e-6, 1.0, 1e6] {
                    let c = cube_map.texel(d * scale);
                    assert!(c.is_finite(), "{:?} at {:?}", c, d);
                    for v in [c.r, c.g, c.b] {
                        assert!((0.0..=1.0).contains(&v), "{} at {:?}", v, d);
                    }
                }
            }
        }
    }

    #[test]
    fn lookups_have_no_side_effects() {
        let cube_map = random_cube_map(TexelFilter::Bilinear);
        for d in sphere_directions(500) {
            assert_eq!(cube_map.texel(d), cube_map.texel(d));
        }
    }

    #[test]
    fn scale_doesnt_change_lookup() {
        let cube_map = random_cube_map(TexelFilter::Nearest);
        for d in sphere_directions(500) {
            assert_eq!(cube_map.texel(d), cube_map.texel(d * 3.0));
        }
    }

    #[test]
    fn missing_faces_are_gray() {
        let mut sampler = UniformSampler::new(9);
        let mut faces: [Option<ImageTexture>; 6] = Default::default();
        faces[CubeFace::PosX as usize] = random_face(&mut sampler);
        let cube_map = CubeMap::from_faces(faces, TexelFilter::Nearest);

        assert!(!cube_map.is_complete());
        assert_ne!(cube_map.texel(Vec3::new(1.0, 0.0, 0.0)), NEUTRAL_GRAY);
        for d in [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
        ] {
            assert_eq!(cube_map.texel(d), NEUTRAL_GRAY);
        }
    }
}
