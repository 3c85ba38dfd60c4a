#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use hikari::{
        materials::{
            ggx::{density, MAX_ROUGHNESS, MIN_ROUGHNESS},
            GgxSampler, SamplingStrategy,
        },
        sampling::UniformSampler,
    };
    use std::f32::consts::FRAC_PI_2;

    const SAMPLE_COUNT: usize = 10000;

    fn mean_cos(ggx: &GgxSampler, roughness: f32, seed: u64) -> f32 {
        let mut sampler = UniformSampler::new(seed);
        let sum: f64 = (0..SAMPLE_COUNT)
            .map(|_| ggx.sample(roughness, &mut sampler).z as f64)
            .sum();
        (sum / SAMPLE_COUNT as f64) as f32
    }

    // Midpoint rule over the polar angle
    fn expected_cos(alpha: f32) -> f32 {
        let steps = 100000;
        let dt = FRAC_PI_2 / steps as f32;
        let sum: f64 = (0..steps)
            .map(|i| {
                let theta = (i as f32 + 0.5) * dt;
                (theta.cos() * density(theta, alpha) * dt) as f64
            })
            .sum();
        sum as f32
    }

    fn roughnesses() -> Vec<f32> {
        let mut r = vec![MIN_ROUGHNESS];
        r.extend((1..10).map(|i| i as f32 * 0.1));
        r.push(MAX_ROUGHNESS);
        r
    }

    #[test]
    fn mean_cos_matches_closed_form() {
        let ggx = GgxSampler::new(SamplingStrategy::InverseCdf);
        for r in roughnesses() {
            assert_abs_diff_eq!(mean_cos(&ggx, r, 1), expected_cos(r), epsilon = 0.01);
        }
    }

    #[test]
    fn smoother_is_sharper() {
        // The closed form decreases with roughness
        let expected: Vec<f32> = roughnesses().into_iter().map(expected_cos).collect();
        for w in expected.windows(2) {
            assert!(w[0] > w[1], "{:?}", expected);
        }

        // Same seed for every roughness keeps the comparison free of noise
        let ggx = GgxSampler::new(SamplingStrategy::InverseCdf);
        let means: Vec<f32> = roughnesses().into_iter().map(|r| mean_cos(&ggx, r, 2)).collect();
        for w in means.windows(2) {
            assert!(w[0] > w[1], "{:?}", means);
        }
    }

    #[test]
    fn boundary_roughness_is_finite() {
        for strategy in [SamplingStrategy::InverseCdf, SamplingStrategy::Rejection] {
            let ggx = GgxSampler::new(strategy);
            let mut sampler = UniformSampler::new(3);
            for r in [MIN_ROUGHNESS, MAX_ROUGHNESS, 0.0, 1.0, -4.0, 7.0, f32::NAN] {
                for _ in 0..1000 {
                    let d = ggx.sample(r, &mut sampler);
                    assert!(d.x.is_finite() && d.y.is_finite() && d.z.is_finite());
                    assert!(d.z >= 0.0);
                    assert_abs_diff_eq!(d.len(), 1.0, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn rejection_leans_toward_the_axis() {
        let inverse = GgxSampler::new(SamplingStrategy::InverseCdf);
        let rejection = GgxSampler::new(SamplingStrategy::Rejection);
        for r in [0.3, 0.6] {
            assert!(mean_cos(&rejection, r, 4) > mean_cos(&inverse, r, 4));
        }
    }
}
