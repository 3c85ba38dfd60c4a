use std::time::Instant;

use hikari::{
    materials::{GgxSampler, SampleFrame, SamplingStrategy, SpecularEvaluator},
    math::{Spectrum, Vec3},
    sampling::UniformSampler,
    textures::CubeMap,
};

const SAMPLE_ITERATIONS: usize = 5000000;
const EVALUATE_ITERATIONS: usize = 20000;
const EVALUATE_SAMPLES: u32 = 64;

fn bench_sampler(strategy: SamplingStrategy, roughness: f32) {
    let ggx = GgxSampler::new(strategy);
    let mut sampler = UniformSampler::new(0);

    let mut sum = 0.0;
    let start = Instant::now();
    for _ in 0..SAMPLE_ITERATIONS {
        sum += ggx.sample(roughness, &mut sampler).z;
    }
    let elapsed_ns = start.elapsed().as_nanos();
    if sum.is_nan() {
        panic!("We only wanted to force the loop to be executed!")
    }

    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let ns_per_sample = (elapsed_ns as f64) / (SAMPLE_ITERATIONS as f64);
    println!(
        "{:10} r={:.2} took {:6.1} ms total, {:0.2} ns per sample",
        strategy.to_string(),
        roughness,
        elapsed_ms,
        ns_per_sample
    );
}

fn bench_evaluate(frame: SampleFrame, roughness: f32) {
    let evaluator = SpecularEvaluator {
        frame,
        ..SpecularEvaluator::default()
    };
    let env = CubeMap::constant(Spectrum::new(0.2, 0.5, 0.9));
    let mut sampler = UniformSampler::new(0);
    let n = Vec3::new(0.0, 0.0, 1.0);
    let v = Vec3::new(0.3, -0.2, 1.0);
    let f0 = Spectrum::new(1.0, 0.766, 0.336);

    let mut sum = Spectrum::zeros();
    let start = Instant::now();
    for _ in 0..EVALUATE_ITERATIONS {
        sum += evaluator
            .evaluate(&env, n, v, roughness, f0, EVALUATE_SAMPLES, &mut sampler)
            .radiance;
    }
    let elapsed_ns = start.elapsed().as_nanos();
    if !sum.is_finite() {
        panic!("We only wanted to force the loop to be executed!")
    }

    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_evaluate = (elapsed_ns as f64) * 1e-3 / (EVALUATE_ITERATIONS as f64);
    println!(
        "{:10} r={:.2} took {:6.1} ms total, {:0.3} us per {} sample evaluate",
        frame.to_string(),
        roughness,
        elapsed_ms,
        us_per_evaluate,
        EVALUATE_SAMPLES
    );
}

fn main() {
    println!("GGX sampling");
    for strategy in [SamplingStrategy::InverseCdf, SamplingStrategy::Rejection] {
        for roughness in [0.05, 0.33, 0.9] {
            bench_sampler(strategy, roughness);
        }
    }

    println!("Specular evaluation");
    for frame in [SampleFrame::Reflection, SampleFrame::Normal] {
        for roughness in [0.05, 0.33, 0.9] {
            bench_evaluate(frame, roughness);
        }
    }
}
