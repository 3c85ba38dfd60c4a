use super::Sampler;
use crate::math::Vec2;

use rand::{distributions::Standard, Rng};
use rand_pcg::Pcg32;

/// Independent uniform samples from a PCG stream.
pub struct UniformSampler {
    rng: Pcg32,
    // Stored to clone the sampler with a different stream
    rng_seed: u64,
}

impl UniformSampler {
    /// Creates a `UniformSampler` with a known `seed` on stream 0.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::new(seed, 0),
            rng_seed: seed,
        }
    }

    /// Creates a `UniformSampler` with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Returns the seed this `UniformSampler` was created with.
    pub fn seed(&self) -> u64 {
        self.rng_seed
    }
}

impl Sampler for UniformSampler {
    fn clone_seeded(&self, stream: u64) -> Box<dyn Sampler> {
        // Pcg has uncorrelated streams so let's leverage that
        Box::new(Self {
            rng: Pcg32::new(self.rng_seed, stream),
            rng_seed: self.rng_seed,
        })
    }

    fn get_1d(&mut self) -> f32 {
        self.rng.sample(Standard)
    }

    fn get_2d(&mut self) -> Vec2<f32> {
        Vec2::new(self.rng.sample(Standard), self.rng.sample(Standard))
    }
}
