use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution, Uniform};

/// Source of the random draws behind every simulated figure.
pub trait KpiSampler {
    /// Uniform draw from `[min, max]`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
    /// Uniform draw from `[min, max)`.
    fn uniform_exclusive(&mut self, min: f64, max: f64) -> f64;
    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

pub struct RngSampler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<StdRng> {
    /// Seeded when a seed is given, otherwise from OS entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> KpiSampler for RngSampler<R> {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        Uniform::new_inclusive(min, max).sample(&mut self.rng)
    }

    fn uniform_exclusive(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        Uniform::new(min, max).sample(&mut self.rng)
    }

    fn chance(&mut self, probability: f64) -> bool {
        Bernoulli::new(probability.clamp(0.0, 1.0))
            .map(|dist| dist.sample(&mut self.rng))
            .unwrap_or(false)
    }
}
