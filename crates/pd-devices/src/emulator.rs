//! Simulated analog readings for devices running in emulation mode.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Gaussian noise source configured with a mean and standard deviation.
///
/// Virtual devices and commissioning setups use this instead of a fieldbus
/// reading. A zero standard deviation degenerates to the mean, which keeps
/// emulated devices deterministic unless noise is asked for.
pub struct NoiseEmulator {
    mean: f32,
    stddev: f32,
    rng: StdRng,
}

impl NoiseEmulator {
    pub fn new(mean: f32, stddev: f32) -> Self {
        Self {
            mean,
            stddev,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic emulator for tests.
    pub fn with_seed(mean: f32, stddev: f32, seed: u64) -> Self {
        Self {
            mean,
            stddev,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn configure(&mut self, mean: f32, stddev: f32) {
        self.mean = mean;
        self.stddev = stddev;
    }

    pub fn mean(&self) -> f32 {
        self.mean
    }

    pub fn stddev(&self) -> f32 {
        self.stddev
    }

    /// Draw the next simulated reading.
    pub fn next_value(&mut self) -> f32 {
        if self.stddev == 0.0 {
            return self.mean;
        }
        // Box-Muller transform over two uniform draws.
        let u1: f32 = self.rng.gen_range(f32::EPSILON..1.0);
        let u2: f32 = self.rng.gen_range(0.0f32..1.0);
        let z = (-2.0 * u1.ln()).sqrt() * (core::f32::consts::TAU * u2).cos();
        self.mean + self.stddev * z
    }
}

impl Default for NoiseEmulator {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl std::fmt::Debug for NoiseEmulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseEmulator")
            .field("mean", &self.mean)
            .field("stddev", &self.stddev)
            .finish()
    }
}
