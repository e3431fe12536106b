//! White and pink noise sources.
//!
//! [`PinkNoise`] owns its coloring-filter state so that consecutive blocks
//! continue the same stream. Zeroing the state between audio callbacks makes
//! the block boundaries audible as clicks.

use crate::constants::PINK_OUTPUT_SCALE;
use rand::prelude::*;

/// Uniform white noise in [-1, 1].
#[derive(Clone, Debug)]
pub struct WhiteNoise {
    rng: StdRng,
}

impl WhiteNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.rng.gen::<f32>() * 2.0 - 1.0
    }

    pub fn fill(&mut self, out: &mut [f32]) {
        for s in out.iter_mut() {
            *s = self.next_sample();
        }
    }

    pub fn generate(&mut self, n: usize) -> Vec<f32> {
        let mut out = vec![0.0; n];
        self.fill(&mut out);
        out
    }
}

/// Pink (~-3 dB/octave) noise from a six-pole filter bank over white noise.
///
/// The pole and weight coefficients are fixed; changing them changes the
/// spectral slope.
#[derive(Clone, Debug)]
pub struct PinkNoise {
    white: WhiteNoise,
    b: [f32; 7],
}

impl PinkNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            white: WhiteNoise::new(seed),
            b: [0.0; 7],
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let white = self.white.next_sample();
        let b = &mut self.b;
        b[0] = 0.99886 * b[0] + white * 0.0555179;
        b[1] = 0.99332 * b[1] + white * 0.0750759;
        b[2] = 0.96900 * b[2] + white * 0.1538520;
        b[3] = 0.86650 * b[3] + white * 0.3104856;
        b[4] = 0.55000 * b[4] + white * 0.5329522;
        b[5] = -0.7616 * b[5] - white * 0.0168980;
        let out = b[0] + b[1] + b[2] + b[3] + b[4] + b[5] + b[6] + white * 0.5362;
        // b6 carries this sample's white term into the next one
        b[6] = white * 0.115926;
        out * PINK_OUTPUT_SCALE
    }

    /// Fill one callback block, continuing from the previous block's state.
    pub fn next_block(&mut self, out: &mut [f32]) {
        for s in out.iter_mut() {
            *s = self.next_sample();
        }
    }

    pub fn generate(&mut self, sample_count: usize) -> Vec<f32> {
        let mut out = vec![0.0; sample_count];
        self.next_block(&mut out);
        out
    }

    /// Current filter memory `b0..b6`.
    pub fn state(&self) -> [f32; 7] {
        self.b
    }
}
