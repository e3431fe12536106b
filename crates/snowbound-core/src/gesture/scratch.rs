//! Scratch-to-reveal snow cover.
//!
//! The mask holds one alpha byte per surface pixel. Erasing only ever lowers
//! alpha, so progress never regresses until the surface is laid out again.

use crate::constants::{SCRATCH_SPECK_COUNT, SCRATCH_SPECK_MAX_ALPHA, SCRATCH_SPECK_SIZE};
use crate::gesture::Point;
use crate::tuning::ScratchTuning;
use rand::prelude::*;

/// A small translucent fleck painted over the cover fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speck {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScratchPhase {
    Covered,
    PartiallyScratched,
    Cleared,
}

pub struct ScratchCard {
    tuning: ScratchTuning,
    width: u32,
    height: u32,
    alpha: Vec<u8>,
    specks: Vec<Speck>,
    drawing: bool,
    scratched: bool,
    cleared: bool,
    rng: StdRng,
}

impl ScratchCard {
    /// Starts at zero size; nothing can be scratched until [`Self::layout`].
    pub fn new(tuning: ScratchTuning, seed: u64) -> Self {
        Self {
            tuning,
            width: 0,
            height: 0,
            alpha: Vec::new(),
            specks: Vec::new(),
            drawing: false,
            scratched: false,
            cleared: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Size the surface to its container and lay a fresh cover over it.
    ///
    /// Any partial progress is discarded. Ignored once cleared, and for
    /// zero-size containers (layout has not happened yet).
    pub fn layout(&mut self, width: u32, height: u32) -> bool {
        if self.cleared || width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        self.alpha.clear();
        self.alpha.resize(width as usize * height as usize, u8::MAX);
        self.specks.clear();
        for _ in 0..SCRATCH_SPECK_COUNT {
            self.specks.push(Speck {
                x: self.rng.gen::<f32>() * width as f32,
                y: self.rng.gen::<f32>() * height as f32,
                size: SCRATCH_SPECK_SIZE,
                alpha: self.rng.gen::<f32>() * SCRATCH_SPECK_MAX_ALPHA,
            });
        }
        self.drawing = false;
        self.scratched = false;
        true
    }

    /// Return to the covered state at the current size.
    pub fn reset(&mut self) -> bool {
        self.cleared = false;
        self.drawing = false;
        let (w, h) = (self.width, self.height);
        self.layout(w, h)
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn specks(&self) -> &[Speck] {
        &self.specks
    }

    pub fn brush_radius(&self) -> f32 {
        self.tuning.brush_radius
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn phase(&self) -> ScratchPhase {
        if self.cleared {
            ScratchPhase::Cleared
        } else if self.scratched {
            ScratchPhase::PartiallyScratched
        } else {
            ScratchPhase::Covered
        }
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.alpha
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Pointer down: start a session and erase under the pointer.
    /// Returns whether the pointer erased anything.
    pub fn begin(&mut self, p: Point) -> bool {
        if self.cleared {
            return false;
        }
        self.drawing = true;
        self.erase_disc(p)
    }

    /// Pointer move: erase only while a session is open.
    pub fn stroke(&mut self, p: Point) -> bool {
        if !self.drawing || self.cleared {
            return false;
        }
        self.erase_disc(p)
    }

    /// Pointer up: close the session and verify. True only on the transition
    /// to cleared.
    pub fn end(&mut self) -> bool {
        self.drawing = false;
        self.verify()
    }

    fn erase_disc(&mut self, p: Point) -> bool {
        if self.width == 0 || self.height == 0 || !p.is_finite() {
            return false;
        }
        let r = self.tuning.brush_radius;
        let x0 = (p.x - r).floor().max(0.0) as i64;
        let y0 = (p.y - r).floor().max(0.0) as i64;
        let x1 = ((p.x + r).ceil() as i64).min(self.width as i64 - 1);
        let y1 = ((p.y + r).ceil() as i64).min(self.height as i64 - 1);
        let r2 = r * r;
        let mut touched = false;
        for y in y0..=y1 {
            let dy = y as f32 + 0.5 - p.y;
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - p.x;
                if dx * dx + dy * dy <= r2 {
                    let i = y as usize * self.width as usize + x as usize;
                    if self.alpha[i] != 0 {
                        self.alpha[i] = 0;
                        touched = true;
                    }
                }
            }
        }
        self.scratched |= touched;
        touched
    }

    /// Sampled share of uncovered pixels, or `None` when the surface is too
    /// small to sample (fewer pixels than the sample target).
    pub fn cleared_fraction(&self) -> Option<f32> {
        let pixels = self.alpha.len();
        let stride = pixels / self.tuning.sample_target.max(1);
        if stride == 0 {
            return None;
        }
        let mut checked = 0usize;
        let mut clear = 0usize;
        for &a in self.alpha.iter().step_by(stride) {
            if a < self.tuning.alpha_threshold {
                clear += 1;
            }
            checked += 1;
        }
        (checked > 0).then(|| clear as f32 / checked as f32)
    }

    /// Check progress; once the sampled fraction passes the threshold the
    /// card is cleared for good. Repeat calls after that return false.
    pub fn verify(&mut self) -> bool {
        if self.cleared {
            return false;
        }
        match self.cleared_fraction() {
            Some(f) if f > self.tuning.clear_fraction => {
                self.cleared = true;
                self.drawing = false;
                log::debug!("[scratch] cleared at {:.1}%", f * 100.0);
                true
            }
            _ => false,
        }
    }
}
