//! Runtime-overridable gameplay tunables.
//!
//! The thresholds here encode how forgiving each mini-game feels rather than
//! anything about correctness, so embedders may adjust them. Defaults mirror
//! the values in [`crate::constants`].

use crate::constants::*;
use crate::error::TuningError;
use glam::Vec2;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ScratchTuning {
    pub brush_radius: f32,
    pub sample_target: usize,
    pub alpha_threshold: u8,
    pub clear_fraction: f32,
}

impl Default for ScratchTuning {
    fn default() -> Self {
        Self {
            brush_radius: SCRATCH_BRUSH_RADIUS,
            sample_target: SCRATCH_SAMPLE_TARGET,
            alpha_threshold: SCRATCH_ALPHA_THRESHOLD,
            clear_fraction: SCRATCH_CLEAR_FRACTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LockTuning {
    pub pin_count: usize,
    pub open_delay: Duration,
    pub error_flash: Duration,
}

impl Default for LockTuning {
    fn default() -> Self {
        Self {
            pin_count: PIN_COUNT,
            open_delay: Duration::from_millis(LOCK_OPEN_DELAY_MS),
            error_flash: Duration::from_millis(PIN_ERROR_FLASH_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CutTuning {
    pub min_points: usize,
    pub start_max_x: f32,
    pub end_min_x: f32,
    /// Open window around the arc peak; both bounds are exclusive.
    pub peak_min: Vec2,
    pub peak_max: Vec2,
    pub min_peak_hits: usize,
    pub image_swap_delay: Duration,
}

impl Default for CutTuning {
    fn default() -> Self {
        Self {
            min_points: CUT_MIN_POINTS,
            start_max_x: CUT_START_MAX_X,
            end_min_x: CUT_END_MIN_X,
            peak_min: Vec2::from(CUT_PEAK_MIN),
            peak_max: Vec2::from(CUT_PEAK_MAX),
            min_peak_hits: CUT_MIN_PEAK_HITS,
            image_swap_delay: Duration::from_millis(HEART_IMAGE_SWAP_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameTuning {
    pub scratch: ScratchTuning,
    pub lock: LockTuning,
    pub cut: CutTuning,
}

impl GameTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        let fraction = self.scratch.clear_fraction;
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(TuningError::ClearFraction(fraction));
        }
        if !(self.scratch.brush_radius > 0.0) {
            return Err(TuningError::BrushRadius(self.scratch.brush_radius));
        }
        if self.scratch.sample_target == 0 {
            return Err(TuningError::NoScratchSamples);
        }
        if self.lock.pin_count == 0 {
            return Err(TuningError::NoPins);
        }
        if self.cut.min_points < 2 {
            return Err(TuningError::MinPoints(self.cut.min_points));
        }
        let span = self.cut.peak_max - self.cut.peak_min;
        if span.x <= 0.0 || span.y <= 0.0 {
            return Err(TuningError::EmptyPeakWindow);
        }
        Ok(())
    }
}
