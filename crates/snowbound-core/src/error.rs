use thiserror::Error;

/// Failures while building the soundscape.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f32),
}

/// Rejected gameplay tunables.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    #[error("scratch clear fraction {0} is outside (0, 1)")]
    ClearFraction(f32),
    #[error("scratch brush radius {0} must be positive")]
    BrushRadius(f32),
    #[error("scratch sample target must be at least 1")]
    NoScratchSamples,
    #[error("lock needs at least one pin")]
    NoPins,
    #[error("cut gesture needs at least 2 points, got {0}")]
    MinPoints(usize),
    #[error("cut peak window is empty")]
    EmptyPeakWindow,
}
