use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// Phase-accumulator oscillator. Output is bipolar in [-1, 1].
#[derive(Clone, Debug)]
pub struct Oscillator {
    pub waveform: Waveform,
    pub frequency_hz: f32,
    phase: f32, // cycles, 0..1
    sample_rate: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency_hz: f32, sample_rate: f32) -> Self {
        Self {
            waveform,
            frequency_hz,
            phase: 0.0,
            sample_rate,
        }
    }

    pub fn sine(frequency_hz: f32, sample_rate: f32) -> Self {
        Self::new(Waveform::Sine, frequency_hz, sample_rate)
    }

    pub fn triangle(frequency_hz: f32, sample_rate: f32) -> Self {
        Self::new(Waveform::Triangle, frequency_hz, sample_rate)
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        let out = match self.waveform {
            Waveform::Sine => (TAU * self.phase).sin(),
            // starts at 0 and rises, like the sine
            Waveform::Triangle => {
                let p = self.phase;
                if p < 0.25 {
                    4.0 * p
                } else if p < 0.75 {
                    2.0 - 4.0 * p
                } else {
                    4.0 * p - 4.0
                }
            }
        };
        self.phase += self.frequency_hz / self.sample_rate;
        if self.phase >= 1.0 {
            self.phase -= self.phase.floor();
        }
        out
    }
}

/// A gain-like parameter that approaches its target exponentially, sample by
/// sample, the way `AudioParam.setTargetAtTime` does.
#[derive(Clone, Debug)]
pub struct SmoothedParam {
    value: f32,
    target: f32,
    coeff: f32,
    sample_rate: f32,
}

impl SmoothedParam {
    pub fn new(value: f32, sample_rate: f32) -> Self {
        Self {
            value,
            target: value,
            coeff: 1.0,
            sample_rate,
        }
    }

    /// Start moving toward `target` with time constant `tau_sec`; after
    /// one `tau_sec` about 63% of the distance is covered.
    pub fn set_target(&mut self, target: f32, tau_sec: f32) {
        self.target = target;
        self.coeff = if tau_sec > 0.0 {
            1.0 - (-1.0 / (tau_sec * self.sample_rate)).exp()
        } else {
            1.0
        };
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.target = value;
    }

    #[inline]
    pub fn next_value(&mut self) -> f32 {
        self.value += (self.target - self.value) * self.coeff;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    BandPass,
}

/// Trapezoidal state-variable filter with a per-sample cutoff so it can be
/// swept by an LFO.
#[derive(Clone, Debug)]
pub struct StateVariableFilter {
    mode: FilterMode,
    k: f32, // 1/Q
    ic1eq: f32,
    ic2eq: f32,
    sample_rate: f32,
}

impl StateVariableFilter {
    pub fn new(mode: FilterMode, q: f32, sample_rate: f32) -> Self {
        Self {
            mode,
            k: 1.0 / q.max(0.01),
            ic1eq: 0.0,
            ic2eq: 0.0,
            sample_rate,
        }
    }

    pub fn lowpass(q: f32, sample_rate: f32) -> Self {
        Self::new(FilterMode::LowPass, q, sample_rate)
    }

    pub fn bandpass(q: f32, sample_rate: f32) -> Self {
        Self::new(FilterMode::BandPass, q, sample_rate)
    }

    #[inline]
    pub fn process(&mut self, sample: f32, cutoff_hz: f32) -> f32 {
        let nyquist_guard = self.sample_rate * 0.49;
        let cutoff = cutoff_hz.clamp(10.0, nyquist_guard);
        let g = (PI * cutoff / self.sample_rate).tan();
        let h = 1.0 / (1.0 + g * (g + self.k));
        let v3 = sample - self.ic2eq;
        let v1 = h * (self.ic1eq + g * v3);
        let v2 = self.ic2eq + g * v1;
        self.ic1eq = 2.0 * v1 - self.ic1eq;
        self.ic2eq = 2.0 * v2 - self.ic2eq;
        match self.mode {
            FilterMode::LowPass => v2,
            // unity gain at the center frequency
            FilterMode::BandPass => self.k * v1,
        }
    }

    pub fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }
}
