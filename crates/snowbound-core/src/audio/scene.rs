//! Per-chapter ambient scenes.
//!
//! Each scene is built once and owns its whole signal chain. Modulators and
//! sources keep running whether or not the scene is audible; the only thing
//! the mixer changes afterwards is the scene's output gain.

use crate::audio::dsp::{Oscillator, SmoothedParam, StateVariableFilter};
use crate::audio::noise::PinkNoise;
use crate::chapter::ChapterId;
use crate::constants::*;
use rand::prelude::*;
use smallvec::SmallVec;

/// One source chain inside a scene, mixed additively into the scene bus.
#[derive(Clone, Debug)]
pub enum Layer {
    /// Pink noise through a filter whose cutoff/center is swept by a slow LFO.
    SweptNoise {
        noise: PinkNoise,
        filter: StateVariableFilter,
        base_hz: f32,
        lfo: Oscillator,
        depth_hz: f32,
    },
    Drone {
        osc: Oscillator,
        level: f32,
    },
    /// Sparse random impulses: each sample independently fires with `probability`.
    Crackle {
        rng: StdRng,
        probability: f32,
        max_amplitude: f32,
    },
    /// Low tone gated by a repeating lub-dub envelope.
    Heartbeat {
        osc: Oscillator,
        envelope: SmoothedParam,
        clock: u32,
        period: u32,
        steps: [(u32, f32); 4],
    },
    /// Sine whose level wobbles around `level` by `depth`.
    Tremolo {
        osc: Oscillator,
        level: f32,
        lfo: Oscillator,
        depth: f32,
    },
}

impl Layer {
    fn heartbeat(sample_rate: f32) -> Self {
        let samples = |sec: f32| (sec * sample_rate).round() as u32;
        let dub = samples(HEARTBEAT_DUB_OFFSET_SEC);
        let hold = samples(HEARTBEAT_HOLD_SEC);
        Layer::Heartbeat {
            osc: Oscillator::sine(HEART_TONE_HZ, sample_rate),
            envelope: SmoothedParam::new(0.0, sample_rate),
            clock: 0,
            period: samples(HEARTBEAT_PERIOD_SEC).max(1),
            steps: [
                (0, HEARTBEAT_LUB_PEAK),
                (hold, 0.0),
                (dub, HEARTBEAT_DUB_PEAK),
                (dub + hold, 0.0),
            ],
        }
    }

    /// Add this layer's next `out.len()` samples into `out`.
    ///
    /// `active` is true while the owning scene is the mixer's active one; the
    /// heartbeat clock only advances then, so new pulses start only then.
    pub fn render_add(&mut self, out: &mut [f32], active: bool) {
        match self {
            Layer::SweptNoise {
                noise,
                filter,
                base_hz,
                lfo,
                depth_hz,
            } => {
                for s in out.iter_mut() {
                    let cutoff = *base_hz + lfo.next_sample() * *depth_hz;
                    *s += filter.process(noise.next_sample(), cutoff);
                }
            }
            Layer::Drone { osc, level } => {
                for s in out.iter_mut() {
                    *s += osc.next_sample() * *level;
                }
            }
            Layer::Crackle {
                rng,
                probability,
                max_amplitude,
            } => {
                for s in out.iter_mut() {
                    if rng.gen::<f32>() < *probability {
                        *s += rng.gen::<f32>() * *max_amplitude;
                    }
                }
            }
            Layer::Heartbeat {
                osc,
                envelope,
                clock,
                period,
                steps,
            } => {
                for s in out.iter_mut() {
                    if active {
                        for &(at, target) in steps.iter() {
                            if *clock == at {
                                envelope.set_target(target, HEARTBEAT_TAU_SEC);
                            }
                        }
                        *clock = (*clock + 1) % *period;
                    } else if envelope.target() > 0.0 {
                        // a pulse already started still decays
                        envelope.set_target(0.0, HEARTBEAT_TAU_SEC);
                    }
                    *s += osc.next_sample() * envelope.next_value();
                }
            }
            Layer::Tremolo {
                osc,
                level,
                lfo,
                depth,
            } => {
                for s in out.iter_mut() {
                    let gain = *level + lfo.next_sample() * *depth;
                    *s += osc.next_sample() * gain;
                }
            }
        }
    }
}

/// A chapter's complete sound graph plus its output gain.
#[derive(Clone, Debug)]
pub struct AudioScene {
    pub chapter: ChapterId,
    pub gain: SmoothedParam,
    layers: SmallVec<[Layer; 2]>,
}

impl AudioScene {
    pub fn for_chapter(chapter: ChapterId, sample_rate: f32, seed: u64) -> Self {
        match chapter {
            ChapterId::Wind => Self::wind(sample_rate, seed),
            ChapterId::Fire => Self::fire(sample_rate, seed),
            ChapterId::Heart => Self::heart(sample_rate),
            ChapterId::Void => Self::void(sample_rate, seed),
        }
    }

    fn with_layers(chapter: ChapterId, sample_rate: f32, layers: SmallVec<[Layer; 2]>) -> Self {
        Self {
            chapter,
            gain: SmoothedParam::new(0.0, sample_rate),
            layers,
        }
    }

    /// Howling wind: low-passed pink noise, cutoff swept at 0.1 Hz.
    pub fn wind(sample_rate: f32, seed: u64) -> Self {
        let mut layers = SmallVec::new();
        layers.push(Layer::SweptNoise {
            noise: PinkNoise::new(seed),
            filter: StateVariableFilter::lowpass(WIND_Q, sample_rate),
            base_hz: WIND_CUTOFF_HZ,
            lfo: Oscillator::sine(WIND_LFO_HZ, sample_rate),
            depth_hz: WIND_LFO_DEPTH_HZ,
        });
        Self::with_layers(ChapterId::Wind, sample_rate, layers)
    }

    /// Tension: quiet 60 Hz triangle drone plus random crackles.
    pub fn fire(sample_rate: f32, seed: u64) -> Self {
        let mut layers = SmallVec::new();
        layers.push(Layer::Drone {
            osc: Oscillator::triangle(FIRE_DRONE_HZ, sample_rate),
            level: FIRE_DRONE_LEVEL,
        });
        layers.push(Layer::Crackle {
            rng: StdRng::seed_from_u64(seed),
            probability: CRACKLE_PROBABILITY,
            max_amplitude: CRACKLE_MAX_AMPLITUDE,
        });
        Self::with_layers(ChapterId::Fire, sample_rate, layers)
    }

    /// Heartbeat at 50 BPM with an eerie high whine.
    pub fn heart(sample_rate: f32) -> Self {
        let mut layers = SmallVec::new();
        layers.push(Layer::heartbeat(sample_rate));
        layers.push(Layer::Tremolo {
            osc: Oscillator::sine(WHINE_HZ, sample_rate),
            level: WHINE_LEVEL,
            lfo: Oscillator::sine(TREMOLO_HZ, sample_rate),
            depth: TREMOLO_DEPTH,
        });
        Self::with_layers(ChapterId::Heart, sample_rate, layers)
    }

    /// Hollow void: narrow band-passed pink noise drifting at 0.05 Hz.
    pub fn void(sample_rate: f32, seed: u64) -> Self {
        let mut layers = SmallVec::new();
        layers.push(Layer::SweptNoise {
            noise: PinkNoise::new(seed),
            filter: StateVariableFilter::bandpass(VOID_Q, sample_rate),
            base_hz: VOID_CENTER_HZ,
            lfo: Oscillator::sine(VOID_LFO_HZ, sample_rate),
            depth_hz: VOID_LFO_DEPTH_HZ,
        });
        Self::with_layers(ChapterId::Void, sample_rate, layers)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Render the ungated scene bus into `bus` (overwritten).
    pub fn render_bus(&mut self, bus: &mut [f32], active: bool) {
        bus.fill(0.0);
        for layer in self.layers.iter_mut() {
            layer.render_add(bus, active);
        }
    }
}
