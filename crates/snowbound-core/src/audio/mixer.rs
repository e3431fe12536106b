use crate::audio::scene::AudioScene;
use crate::chapter::ChapterId;
use crate::constants::*;
use crate::error::AudioError;

/// Holds every chapter scene and cross-fades between them.
///
/// At most one scene has a non-zero target gain at a time. Fades are
/// first-order exponential approaches, never linear ramps.
pub struct SceneMixer {
    scenes: Vec<AudioScene>,
    active: Option<usize>,
    master_gain: f32,
    sample_rate: f32,
    bus: Vec<f32>,
}

impl SceneMixer {
    pub fn new(sample_rate: f32, seed: u64) -> Result<Self, AudioError> {
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(AudioError::InvalidSampleRate(sample_rate));
        }
        // Derive per-scene seeds from the base seed so scenes never share a stream
        let scenes = ChapterId::ALL
            .iter()
            .enumerate()
            .map(|(i, &chapter)| {
                let mix = seed ^ (i as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                AudioScene::for_chapter(chapter, sample_rate, mix)
            })
            .collect();
        Ok(Self {
            scenes,
            active: None,
            master_gain: MASTER_GAIN,
            sample_rate,
            bus: vec![0.0; PROCESSOR_BLOCK_SIZE],
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn master_gain(&self) -> f32 {
        self.master_gain
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn active_scene(&self) -> Option<usize> {
        self.active
    }

    pub fn scene(&self, index: usize) -> Option<&AudioScene> {
        self.scenes.get(index)
    }

    /// Make `index` the audible scene. Returns whether a new fade was issued;
    /// asking for the already-active scene or an unknown index does nothing.
    pub fn set_active_scene(&mut self, index: usize) -> bool {
        if Some(index) == self.active || index >= self.scenes.len() {
            return false;
        }
        self.fade_to(index);
        true
    }

    /// Fade `index` in even if it is already the active scene.
    pub fn restart_scene(&mut self, index: usize) -> bool {
        if index >= self.scenes.len() {
            return false;
        }
        self.fade_to(index);
        true
    }

    fn fade_to(&mut self, index: usize) {
        log::debug!("[mixer] scene {:?} -> {}", self.active, index);
        self.active = Some(index);
        for (i, scene) in self.scenes.iter_mut().enumerate() {
            let target = if i == index { SCENE_TARGET_GAIN } else { 0.0 };
            scene.gain.set_target(target, CROSSFADE_TAU_SEC);
        }
    }

    /// Fade everything out; the active index is left as it was.
    pub fn stop_all(&mut self) {
        for scene in self.scenes.iter_mut() {
            scene.gain.set_target(0.0, STOP_TAU_SEC);
        }
    }

    /// Render the next mono block into `out` (overwritten).
    pub fn render(&mut self, out: &mut [f32]) {
        out.fill(0.0);
        if self.bus.len() < out.len() {
            self.bus.resize(out.len(), 0.0);
        }
        let bus = &mut self.bus[..out.len()];
        for (i, scene) in self.scenes.iter_mut().enumerate() {
            scene.render_bus(bus, self.active == Some(i));
            for (o, b) in out.iter_mut().zip(bus.iter()) {
                *o += *b * scene.gain.next_value();
            }
        }
        for o in out.iter_mut() {
            *o *= self.master_gain;
        }
    }
}

/// Build-once guard around [`SceneMixer`].
///
/// The output device may only start after a user gesture, so the mixer does
/// not exist until [`Soundscape::initialize`] is called. Before that, every
/// control is a no-op and rendering yields silence.
pub struct Soundscape {
    seed: u64,
    mixer: Option<SceneMixer>,
}

impl Soundscape {
    pub fn new(seed: u64) -> Self {
        Self { seed, mixer: None }
    }

    /// Build all scenes. Returns `Ok(true)` the first time, `Ok(false)` after.
    pub fn initialize(&mut self, sample_rate: f32) -> Result<bool, AudioError> {
        if self.mixer.is_some() {
            return Ok(false);
        }
        let mixer = SceneMixer::new(sample_rate, self.seed)?;
        log::info!(
            "[soundscape] built {} scenes at {} Hz",
            mixer.scene_count(),
            sample_rate
        );
        self.mixer = Some(mixer);
        Ok(true)
    }

    pub fn is_initialized(&self) -> bool {
        self.mixer.is_some()
    }

    pub fn mixer(&self) -> Option<&SceneMixer> {
        self.mixer.as_ref()
    }

    pub fn set_scene(&mut self, index: usize) -> bool {
        self.mixer
            .as_mut()
            .map_or(false, |m| m.set_active_scene(index))
    }

    pub fn restart_scene(&mut self, index: usize) -> bool {
        self.mixer.as_mut().map_or(false, |m| m.restart_scene(index))
    }

    pub fn stop_all(&mut self) {
        if let Some(m) = self.mixer.as_mut() {
            m.stop_all();
        }
    }

    pub fn render(&mut self, out: &mut [f32]) {
        match self.mixer.as_mut() {
            Some(m) => m.render(out),
            None => out.fill(0.0),
        }
    }
}
