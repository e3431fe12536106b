use std::io::BufRead;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use instant::Instant;
use snowbound_core::{GameTuning, Soundscape, Story, StoryEvent};

mod commands;
use commands::{cut_arc, parse_command, scratch_sweep, Command, HELP};

const SCRATCH_SURFACE: (u32, u32) = (300, 200);
const TICK_INTERVAL: Duration = Duration::from_millis(20);

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    match m.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Story plus the soundscape it drives, shared by stdin and the ticker.
struct Audition {
    story: Mutex<Story>,
    soundscape: Arc<Mutex<Soundscape>>,
    started: Instant,
}

impl Audition {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn dispatch(&self, op: impl FnOnce(&mut Story, &mut Vec<StoryEvent>)) {
        let mut events = Vec::new();
        op(&mut lock(&self.story), &mut events);
        if events.is_empty() {
            return;
        }
        let mut scape = lock(&self.soundscape);
        for ev in &events {
            match ev {
                StoryEvent::SceneRequested(i) => {
                    scape.set_scene(*i);
                }
                StoryEvent::SceneRearmed(i) => {
                    scape.restart_scene(*i);
                }
                StoryEvent::AudioStopped => scape.stop_all(),
                StoryEvent::ScratchErased { .. } => continue,
                _ => {}
            }
            log::info!("[story] {:?}", ev);
        }
    }

    /// Carry out one command. False once the session should end.
    fn run(&self, cmd: Command) -> bool {
        match cmd {
            Command::Show(chapter) => self.dispatch(|s, out| s.chapter_visible(chapter, out)),
            Command::Scratch => {
                let (w, h) = SCRATCH_SURFACE;
                self.dispatch(|s, out| {
                    s.layout_scratch(w, h, out);
                    let path = scratch_sweep(w, h, s.scratch().brush_radius());
                    if let Some((first, rest)) = path.split_first() {
                        s.scratch_pressed(*first, out);
                        for p in rest {
                            s.scratch_moved(*p, out);
                        }
                    }
                    s.scratch_released(out);
                });
            }
            Command::Pins(pins) => {
                let now = self.now();
                self.dispatch(|s, out| {
                    for pin in pins {
                        s.pin_pressed(pin, now, out);
                    }
                });
            }
            Command::Cut => {
                let now = self.now();
                self.dispatch(|s, out| {
                    s.cut_started();
                    for p in cut_arc() {
                        s.cut_moved(p);
                    }
                    s.cut_ended(now, out);
                });
            }
            Command::Reset => self.dispatch(|s, out| s.reset_all(out)),
            Command::Help => println!("{}", HELP),
            Command::Quit => return false,
        }
        true
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED);
    let audition = Arc::new(Audition {
        story: Mutex::new(Story::new(GameTuning::default(), seed)?),
        soundscape: Arc::new(Mutex::new(Soundscape::new(seed ^ 0xA0D1_0000))),
        started: Instant::now(),
    });

    let _stream = match start_audio(Arc::clone(&audition.soundscape)) {
        Ok(stream) => {
            audition.dispatch(|s, out| s.audio_enabled(true, out));
            Some(stream)
        }
        Err(e) => {
            log::warn!("[audio] no output, running silent: {:#}", e);
            None
        }
    };

    {
        let audition = Arc::clone(&audition);
        thread::Builder::new()
            .name("story-ticker".into())
            .spawn(move || loop {
                let now = audition.now();
                audition.dispatch(|s, out| s.advance(now, out));
                thread::sleep(TICK_INTERVAL);
            })?;
    }

    println!("{}", HELP);
    for line in std::io::stdin().lock().lines() {
        match parse_command(&line?) {
            Ok(Some(cmd)) => {
                if !audition.run(cmd) {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

// ---------------- Native audio (cpal) ----------------

fn start_audio(soundscape: Arc<Mutex<Soundscape>>) -> anyhow::Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("no output device"))?;
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    lock(&soundscape).initialize(sample_rate)?;
    log::info!("[audio] {} Hz, {} channel(s)", sample_rate, channels);

    let err_fn = |err| log::error!("audio stream error: {err}");
    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => {
            build_stream::<f32>(&device, &config.into(), channels, soundscape, err_fn)?
        }
        cpal::SampleFormat::I16 => {
            build_stream::<i16>(&device, &config.into(), channels, soundscape, err_fn)?
        }
        cpal::SampleFormat::U16 => {
            build_stream::<u16>(&device, &config.into(), channels, soundscape, err_fn)?
        }
        other => anyhow::bail!("unsupported sample format {:?}", other),
    };
    stream.play()?;
    Ok(stream)
}

/// Render the mono soundscape and copy it to every output channel.
fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    soundscape: Arc<Mutex<Soundscape>>,
    err_fn: impl Fn(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let mut mono: Vec<f32> = Vec::new();
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let frames = data.len() / channels.max(1);
            mono.resize(frames, 0.0);
            lock(&soundscape).render(&mut mono);
            for (frame, s) in data.chunks_mut(channels.max(1)).zip(&mono) {
                let v = T::from_sample(*s);
                for out in frame.iter_mut() {
                    *out = v;
                }
            }
        },
        err_fn,
        None,
    )
}
