// Host-side tests for scene construction and cross-fading.

use snowbound_core::*;

const SR: f32 = 8_000.0;

fn render_seconds(mixer: &mut SceneMixer, seconds: f32) -> Vec<f32> {
    let mut out = vec![0.0; (seconds * mixer.sample_rate()) as usize];
    for chunk in out.chunks_mut(PROCESSOR_BLOCK_SIZE) {
        mixer.render(chunk);
    }
    out
}

fn nonzero_targets(mixer: &SceneMixer) -> usize {
    (0..mixer.scene_count())
        .filter(|&i| mixer.scene(i).map_or(false, |s| s.gain.target() > 0.0))
        .count()
}

#[test]
fn mixer_rejects_bad_sample_rates() {
    assert_eq!(
        SceneMixer::new(0.0, 1).err(),
        Some(AudioError::InvalidSampleRate(0.0))
    );
    assert!(SceneMixer::new(f32::NAN, 1).is_err());
    assert!(SceneMixer::new(SR, 1).is_ok());
}

#[test]
fn mixer_builds_one_scene_per_chapter_silent_at_start() {
    let mut mixer = SceneMixer::new(SR, 1).unwrap();
    assert_eq!(mixer.scene_count(), 4);
    assert_eq!(mixer.active_scene(), None);
    assert!((mixer.master_gain() - MASTER_GAIN).abs() < 1e-6);
    for (i, chapter) in ChapterId::ALL.iter().enumerate() {
        let scene = mixer.scene(i).unwrap();
        assert_eq!(scene.chapter, *chapter);
        assert_eq!(scene.gain.value(), 0.0);
    }
    let out = render_seconds(&mut mixer, 0.5);
    assert!(out.iter().all(|s| *s == 0.0));
}

#[test]
fn scene_topologies_have_expected_layers() {
    assert_eq!(AudioScene::wind(SR, 1).layers().len(), 1);
    assert_eq!(AudioScene::fire(SR, 1).layers().len(), 2);
    assert_eq!(AudioScene::heart(SR).layers().len(), 2);
    assert_eq!(AudioScene::void(SR, 1).layers().len(), 1);
}

#[test]
fn at_most_one_scene_has_a_target_after_any_sequence() {
    let mut mixer = SceneMixer::new(SR, 2).unwrap();
    for &i in &[0usize, 2, 2, 1, 3, 0, 0, 3, 1] {
        mixer.set_active_scene(i);
        assert_eq!(nonzero_targets(&mixer), 1);
        assert_eq!(mixer.active_scene(), Some(i));
        render_seconds(&mut mixer, 0.05);
    }
}

#[test]
fn selecting_the_active_scene_again_is_a_no_op() {
    let mut mixer = SceneMixer::new(SR, 2).unwrap();
    assert!(mixer.set_active_scene(1));
    assert!(!mixer.set_active_scene(1));
    mixer.stop_all();
    // still the active index, so no new fade is issued
    assert!(!mixer.set_active_scene(1));
    assert_eq!(nonzero_targets(&mixer), 0);
    assert!(!mixer.set_active_scene(9));
}

#[test]
fn crossfade_follows_an_exponential_curve() {
    let mut mixer = SceneMixer::new(SR, 3).unwrap();
    mixer.set_active_scene(0);
    render_seconds(&mut mixer, CROSSFADE_TAU_SEC);
    let after_one_tau = mixer.scene(0).unwrap().gain.value();
    let expected = SCENE_TARGET_GAIN * (1.0 - (-1.0f32).exp());
    assert!(
        (after_one_tau - expected).abs() < 0.01,
        "after one time constant expected {expected}, got {after_one_tau}"
    );
    render_seconds(&mut mixer, CROSSFADE_TAU_SEC * 4.0);
    let settled = mixer.scene(0).unwrap().gain.value();
    assert!((settled - SCENE_TARGET_GAIN).abs() < 0.01);
}

#[test]
fn switching_scenes_fades_the_old_one_out() {
    let mut mixer = SceneMixer::new(SR, 4).unwrap();
    mixer.set_active_scene(0);
    render_seconds(&mut mixer, 10.0);
    mixer.set_active_scene(3);
    render_seconds(&mut mixer, 2.0);
    let old = mixer.scene(0).unwrap().gain.value();
    let new = mixer.scene(3).unwrap().gain.value();
    assert!(old < SCENE_TARGET_GAIN * 0.5 && old > 0.0);
    assert!(new > 0.25);
    render_seconds(&mut mixer, 15.0);
    assert!(mixer.scene(0).unwrap().gain.value() < 0.01);
}

#[test]
fn stop_all_fades_faster_and_keeps_the_active_index() {
    let mut mixer = SceneMixer::new(SR, 5).unwrap();
    mixer.set_active_scene(2);
    render_seconds(&mut mixer, 10.0);
    mixer.stop_all();
    assert_eq!(mixer.active_scene(), Some(2));
    render_seconds(&mut mixer, STOP_TAU_SEC);
    let g = mixer.scene(2).unwrap().gain.value();
    let expected = SCENE_TARGET_GAIN * (-1.0f32).exp();
    assert!((g - expected).abs() < 0.02, "expected ~{expected}, got {g}");
}

#[test]
fn restart_scene_fades_in_even_when_already_active() {
    let mut mixer = SceneMixer::new(SR, 6).unwrap();
    mixer.set_active_scene(0);
    mixer.stop_all();
    assert!(mixer.restart_scene(0));
    assert_eq!(nonzero_targets(&mixer), 1);
    assert!(!mixer.restart_scene(4));
}

#[test]
fn active_mix_is_audible_finite_and_bounded() {
    for i in 0..4 {
        let mut mixer = SceneMixer::new(SR, 7).unwrap();
        mixer.set_active_scene(i);
        let out = render_seconds(&mut mixer, 6.0);
        assert!(out.iter().all(|s| s.is_finite() && s.abs() < 1.0));
        let peak = out.iter().fold(0.0f32, |a, s| a.max(s.abs()));
        assert!(peak > 1e-3, "scene {i} should be audible, peak={peak}");
    }
}

#[test]
fn heartbeat_only_pulses_while_active() {
    let peak = |active: bool| {
        let mut heart = AudioScene::heart(SR);
        let mut bus = vec![0.0; (SR * 2.5) as usize];
        heart.render_bus(&mut bus, active);
        bus.iter().fold(0.0f32, |a, s| a.max(s.abs()))
    };
    let idle = peak(false);
    assert!(
        idle <= WHINE_LEVEL + TREMOLO_DEPTH + 1e-3,
        "only the whine should sound while inactive, peak={idle}"
    );
    assert!(peak(true) > 0.5);
}

/// Loudest sample within `[from_ms, to_ms)` and where it sits, in ms.
fn loudest_between(bus: &[f32], from_ms: f32, to_ms: f32) -> (f32, f32) {
    let at = |ms: f32| ((ms / 1000.0 * SR) as usize).min(bus.len());
    let (from, to) = (at(from_ms), at(to_ms));
    bus[from..to]
        .iter()
        .enumerate()
        .fold((0.0f32, 0.0f32), |(best, best_ms), (i, s)| {
            if s.abs() > best {
                (s.abs(), (from + i) as f32 * 1000.0 / SR)
            } else {
                (best, best_ms)
            }
        })
}

#[test]
fn heartbeat_beats_lub_dub_every_period() {
    let mut heart = AudioScene::heart(SR);
    let mut bus = vec![0.0; (SR * 1.6) as usize];
    heart.render_bus(&mut bus, true);

    let (lub, lub_ms) = loudest_between(&bus, 0.0, 250.0);
    let (dub, dub_ms) = loudest_between(&bus, 250.0, 600.0);
    let (next, next_ms) = loudest_between(&bus, 1100.0, 1500.0);

    let dub_offset = HEARTBEAT_DUB_OFFSET_SEC * 1000.0;
    let period = HEARTBEAT_PERIOD_SEC * 1000.0;
    assert!(
        (dub_ms - lub_ms - dub_offset).abs() < 40.0,
        "second pulse {dub_ms}ms should trail the first {lub_ms}ms by {dub_offset}ms"
    );
    assert!(
        (next_ms - lub_ms - period).abs() < 40.0,
        "next beat at {next_ms}ms, first at {lub_ms}ms"
    );
    let ratio = dub / lub;
    assert!(
        (0.5..0.7).contains(&ratio),
        "second pulse should be ~{} of the first, got {ratio}",
        HEARTBEAT_DUB_PEAK / HEARTBEAT_LUB_PEAK
    );
    assert!((next - lub).abs() < 0.1, "beats repeat at the same level");
}

#[test]
fn heartbeat_pulse_decays_after_the_scene_goes_inactive() {
    let mut heart = AudioScene::heart(SR);
    let mut attack = vec![0.0; (SR * 0.05) as usize];
    heart.render_bus(&mut attack, true);
    assert!(attack.iter().any(|s| s.abs() > 0.3), "pulse should have started");

    let mut tail = vec![0.0; (SR * 3.0) as usize];
    heart.render_bus(&mut tail, false);
    let (late, _) = loudest_between(&tail, 2000.0, 3000.0);
    assert!(
        late <= WHINE_LEVEL + TREMOLO_DEPTH + 1e-3,
        "beat left sounding after deactivation, peak={late}"
    );
}

#[test]
fn crackle_fires_about_once_per_thousand_samples() {
    let mut crackle = AudioScene::fire(SR, 11).layers()[1].clone();
    assert!(matches!(crackle, Layer::Crackle { .. }));
    let mut buf = vec![0.0f32; 1_000_000];
    for chunk in buf.chunks_mut(PROCESSOR_BLOCK_SIZE) {
        crackle.render_add(chunk, true);
    }
    let fired = buf.iter().filter(|s| **s != 0.0).count();
    let rate = fired as f32 / buf.len() as f32;
    assert!(
        (rate - CRACKLE_PROBABILITY).abs() < CRACKLE_PROBABILITY * 0.2,
        "impulse rate {rate}, expected ~{CRACKLE_PROBABILITY}"
    );
    assert!(buf.iter().all(|s| (0.0..=CRACKLE_MAX_AMPLITUDE).contains(s)));
}

#[test]
fn soundscape_builds_once_and_is_silent_before() {
    let mut scape = Soundscape::new(1);
    assert!(!scape.is_initialized());
    assert!(!scape.set_scene(0));
    let mut block = vec![1.0f32; 256];
    scape.render(&mut block);
    assert!(block.iter().all(|s| *s == 0.0));

    assert_eq!(scape.initialize(-1.0), Err(AudioError::InvalidSampleRate(-1.0)));
    assert!(!scape.is_initialized());
    assert_eq!(scape.initialize(SR), Ok(true));
    assert_eq!(scape.initialize(SR), Ok(false));
    assert!(scape.set_scene(0));
    assert!(!scape.set_scene(0));
    assert_eq!(scape.mixer().and_then(|m| m.active_scene()), Some(0));
}

#[test]
fn filters_shape_their_input() {
    let mut lp = StateVariableFilter::lowpass(1.0, SR);
    let mut osc = Oscillator::sine(3_000.0, SR);
    let mut peak_high = 0.0f32;
    for i in 0..2_000 {
        let y = lp.process(osc.next_sample(), 200.0);
        if i > 200 {
            peak_high = peak_high.max(y.abs());
        }
    }
    assert!(peak_high < 0.1, "low-pass should reject 3 kHz, peak={peak_high}");

    let mut bp = StateVariableFilter::bandpass(10.0, SR);
    let mut center = Oscillator::sine(600.0, SR);
    let mut peak_center = 0.0f32;
    for i in 0..8_000 {
        let y = bp.process(center.next_sample(), 600.0);
        if i > 4_000 {
            peak_center = peak_center.max(y.abs());
        }
    }
    assert!((peak_center - 1.0).abs() < 0.1, "band-pass should pass its center at unity, peak={peak_center}");
}

#[test]
fn triangle_oscillator_is_bounded_and_symmetric() {
    let mut tri = Oscillator::triangle(100.0, SR);
    let samples: Vec<f32> = (0..800).map(|_| tri.next_sample()).collect();
    assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    let max = samples.iter().cloned().fold(f32::MIN, f32::max);
    let min = samples.iter().cloned().fold(f32::MAX, f32::min);
    assert!(max > 0.95 && min < -0.95);
}
