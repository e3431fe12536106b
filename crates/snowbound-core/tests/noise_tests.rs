// Host-side tests for the white and pink noise sources.

use snowbound_core::{PinkNoise, WhiteNoise, PROCESSOR_BLOCK_SIZE};

#[test]
fn white_noise_stays_in_unit_range() {
    let mut white = WhiteNoise::new(7);
    let samples = white.generate(10_000);
    assert_eq!(samples.len(), 10_000);
    assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    assert!(mean.abs() < 0.05, "white noise should be centered, mean={mean}");
}

#[test]
fn white_noise_calls_are_independent() {
    let mut white = WhiteNoise::new(7);
    let a = white.generate(64);
    let b = white.generate(64);
    assert_ne!(a, b);
}

#[test]
fn pink_noise_is_deterministic_for_a_seed() {
    let a = PinkNoise::new(42).generate(2048);
    let b = PinkNoise::new(42).generate(2048);
    assert_eq!(a, b);
    let c = PinkNoise::new(43).generate(2048);
    assert_ne!(a, c);
}

#[test]
fn pink_noise_blocks_continue_one_stream() {
    let mut blocked = PinkNoise::new(9);
    let mut stream = Vec::new();
    let mut block = vec![0.0f32; PROCESSOR_BLOCK_SIZE];
    for _ in 0..3 {
        blocked.next_block(&mut block);
        stream.extend_from_slice(&block);
    }
    let continuous = PinkNoise::new(9).generate(PROCESSOR_BLOCK_SIZE * 3);
    assert_eq!(stream, continuous);
}

#[test]
fn pink_noise_has_no_jump_at_block_boundaries() {
    let mut pink = PinkNoise::new(3);
    let mut prev_block = pink.generate(PROCESSOR_BLOCK_SIZE);
    for _ in 0..8 {
        let block = pink.generate(PROCESSOR_BLOCK_SIZE);
        let within = block
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .fold(0.0f32, f32::max);
        let boundary = (block[0] - prev_block[PROCESSOR_BLOCK_SIZE - 1]).abs();
        assert!(boundary < 0.5, "boundary step too large: {boundary}");
        assert!(
            boundary <= within * 1.5,
            "boundary step {boundary} stands out from in-block steps {within}"
        );
        prev_block = block;
    }
}

#[test]
fn pink_noise_keeps_filter_state_between_blocks() {
    let mut pink = PinkNoise::new(5);
    assert_eq!(pink.state(), [0.0; 7]);
    pink.generate(PROCESSOR_BLOCK_SIZE);
    let state = pink.state();
    assert!(state.iter().any(|b| *b != 0.0));
    let continued = pink.generate(16);
    let mut replay = PinkNoise::new(5);
    replay.generate(PROCESSOR_BLOCK_SIZE);
    assert_eq!(replay.generate(16), continued);
    assert_ne!(PinkNoise::new(5).generate(16), continued);
}

#[test]
fn pink_noise_has_more_low_than_high_frequency_energy() {
    let samples = PinkNoise::new(11).generate(1 << 15);
    // first difference acts as a crude high-pass, a running pair-sum as a low-pass
    let diff: f32 = samples.windows(2).map(|w| (w[1] - w[0]).powi(2)).sum();
    let sum: f32 = samples.windows(2).map(|w| (w[1] + w[0]).powi(2)).sum();
    assert!(sum > diff, "expected low-frequency tilt: sum={sum} diff={diff}");
    assert!(samples.iter().all(|s| s.is_finite() && s.abs() < 2.0));
}
