// Host-side tests for the whiteout fade math and the snowfall animation.

use snowbound_core::*;

fn bounds(top: f32) -> ChapterBounds {
    ChapterBounds {
        top,
        height: 1_000.0,
        viewport_height: 800.0,
    }
}

#[test]
fn whiteout_is_inactive_below_the_fold() {
    assert_eq!(whiteout_levels(bounds(800.0)), None);
    assert_eq!(whiteout_levels(bounds(2_000.0)), None);
    let flat = ChapterBounds {
        top: 0.0,
        height: 0.0,
        viewport_height: 800.0,
    };
    assert_eq!(whiteout_levels(flat), None);
}

#[test]
fn whiteout_waits_for_the_start_threshold() {
    // progress = (800 - 600) / 1000 = 0.2
    assert_eq!(whiteout_levels(bounds(600.0)), Some(FadeLevels::default()));
}

#[test]
fn whiteout_ramps_before_the_fin_appears() {
    // progress 0.6 -> whiteout 0.45
    let levels = whiteout_levels(bounds(200.0)).unwrap();
    assert!((levels.whiteout - 0.45).abs() < 1e-5);
    assert_eq!(levels.fin, 0.0);
    assert!(!levels.reset_visible);

    // progress 0.85 -> whiteout 0.825, reset shown but fin still gated
    let levels = whiteout_levels(bounds(-50.0)).unwrap();
    assert!((levels.whiteout - 0.825).abs() < 1e-5);
    assert!(levels.reset_visible);
    assert_eq!(levels.fin, 0.0);
}

#[test]
fn whiteout_and_fin_saturate() {
    // progress 1.0 -> whiteout 1.0, fin (1.0 - 0.8) * 3
    let levels = whiteout_levels(bounds(-200.0)).unwrap();
    assert_eq!(levels.whiteout, 1.0);
    assert!((levels.fin - 0.6).abs() < 1e-5);
    let far = whiteout_levels(bounds(-5_000.0)).unwrap();
    assert_eq!(far.whiteout, 1.0);
    assert_eq!(far.fin, 1.0);
}

#[test]
fn whiteout_never_decreases_while_scrolling_down() {
    let mut last = 0.0f32;
    for top in (-1_500..800).rev().step_by(25) {
        if let Some(levels) = whiteout_levels(bounds(top as f32)) {
            assert!(levels.whiteout >= last);
            last = levels.whiteout;
        }
    }
    assert_eq!(last, 1.0);
}

#[test]
fn snowflakes_spawn_inside_the_viewport() {
    let snow = Snowfall::new(SNOWFLAKE_COUNT, 640.0, 480.0, 8);
    assert_eq!(snow.flakes().len(), SNOWFLAKE_COUNT);
    for f in snow.flakes() {
        assert!((0.0..=640.0).contains(&f.pos.x) && (0.0..=480.0).contains(&f.pos.y));
        assert!((1.0..4.0).contains(&f.size));
        assert!((0.5..1.5).contains(&f.speed));
        assert!((-0.25..0.25).contains(&f.wind));
    }
}

#[test]
fn snowflakes_fall_and_wrap() {
    let mut snow = Snowfall::new(50, 200.0, 100.0, 9);
    let before: Vec<f32> = snow.flakes().iter().map(|f| f.pos.y).collect();
    snow.step();
    for (f, y) in snow.flakes().iter().zip(&before) {
        assert!(f.pos.y > *y || f.pos.y < 0.0);
    }
    for _ in 0..1_000 {
        snow.step();
        for f in snow.flakes() {
            assert!(f.pos.y <= 100.0 + 1.5);
            assert!((0.0..=200.0).contains(&f.pos.x));
        }
    }
}

#[test]
fn resize_keeps_flakes_in_place() {
    let mut snow = Snowfall::new(10, 200.0, 100.0, 10);
    let before = snow.flakes().to_vec();
    snow.resize(400.0, 300.0);
    assert_eq!(snow.bounds(), glam::Vec2::new(400.0, 300.0));
    assert_eq!(snow.flakes(), &before[..]);
}
