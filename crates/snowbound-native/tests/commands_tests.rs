// Host-side tests for the audition command parser and scripted gestures.
// The binary's command module is included directly.

#![allow(dead_code)]
mod commands {
    include!("../src/commands.rs");
}

use commands::*;
use snowbound_core::{path_severs, ChapterId, CutTuning, ScratchCard, ScratchTuning};

#[test]
fn parses_every_command() {
    assert_eq!(parse_command("show 3").unwrap(), Some(Command::Show(ChapterId::Heart)));
    assert_eq!(parse_command("  SCRATCH ").unwrap(), Some(Command::Scratch));
    assert_eq!(
        parse_command("pins 0 2 1").unwrap(),
        Some(Command::Pins(vec![0, 2, 1]))
    );
    assert_eq!(parse_command("cut").unwrap(), Some(Command::Cut));
    assert_eq!(parse_command("reset").unwrap(), Some(Command::Reset));
    assert_eq!(parse_command("q").unwrap(), Some(Command::Quit));
    assert_eq!(parse_command("   ").unwrap(), None);
}

#[test]
fn rejects_malformed_commands() {
    assert!(parse_command("show").is_err());
    assert!(parse_command("show 0").is_err());
    assert!(parse_command("show 5").is_err());
    assert!(parse_command("pins").is_err());
    assert!(parse_command("pins a").is_err());
    assert!(parse_command("dance").is_err());
}

#[test]
fn scripted_sweep_clears_the_scratch_card() {
    let tuning = ScratchTuning::default();
    let radius = tuning.brush_radius;
    let mut card = ScratchCard::new(tuning, 4);
    assert!(card.layout(300, 200));
    let path = scratch_sweep(300, 200, radius);
    card.begin(path[0]);
    for p in &path[1..] {
        card.stroke(*p);
    }
    assert!(card.end());
}

#[test]
fn scripted_arc_severs_the_heart() {
    assert!(path_severs(&cut_arc(), &CutTuning::default()));
}
