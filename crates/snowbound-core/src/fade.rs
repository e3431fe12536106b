use crate::constants::*;

/// Opacities for the final chapter's fade to white.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FadeLevels {
    pub whiteout: f32,
    pub fin: f32,
    pub reset_visible: bool,
}

/// Where chapter 4 sits relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChapterBounds {
    pub top: f32,
    pub height: f32,
    pub viewport_height: f32,
}

/// Map chapter 4's scroll position to fade levels. `None` while the chapter
/// is still below the fold, or for a zero-height layout.
pub fn whiteout_levels(bounds: ChapterBounds) -> Option<FadeLevels> {
    if !(bounds.top < bounds.viewport_height) || !(bounds.height > 0.0) {
        return None;
    }
    let progress = ((bounds.viewport_height - bounds.top) / bounds.height).max(0.0);
    if progress <= WHITEOUT_FADE_START {
        return Some(FadeLevels::default());
    }
    let whiteout = ((progress - WHITEOUT_FADE_START) * WHITEOUT_FADE_RATE).min(1.0);
    let fin = if whiteout > FIN_GATE {
        ((progress - FIN_FADE_START) * FIN_FADE_RATE).clamp(0.0, 1.0)
    } else {
        0.0
    };
    Some(FadeLevels {
        whiteout,
        fin,
        reset_visible: whiteout > RESET_REVEAL_WHITEOUT,
    })
}
