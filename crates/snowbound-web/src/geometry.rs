// Pure coordinate helpers shared by the pointer handlers.
// Kept free of web-sys so host tests can include this file.

use glam::Vec2;

/// Element bounds as reported by `getBoundingClientRect`, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl ClientRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }
}

/// Client position relative to the element's top-left corner.
#[inline]
pub fn client_to_local(client: Vec2, rect: ClientRect) -> Vec2 {
    client - rect.origin
}

/// Client position in a canvas backing store of `backing` pixels.
///
/// A zero-sized rect maps with scale `backing` rather than dividing by zero.
#[inline]
pub fn client_to_backing(client: Vec2, rect: ClientRect, backing: Vec2) -> Vec2 {
    let css = Vec2::new(
        if rect.size.x == 0.0 { 1.0 } else { rect.size.x },
        if rect.size.y == 0.0 { 1.0 } else { rect.size.y },
    );
    client_to_local(client, rect) * (backing / css)
}

/// Whole-pixel surface size for a laid-out container; zero while unlaid.
#[inline]
pub fn surface_size(rect: ClientRect) -> (u32, u32) {
    let w = rect.size.x.max(0.0) as u32;
    let h = rect.size.y.max(0.0) as u32;
    (w, h)
}

/// Still within the first screen of the page.
#[inline]
pub fn is_at_top(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y < viewport_height
}
