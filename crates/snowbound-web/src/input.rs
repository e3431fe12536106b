use crate::geometry::ClientRect;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// First active touch, if any. `touchend` carries none.
#[inline]
pub fn touch_client(ev: &web::TouchEvent) -> Option<Vec2> {
    ev.touches()
        .get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

#[inline]
pub fn client_rect(el: &web::Element) -> ClientRect {
    let r = el.get_bounding_client_rect();
    ClientRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn canvas_backing(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width() as f32, canvas.height() as f32)
}
