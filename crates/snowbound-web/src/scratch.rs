use crate::constants::SCRATCH_COVER_FILL;
use crate::dom;
use crate::geometry::{client_to_backing, surface_size};
use crate::input;
use glam::Vec2;
use snowbound_core::{Point, ScratchCard};
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas mirror of the scratch card's cover.
pub struct ScratchView {
    pub canvas: web::HtmlCanvasElement,
    container: web::Element,
    ctx: web::CanvasRenderingContext2d,
}

impl ScratchView {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        container: web::Element,
    ) -> anyhow::Result<Self> {
        let ctx = dom::canvas_2d(&canvas)?;
        Ok(Self {
            canvas,
            container,
            ctx,
        })
    }

    /// Current container size in whole CSS pixels.
    pub fn measure(&self) -> (u32, u32) {
        surface_size(input::client_rect(&self.container))
    }

    /// Pointer position in canvas pixels.
    pub fn local(&self, client: Vec2) -> Point {
        client_to_backing(
            client,
            input::client_rect(&self.canvas),
            input::canvas_backing(&self.canvas),
        )
    }

    /// Resize the backing store to the card and repaint the full cover.
    pub fn paint_cover(&self, card: &ScratchCard) {
        let (w, h) = card.size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        let _ = self.ctx.set_global_composite_operation("source-over");
        self.ctx.set_fill_style_str(SCRATCH_COVER_FILL);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
        for s in card.specks() {
            let fill = format!("rgba(200, 200, 200, {})", s.alpha);
            self.ctx.set_fill_style_str(&fill);
            self.ctx
                .fill_rect(s.x as f64, s.y as f64, s.size as f64, s.size as f64);
        }
    }

    pub fn erase(&self, at: Point, radius: f32) {
        let _ = self.ctx.set_global_composite_operation("destination-out");
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(at.x as f64, at.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
