use crate::app::App;
use crate::constants::SNOWFLAKE_FILL;
use crate::dom;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the snow canvas to the viewport and tell the flakes.
pub fn sync_snow_canvas(app: &App) {
    let (w, h) = dom::viewport_size(&app.page.window);
    app.page.snow_canvas.set_width(w as u32);
    app.page.snow_canvas.set_height(h as u32);
    app.snow.borrow_mut().resize(w as f32, h as f32);
}

fn draw_snow(app: &App, ctx: &web::CanvasRenderingContext2d) {
    let snow = app.snow.borrow();
    let bounds = snow.bounds();
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    ctx.set_fill_style_str(SNOWFLAKE_FILL);
    for f in snow.flakes() {
        ctx.begin_path();
        let _ = ctx.arc(f.pos.x as f64, f.pos.y as f64, f.size as f64, 0.0, TAU);
        ctx.fill();
    }
}

/// Drive the story clock and the snowfall from requestAnimationFrame.
pub fn start_loop(app: Rc<App>) -> anyhow::Result<()> {
    let ctx = dom::canvas_2d(&app.page.snow_canvas)?;
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = app.now();
        app.dispatch(|s, out| s.advance(now, out));
        app.snow.borrow_mut().step();
        draw_snow(&app, &ctx);

        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        w.request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;
    }
    Ok(())
}
