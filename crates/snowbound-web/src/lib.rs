#![cfg(target_arch = "wasm32")]
use snowbound_core::{GameTuning, Snowfall, Story, SNOWFLAKE_COUNT};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod input;
mod page;
mod scratch;

use app::App;
use audio::AudioHost;
use page::Page;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("snowbound-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn page_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = js_sys::Date::now() as u64;
    (hi << 32) ^ lo
}

async fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let seed = page_seed();
    let page = Page::new(window.clone(), document)?;
    let story = Story::new(GameTuning::default(), seed)?;
    let (w, h) = dom::viewport_size(&window);
    let snow = Snowfall::new(SNOWFLAKE_COUNT, w as f32, h as f32, seed ^ 0x5EED_5A0F);
    let app = Rc::new(App::new(page, story, AudioHost::new(seed ^ 0xA0D1_0000), snow));

    frame::sync_snow_canvas(&app);
    app.layout_scratch();
    events::wire_all(&app);
    frame::start_loop(app)?;
    log::info!("snowbound-web ready");
    Ok(())
}
