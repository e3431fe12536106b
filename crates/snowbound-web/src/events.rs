use crate::app::App;
use crate::constants::*;
use crate::dom::{self, add_listener};
use crate::geometry::{client_to_local, is_at_top};
use crate::input;
use js_sys::Array;
use snowbound_core::ChapterId;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_all(app: &Rc<App>) {
    wire_scratch(app);
    wire_pins(app);
    wire_cut(app);
    wire_window(app);
    wire_chapter_observer(app);
    wire_buttons(app);
    wire_interactive_text(&app.page.document);
}

fn wire_scratch(app: &Rc<App>) {
    let canvas = app.page.scratch.canvas.clone();
    {
        let app = app.clone();
        add_listener(&canvas, "mousedown", move |ev: web::MouseEvent| {
            let p = app.page.scratch.local(input::mouse_client(&ev));
            app.dispatch(|s, out| s.scratch_pressed(p, out));
        });
    }
    {
        let app = app.clone();
        add_listener(&canvas, "mousemove", move |ev: web::MouseEvent| {
            let p = app.page.scratch.local(input::mouse_client(&ev));
            app.dispatch(|s, out| s.scratch_moved(p, out));
        });
    }
    {
        let app = app.clone();
        add_listener(&canvas, "touchstart", move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(client) = input::touch_client(&ev) {
                let p = app.page.scratch.local(client);
                app.dispatch(|s, out| s.scratch_pressed(p, out));
            }
        });
    }
    {
        let app = app.clone();
        add_listener(&canvas, "touchmove", move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(client) = input::touch_client(&ev) {
                let p = app.page.scratch.local(client);
                app.dispatch(|s, out| s.scratch_moved(p, out));
            }
        });
    }
    for kind in ["mouseup", "touchend"] {
        let app = app.clone();
        add_listener(&canvas, kind, move |_: web::Event| {
            app.dispatch(|s, out| s.scratch_released(out));
        });
    }
}

fn wire_pins(app: &Rc<App>) {
    for pin in app.page.pins() {
        let app_pin = app.clone();
        let target = pin.clone();
        add_listener(pin, "click", move |_: web::MouseEvent| {
            if let Some(index) = app_pin.page.pin_index(&target) {
                let now = app_pin.now();
                app_pin.dispatch(|s, out| s.pin_pressed(index, now, out));
            }
        });
    }
}

fn wire_cut(app: &Rc<App>) {
    let Some(target) = dom::query(&app.page.document, HEART_TARGET_SELECTOR) else {
        log::warn!("[events] no heart target; cut game disabled");
        return;
    };
    for kind in ["mousedown", "touchstart"] {
        let app = app.clone();
        add_listener(&target, kind, move |_: web::Event| {
            app.dispatch(|s, _| s.cut_started());
        });
    }
    {
        let app = app.clone();
        let el = target.clone();
        add_listener(&target, "mousemove", move |ev: web::MouseEvent| {
            let p = client_to_local(input::mouse_client(&ev), input::client_rect(&el));
            app.dispatch(|s, _| s.cut_moved(p));
        });
    }
    {
        let app = app.clone();
        let el = target.clone();
        add_listener(&target, "touchmove", move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(client) = input::touch_client(&ev) {
                let p = client_to_local(client, input::client_rect(&el));
                app.dispatch(|s, _| s.cut_moved(p));
            }
        });
    }
    for kind in ["mouseup", "mouseleave", "touchend"] {
        let app = app.clone();
        add_listener(&target, kind, move |_: web::Event| {
            let now = app.now();
            app.dispatch(|s, out| s.cut_ended(now, out));
        });
    }
}

fn wire_window(app: &Rc<App>) {
    let window = app.page.window.clone();
    {
        let app = app.clone();
        add_listener(&window, "resize", move |_: web::Event| {
            crate::frame::sync_snow_canvas(&app);
            app.layout_scratch();
        });
    }
    {
        let app = app.clone();
        add_listener(&window, "scroll", move |_: web::Event| app.scrolled());
    }
    let app = app.clone();
    dom::set_timeout(&window, INITIAL_LAYOUT_DELAY_MS, move || app.layout_scratch());
}

fn wire_chapter_observer(app: &Rc<App>) {
    let app_obs = app.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(chapter) = ChapterId::from_element_id(&entry.target().id()) {
                app_obs.dispatch(|s, out| s.chapter_visible(chapter, out));
            }
        }
    }) as Box<dyn FnMut(Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(OBSERVER_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => {
            for chapter in dom::query_all(&app.page.document, CHAPTER_SELECTOR) {
                observer.observe(&chapter);
            }
        }
        Err(e) => log::error!("[events] IntersectionObserver: {:?}", e),
    }
    callback.forget();
}

fn wire_buttons(app: &Rc<App>) {
    {
        let app = app.clone();
        let button = app.page.audio_button.clone();
        add_listener(&button, "click", move |_: web::MouseEvent| {
            let app = app.clone();
            spawn_local(async move {
                match app.audio.enable().await {
                    Ok(_) => {
                        app.page.mark_audio_enabled();
                        let scroll_y = app.page.window.scroll_y().unwrap_or(0.0);
                        let (_, viewport_height) = dom::viewport_size(&app.page.window);
                        let at_top = is_at_top(scroll_y, viewport_height);
                        app.dispatch(|s, out| s.audio_enabled(at_top, out));
                    }
                    Err(e) => log::error!("[audio] enable failed: {:?}", e),
                }
            });
        });
    }
    let Some(reset) = app.page.element(RESET_BUTTON_ID).cloned() else {
        return;
    };
    let app = app.clone();
    add_listener(&reset, "click", move |_: web::MouseEvent| {
        app.dispatch(|s, out| s.reset_all(out));
    });
}

fn wire_interactive_text(document: &web::Document) {
    for text in dom::query_all(document, INTERACTIVE_TEXT_SELECTOR) {
        let el = text.clone();
        add_listener(&text, "click", move |_: web::MouseEvent| {
            let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
                return;
            };
            if let Some(reveal) = el.get_attribute("data-reveal") {
                html.set_inner_text(&reveal);
            }
            dom::set_style(&el, "cursor", "default");
            dom::set_style(&el, "color", "#fff");
        });
    }
}
