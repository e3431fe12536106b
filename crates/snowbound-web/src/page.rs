use crate::constants::*;
use crate::dom::{self, set_class, set_style};
use crate::scratch::ScratchView;
use fnv::FnvHashMap;
use snowbound_core::{ChapterId, FadeLevels, Game, Story, StoryEvent};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM handles touched by story events, resolved once at startup.
pub struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub scratch: ScratchView,
    pub snow_canvas: web::HtmlCanvasElement,
    pub audio_button: web::Element,
    by_id: FnvHashMap<&'static str, web::Element>,
    pins: Vec<web::Element>,
    heart_img: Option<web::HtmlImageElement>,
    cut_line: Option<web::Element>,
    end_fin: Option<web::Element>,
}

impl Page {
    pub fn new(window: web::Window, document: web::Document) -> anyhow::Result<Self> {
        let scratch_canvas = dom::by_id(&document, SCRATCH_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let scratch_container = dom::by_id(&document, Game::Scratch.container_id())?;
        let snow_canvas = dom::by_id(&document, SNOW_CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let audio_button = dom::by_id(&document, AUDIO_BUTTON_ID)?;

        let mut by_id = FnvHashMap::default();
        let ids = ChapterId::ALL
            .iter()
            .map(|c| c.element_id())
            .chain(
                [Game::Scratch, Game::Lock, Game::Cut]
                    .iter()
                    .map(|g| g.container_id()),
            )
            .chain([WHITEOUT_ID, RESET_BUTTON_ID]);
        for id in ids {
            match document.get_element_by_id(id) {
                Some(el) => {
                    by_id.insert(id, el);
                }
                None => log::warn!("[page] missing #{}", id),
            }
        }

        // pins are addressed by their data-index, not document order
        let mut pins: Vec<(usize, web::Element)> = dom::query_all(&document, PIN_SELECTOR)
            .into_iter()
            .enumerate()
            .map(|(i, el)| {
                let index = el
                    .get_attribute("data-index")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(i);
                (index, el)
            })
            .collect();
        pins.sort_by_key(|(i, _)| *i);

        let heart_img = dom::query(&document, HEART_IMAGE_SELECTOR)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
        let cut_line = dom::query(&document, CUT_LINE_SELECTOR);
        let end_fin = dom::query(&document, END_FIN_SELECTOR);

        Ok(Self {
            scratch: ScratchView::new(scratch_canvas, scratch_container)?,
            window,
            document,
            snow_canvas,
            audio_button,
            by_id,
            pins: pins.into_iter().map(|(_, el)| el).collect(),
            heart_img,
            cut_line,
            end_fin,
        })
    }

    pub fn element(&self, id: &str) -> Option<&web::Element> {
        self.by_id.get(id)
    }

    pub fn pin_index(&self, el: &web::Element) -> Option<usize> {
        self.pins.iter().position(|p| p == el)
    }

    pub fn pins(&self) -> &[web::Element] {
        &self.pins
    }

    fn toggle(&self, id: &str, class: &str, on: bool) {
        if let Some(el) = self.element(id) {
            set_class(el, class, on);
        }
    }

    fn apply_fade(&self, levels: FadeLevels) {
        if let Some(el) = self.element(WHITEOUT_ID) {
            set_style(el, "opacity", &levels.whiteout.to_string());
        }
        if let Some(el) = &self.end_fin {
            set_style(el, "opacity", &levels.fin.to_string());
        }
        self.toggle(RESET_BUTTON_ID, CLASS_HIDDEN, !levels.reset_visible);
    }

    pub fn mark_audio_enabled(&self) {
        if let Some(el) = self.audio_button.dyn_ref::<web::HtmlElement>() {
            el.set_inner_text(AUDIO_ENABLED_LABEL);
        }
        set_class(&self.audio_button, CLASS_AUDIO_ON, true);
    }

    /// Reflect story events in the DOM. Audio events are left to the host.
    pub fn apply(&self, story: &Story, events: &[StoryEvent]) {
        for ev in events {
            match ev {
                StoryEvent::ChapterRevealed(c) => self.toggle(c.element_id(), CLASS_HIDDEN, false),
                StoryEvent::ChapterUnlocked(c) => {
                    self.toggle(c.element_id(), CLASS_LOCKED_CHAPTER, false)
                }
                StoryEvent::ChaptersRelocked => {
                    for c in ChapterId::ALL.iter().filter(|c| **c != ChapterId::Wind) {
                        self.toggle(c.element_id(), CLASS_LOCKED_CHAPTER, true);
                    }
                }
                StoryEvent::GameResolved(g) => self.toggle(g.container_id(), CLASS_RESOLVED, true),
                StoryEvent::GameReset(g) => self.toggle(g.container_id(), CLASS_RESOLVED, false),
                StoryEvent::ScratchCovered => self.scratch.paint_cover(story.scratch()),
                StoryEvent::ScratchErased { at, radius } => self.scratch.erase(*at, *radius),
                StoryEvent::PinRaised(i) => {
                    if let Some(p) = self.pins.get(*i) {
                        set_class(p, CLASS_PIN_UP, true);
                    }
                }
                StoryEvent::PinsLowered => {
                    for p in &self.pins {
                        set_class(p, CLASS_PIN_UP, false);
                    }
                }
                StoryEvent::PinFlashStarted(i) | StoryEvent::PinFlashEnded(i) => {
                    if let Some(p) = self.pins.get(*i) {
                        let on = matches!(ev, StoryEvent::PinFlashStarted(_));
                        set_class(p, CLASS_PIN_ERROR, on);
                    }
                }
                StoryEvent::HeartSevered => {
                    if let Some(el) = &self.cut_line {
                        set_style(el, "opacity", "0");
                    }
                    if let Some(img) = &self.heart_img {
                        set_style(img, "transform", HEART_BROKEN_TRANSFORM);
                    }
                }
                StoryEvent::HeartImageSwapped => {
                    if let Some(img) = &self.heart_img {
                        img.set_src(HEART_SWAP_SRC);
                    }
                }
                StoryEvent::HeartRestored => {
                    if let Some(el) = &self.cut_line {
                        set_style(el, "opacity", "1");
                    }
                    if let Some(img) = &self.heart_img {
                        set_style(img, "transform", "none");
                    }
                }
                StoryEvent::FadeChanged(levels) => self.apply_fade(*levels),
                StoryEvent::ScrolledToTop => self.window.scroll_to_with_x_and_y(0.0, 0.0),
                StoryEvent::SceneRequested(_)
                | StoryEvent::SceneRearmed(_)
                | StoryEvent::AudioStopped => {}
            }
        }
    }
}
