use crate::audio::AudioHost;
use crate::dom;
use crate::page::Page;
use instant::Instant;
use snowbound_core::{ChapterBounds, ChapterId, Snowfall, Story, StoryEvent};
use std::cell::RefCell;
use std::time::Duration;

/// Shared state behind every listener, held in an `Rc`.
pub struct App {
    pub page: Page,
    pub audio: AudioHost,
    pub snow: RefCell<Snowfall>,
    story: RefCell<Story>,
    events: RefCell<Vec<StoryEvent>>,
    started: Instant,
}

impl App {
    pub fn new(page: Page, story: Story, audio: AudioHost, snow: Snowfall) -> Self {
        Self {
            page,
            audio,
            snow: RefCell::new(snow),
            story: RefCell::new(story),
            events: RefCell::new(Vec::new()),
            started: Instant::now(),
        }
    }

    /// Time since the page started, the story's clock.
    pub fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Run one story operation and push its events to the page and audio.
    pub fn dispatch(&self, op: impl FnOnce(&mut Story, &mut Vec<StoryEvent>)) {
        let mut events = std::mem::take(&mut *self.events.borrow_mut());
        op(&mut self.story.borrow_mut(), &mut events);
        if !events.is_empty() {
            let story = self.story.borrow();
            self.page.apply(&story, &events);
            self.audio.apply(&events);
        }
        events.clear();
        *self.events.borrow_mut() = events;
    }

    pub fn layout_scratch(&self) {
        let (w, h) = self.page.scratch.measure();
        self.dispatch(|s, out| s.layout_scratch(w, h, out));
    }

    pub fn scrolled(&self) {
        let Some(chapter) = self.page.element(ChapterId::Void.element_id()) else {
            return;
        };
        let rect = chapter.get_bounding_client_rect();
        let (_, viewport_height) = dom::viewport_size(&self.page.window);
        let bounds = ChapterBounds {
            top: rect.top() as f32,
            height: rect.height() as f32,
            viewport_height: viewport_height as f32,
        };
        self.dispatch(|s, out| s.scrolled(bounds, out));
    }
}
