//! Chapter progression: owns the game flags, the three mini-games and the
//! unlock chain, and reports everything the page or the soundscape should do
//! as [`StoryEvent`]s.

use crate::chapter::{ChapterId, Game};
use crate::constants::CHAPTER_COUNT;
use crate::error::TuningError;
use crate::fade::{whiteout_levels, ChapterBounds, FadeLevels};
use crate::gesture::{HeartCut, PinLock, PinPress, Point, ScratchCard};
use crate::tuning::GameTuning;
use smallvec::SmallVec;
use std::time::Duration;

/// Completion flags. Only ever flip false -> true, except through reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub snow_cleared: bool,
    pub lock_picked: bool,
    pub heart_cut: bool,
}

impl GameState {
    pub fn is_complete(&self, game: Game) -> bool {
        match game {
            Game::Scratch => self.snow_cleared,
            Game::Lock => self.lock_picked,
            Game::Cut => self.heart_cut,
        }
    }

    fn mark(&mut self, game: Game) -> bool {
        let flag = match game {
            Game::Scratch => &mut self.snow_cleared,
            Game::Lock => &mut self.lock_picked,
            Game::Cut => &mut self.heart_cut,
        };
        !std::mem::replace(flag, true)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StoryEvent {
    ChapterRevealed(ChapterId),
    ChapterUnlocked(ChapterId),
    /// Chapters 2-4 locked again.
    ChaptersRelocked,
    GameResolved(Game),
    GameReset(Game),
    SceneRequested(usize),
    /// Fade a scene in even if it is already the active one.
    SceneRearmed(usize),
    AudioStopped,
    /// Scratch surface was (re)built; repaint its cover.
    ScratchCovered,
    ScratchErased { at: Point, radius: f32 },
    PinRaised(usize),
    PinsLowered,
    PinFlashStarted(usize),
    PinFlashEnded(usize),
    HeartSevered,
    HeartImageSwapped,
    HeartRestored,
    FadeChanged(FadeLevels),
    ScrolledToTop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    LockOpened,
    PinFlashEnded(usize),
    HeartImageSwapped,
}

pub struct Story {
    tuning: GameTuning,
    state: GameState,
    unlocked: [bool; CHAPTER_COUNT],
    revealed: [bool; CHAPTER_COUNT],
    audio_enabled: bool,
    scratch: ScratchCard,
    lock: PinLock,
    cut: HeartCut,
    pending: SmallVec<[(Duration, Deferred); 4]>,
    fade: FadeLevels,
}

const INITIAL_UNLOCKS: [bool; CHAPTER_COUNT] = [true, false, false, false];

impl Story {
    pub fn new(tuning: GameTuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            scratch: ScratchCard::new(tuning.scratch.clone(), seed),
            lock: PinLock::new(tuning.lock.pin_count),
            cut: HeartCut::new(tuning.cut.clone()),
            tuning,
            state: GameState::default(),
            unlocked: INITIAL_UNLOCKS,
            revealed: [false; CHAPTER_COUNT],
            audio_enabled: false,
            pending: SmallVec::new(),
            fade: FadeLevels::default(),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_unlocked(&self, chapter: ChapterId) -> bool {
        self.unlocked[chapter.index()]
    }

    pub fn is_revealed(&self, chapter: ChapterId) -> bool {
        self.revealed[chapter.index()]
    }

    pub fn is_audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn scratch(&self) -> &ScratchCard {
        &self.scratch
    }

    pub fn lock(&self) -> &PinLock {
        &self.lock
    }

    pub fn cut(&self) -> &HeartCut {
        &self.cut
    }

    pub fn fade(&self) -> FadeLevels {
        self.fade
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn complete(&mut self, game: Game, out: &mut Vec<StoryEvent>) {
        if !self.state.mark(game) {
            return;
        }
        log::debug!("[story] {:?} resolved", game);
        out.push(StoryEvent::GameResolved(game));
        let next = game.unlocks();
        if !std::mem::replace(&mut self.unlocked[next.index()], true) {
            log::debug!("[story] {:?} unlocked", next);
            out.push(StoryEvent::ChapterUnlocked(next));
        }
    }

    fn schedule(&mut self, at: Duration, deferred: Deferred) {
        self.pending.retain(|(_, d)| *d != deferred);
        self.pending.push((at, deferred));
    }

    // ---------------- scratch ----------------

    /// Container was laid out or resized. Rebuilds the cover unless cleared.
    pub fn layout_scratch(&mut self, width: u32, height: u32, out: &mut Vec<StoryEvent>) {
        if self.scratch.layout(width, height) {
            out.push(StoryEvent::ScratchCovered);
        }
    }

    pub fn scratch_pressed(&mut self, p: Point, out: &mut Vec<StoryEvent>) {
        if self.scratch.begin(p) {
            out.push(self.erased_at(p));
        }
    }

    pub fn scratch_moved(&mut self, p: Point, out: &mut Vec<StoryEvent>) {
        if self.scratch.stroke(p) {
            out.push(self.erased_at(p));
        }
    }

    pub fn scratch_released(&mut self, out: &mut Vec<StoryEvent>) {
        if self.scratch.end() {
            self.complete(Game::Scratch, out);
        }
    }

    fn erased_at(&self, at: Point) -> StoryEvent {
        StoryEvent::ScratchErased {
            at,
            radius: self.scratch.brush_radius(),
        }
    }

    // ---------------- lock ----------------

    pub fn pin_pressed(&mut self, pin: usize, now: Duration, out: &mut Vec<StoryEvent>) {
        match self.lock.press(pin) {
            PinPress::Ignored => {}
            PinPress::Raised { pin } => out.push(StoryEvent::PinRaised(pin)),
            PinPress::Picked { pin } => {
                out.push(StoryEvent::PinRaised(pin));
                self.schedule(now + self.tuning.lock.open_delay, Deferred::LockOpened);
            }
            PinPress::Jammed { pin } => {
                out.push(StoryEvent::PinsLowered);
                out.push(StoryEvent::PinFlashStarted(pin));
                self.schedule(
                    now + self.tuning.lock.error_flash,
                    Deferred::PinFlashEnded(pin),
                );
            }
        }
    }

    // ---------------- cut ----------------

    pub fn cut_started(&mut self) {
        if !self.state.heart_cut {
            self.cut.begin();
        }
    }

    pub fn cut_moved(&mut self, p: Point) {
        self.cut.track(p);
    }

    pub fn cut_ended(&mut self, now: Duration, out: &mut Vec<StoryEvent>) {
        if self.cut.end() {
            self.complete(Game::Cut, out);
            out.push(StoryEvent::HeartSevered);
            self.schedule(
                now + self.tuning.cut.image_swap_delay,
                Deferred::HeartImageSwapped,
            );
        }
    }

    // ---------------- page signals ----------------

    pub fn chapter_visible(&mut self, chapter: ChapterId, out: &mut Vec<StoryEvent>) {
        if !std::mem::replace(&mut self.revealed[chapter.index()], true) {
            out.push(StoryEvent::ChapterRevealed(chapter));
        }
        if self.audio_enabled {
            out.push(StoryEvent::SceneRequested(chapter.index()));
        }
    }

    /// The soundscape finished starting. `at_top` is true while the reader is
    /// still on the first screen, in which case the wind scene starts.
    pub fn audio_enabled(&mut self, at_top: bool, out: &mut Vec<StoryEvent>) {
        self.audio_enabled = true;
        if at_top {
            out.push(StoryEvent::SceneRequested(ChapterId::Wind.index()));
        }
    }

    /// Scroll position of chapter 4 changed. Only matters once the heart is cut.
    pub fn scrolled(&mut self, bounds: ChapterBounds, out: &mut Vec<StoryEvent>) {
        if !self.state.heart_cut {
            return;
        }
        if let Some(levels) = whiteout_levels(bounds) {
            if levels != self.fade {
                self.fade = levels;
                out.push(StoryEvent::FadeChanged(levels));
            }
        }
    }

    /// Fire deferred events that are due at `now`, earliest first.
    pub fn advance(&mut self, now: Duration, out: &mut Vec<StoryEvent>) {
        if self.pending.is_empty() {
            return;
        }
        self.pending.sort_by_key(|(at, _)| *at);
        let due = self.pending.partition_point(|(at, _)| *at <= now);
        let fired: Vec<Deferred> = self.pending.drain(..due).map(|(_, d)| d).collect();
        for d in fired {
            match d {
                Deferred::LockOpened => self.complete(Game::Lock, out),
                Deferred::PinFlashEnded(pin) => out.push(StoryEvent::PinFlashEnded(pin)),
                Deferred::HeartImageSwapped => out.push(StoryEvent::HeartImageSwapped),
            }
        }
    }

    /// Back to a fresh playthrough. Pending delayed events are dropped.
    pub fn reset_all(&mut self, out: &mut Vec<StoryEvent>) {
        log::debug!("[story] reset");
        out.push(StoryEvent::ScrolledToTop);
        self.state = GameState::default();
        self.unlocked = INITIAL_UNLOCKS;

        for (_, d) in self.pending.drain(..) {
            if let Deferred::PinFlashEnded(pin) = d {
                out.push(StoryEvent::PinFlashEnded(pin));
            }
        }

        let recovered = self.scratch.reset();
        out.push(StoryEvent::GameReset(Game::Scratch));
        if recovered {
            out.push(StoryEvent::ScratchCovered);
        }

        self.lock.reset();
        out.push(StoryEvent::GameReset(Game::Lock));
        out.push(StoryEvent::PinsLowered);

        self.cut.reset();
        out.push(StoryEvent::GameReset(Game::Cut));
        out.push(StoryEvent::HeartRestored);

        self.fade = FadeLevels::default();
        out.push(StoryEvent::FadeChanged(self.fade));
        out.push(StoryEvent::ChaptersRelocked);

        out.push(StoryEvent::AudioStopped);
        if self.audio_enabled {
            out.push(StoryEvent::SceneRearmed(ChapterId::Wind.index()));
        }
    }
}
