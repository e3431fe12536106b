/// The four fixed chapters, in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChapterId {
    Wind,
    Fire,
    Heart,
    Void,
}

/// The gesture mini-game that gates the chapter after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Game {
    Scratch,
    Lock,
    Cut,
}

impl ChapterId {
    pub const ALL: [ChapterId; 4] = [
        ChapterId::Wind,
        ChapterId::Fire,
        ChapterId::Heart,
        ChapterId::Void,
    ];

    /// Zero-based position, which is also the soundscape scene index.
    pub fn index(self) -> usize {
        match self {
            ChapterId::Wind => 0,
            ChapterId::Fire => 1,
            ChapterId::Heart => 2,
            ChapterId::Void => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn element_id(self) -> &'static str {
        match self {
            ChapterId::Wind => "chapter-1",
            ChapterId::Fire => "chapter-2",
            ChapterId::Heart => "chapter-3",
            ChapterId::Void => "chapter-4",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.element_id() == id)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Game played inside this chapter; chapter 4 is scroll-only.
    pub fn game(self) -> Option<Game> {
        match self {
            ChapterId::Wind => Some(Game::Scratch),
            ChapterId::Fire => Some(Game::Lock),
            ChapterId::Heart => Some(Game::Cut),
            ChapterId::Void => None,
        }
    }
}

impl Game {
    pub fn chapter(self) -> ChapterId {
        match self {
            Game::Scratch => ChapterId::Wind,
            Game::Lock => ChapterId::Fire,
            Game::Cut => ChapterId::Heart,
        }
    }

    /// Chapter that completing this game unlocks.
    pub fn unlocks(self) -> ChapterId {
        match self {
            Game::Scratch => ChapterId::Fire,
            Game::Lock => ChapterId::Heart,
            Game::Cut => ChapterId::Void,
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            Game::Scratch => "snow-game-container",
            Game::Lock => "lock-game-container",
            Game::Cut => "cut-game-container",
        }
    }
}
