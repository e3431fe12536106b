// Page hooks and styling used by the web front-end

// Element ids
pub const SNOW_CANVAS_ID: &str = "snow-canvas";
pub const SCRATCH_CANVAS_ID: &str = "scratch-canvas";
pub const AUDIO_BUTTON_ID: &str = "audio-btn";
pub const RESET_BUTTON_ID: &str = "reset-btn";
pub const WHITEOUT_ID: &str = "whiteout-overlay";

// Selectors
pub const CHAPTER_SELECTOR: &str = ".chapter";
pub const PIN_SELECTOR: &str = ".pin";
pub const HEART_TARGET_SELECTOR: &str = ".heart-target";
pub const HEART_IMAGE_SELECTOR: &str = ".heart-img-game";
pub const CUT_LINE_SELECTOR: &str = ".cut-line-svg";
pub const END_FIN_SELECTOR: &str = ".end-fin";
pub const INTERACTIVE_TEXT_SELECTOR: &str = ".interactive-text";

// Classes toggled by story events
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_LOCKED_CHAPTER: &str = "locked-chapter";
pub const CLASS_RESOLVED: &str = "resolved";
pub const CLASS_PIN_UP: &str = "unlocked";
pub const CLASS_PIN_ERROR: &str = "active";
pub const CLASS_AUDIO_ON: &str = "active";

pub const AUDIO_ENABLED_LABEL: &str = "AUDIO ENABLED";

// Heart break effect
pub const HEART_BROKEN_TRANSFORM: &str = "skewX(20deg) scale(0.9)";
pub const HEART_SWAP_SRC: &str = "/chapter3.png";

// Canvas paint
pub const SCRATCH_COVER_FILL: &str = "#eee";
pub const SNOWFLAKE_FILL: &str = "rgba(255, 255, 255, 0.8)";

// Chapter visibility observer
pub const OBSERVER_ROOT_MARGIN: &str = "-20% 0px -20% 0px";
pub const OBSERVER_THRESHOLD: f64 = 0.2;

// CSS may need a frame before the scratch container has a size
pub const INITIAL_LAYOUT_DELAY_MS: i32 = 100;
