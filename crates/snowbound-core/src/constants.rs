// Shared audio and gameplay tuning constants used by both web and native frontends.

// Mixer
pub const CHAPTER_COUNT: usize = 4;
pub const MASTER_GAIN: f32 = 0.5; // fixed at construction
pub const SCENE_TARGET_GAIN: f32 = 0.5; // level of the active scene once settled
pub const CROSSFADE_TAU_SEC: f32 = 2.0; // exponential time constant for scene switches
pub const STOP_TAU_SEC: f32 = 1.0; // faster fade used by stop_all
pub const PROCESSOR_BLOCK_SIZE: usize = 4096; // samples per audio callback

// Pink noise output trim
pub const PINK_OUTPUT_SCALE: f32 = 0.11;

// Chapter 1: wind
pub const WIND_CUTOFF_HZ: f32 = 400.0;
pub const WIND_Q: f32 = 1.0;
pub const WIND_LFO_HZ: f32 = 0.1;
pub const WIND_LFO_DEPTH_HZ: f32 = 300.0;

// Chapter 2: fire
pub const FIRE_DRONE_HZ: f32 = 60.0;
pub const FIRE_DRONE_LEVEL: f32 = 0.1;
pub const CRACKLE_PROBABILITY: f32 = 0.001; // per sample
pub const CRACKLE_MAX_AMPLITUDE: f32 = 0.5;

// Chapter 3: heart
pub const HEART_TONE_HZ: f32 = 50.0;
pub const HEARTBEAT_PERIOD_SEC: f32 = 1.2;
pub const HEARTBEAT_LUB_PEAK: f32 = 1.0;
pub const HEARTBEAT_DUB_PEAK: f32 = 0.6;
pub const HEARTBEAT_DUB_OFFSET_SEC: f32 = 0.3; // second pulse after the first
pub const HEARTBEAT_HOLD_SEC: f32 = 0.1; // release starts this long after each pulse
pub const HEARTBEAT_TAU_SEC: f32 = 0.05;
pub const WHINE_HZ: f32 = 800.0;
pub const WHINE_LEVEL: f32 = 0.02;
pub const TREMOLO_HZ: f32 = 5.0;
pub const TREMOLO_DEPTH: f32 = 0.01;

// Chapter 4: void
pub const VOID_CENTER_HZ: f32 = 600.0;
pub const VOID_Q: f32 = 10.0;
pub const VOID_LFO_HZ: f32 = 0.05;
pub const VOID_LFO_DEPTH_HZ: f32 = 200.0;

// Scratch game
pub const SCRATCH_BRUSH_RADIUS: f32 = 60.0;
pub const SCRATCH_SAMPLE_TARGET: usize = 500; // roughly how many pixels verification inspects
pub const SCRATCH_ALPHA_THRESHOLD: u8 = 128; // below this a pixel counts as uncovered
pub const SCRATCH_CLEAR_FRACTION: f32 = 0.15;
pub const SCRATCH_SPECK_COUNT: usize = 5000;
pub const SCRATCH_SPECK_SIZE: f32 = 2.0;
pub const SCRATCH_SPECK_MAX_ALPHA: f32 = 0.5;

// Lock game
pub const PIN_COUNT: usize = 3;
pub const LOCK_OPEN_DELAY_MS: u64 = 500;
pub const PIN_ERROR_FLASH_MS: u64 = 200;

// Cut game (200x200 target area, path follows the arc M 20 100 Q 100 20 180 100)
pub const CUT_MIN_POINTS: usize = 5;
pub const CUT_START_MAX_X: f32 = 50.0;
pub const CUT_END_MIN_X: f32 = 150.0;
pub const CUT_PEAK_MIN: [f32; 2] = [80.0, 20.0]; // exclusive lower corner of the arc peak window
pub const CUT_PEAK_MAX: [f32; 2] = [120.0, 90.0]; // exclusive upper corner
pub const CUT_MIN_PEAK_HITS: usize = 3;
pub const HEART_IMAGE_SWAP_DELAY_MS: u64 = 1000;

// Background snowfall
pub const SNOWFLAKE_COUNT: usize = 100;

// Chapter 4 whiteout curve
pub const WHITEOUT_FADE_START: f32 = 0.3;
pub const WHITEOUT_FADE_RATE: f32 = 1.5;
pub const FIN_GATE: f32 = 0.9; // whiteout level after which FIN starts to appear
pub const FIN_FADE_START: f32 = 0.8;
pub const FIN_FADE_RATE: f32 = 3.0;
pub const RESET_REVEAL_WHITEOUT: f32 = 0.8;
