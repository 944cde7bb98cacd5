// Tuning constants shared by every widget. `Config::default()` is built from these.

// Goblin cursor follower
pub const GOBLIN_SIZE: f32 = 30.0; // body diameter in CSS px
pub const GOBLIN_SPEED: f32 = 0.08; // fraction of remaining distance covered per frame
pub const GOBLIN_COLOR: &str = "#2ecc71";
pub const GOBLIN_EYE_COLOR: &str = "#fff";
pub const GOBLIN_PUPIL_COLOR: &str = "#000";
pub const PUPIL_REACH: f32 = 3.0; // how far pupils slide toward the heading

// Cave mode
pub const CAVE_MAX_DARKNESS: f32 = 0.7; // never fully dark
pub const CAVE_START_DEPTH: f32 = 0.2; // start darkening after 20% scroll

// Dodging links
pub const DODGE_MAX_DODGES: u32 = 3; // links give up after this many dodges
pub const DODGE_DISTANCE: f32 = 60.0; // how far they run
pub const DODGE_TRIGGER_DISTANCE: f32 = 80.0; // how close the cursor needs to be
pub const DODGE_JITTER_SPAN: f32 = 0.5; // total random spread of the escape angle (radians)
pub const DODGE_BOUND_X: f32 = 100.0;
pub const DODGE_BOUND_Y: f32 = 50.0;
pub const CAUGHT_FLASH_MS: i32 = 300;

// Visitor counter
pub const COUNTER_BASE: u64 = 42_069; // nice
pub const COUNTER_DAILY_VARIANCE: u32 = 100;
pub const COUNTER_AVERAGE_PER_DAY: f64 = 7.3;
pub const COUNTER_DURATION_MS: u64 = 2_000;

// Chaos meter
pub const METER_DEFAULT_PERCENT: i32 = 50;

pub const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
