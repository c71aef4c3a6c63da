use std::time::Duration;

// Logical playfield dimensions. All simulation math runs in this pixel
// space; the terminal viewport is scaled from it at render time.
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Imp physics constants (per-tick values at 60 ticks/second)
pub const GRAVITY: f64 = 0.6;
pub const FLAP_VELOCITY: f64 = -9.0;
pub const IMP_X: f64 = 100.0;
pub const IMP_WIDTH: f64 = 40.0;
pub const IMP_HEIGHT: f64 = 30.0;

// Imp animation constants
pub const IMP_FRAME_COUNT: usize = 4;
pub const FRAME_ADVANCE_TICKS: u32 = 5;
pub const FRAME_COUNTER_WRAP: u32 = 30;

// Pillar constants
pub const PILLAR_WIDTH: f64 = 60.0;
pub const PILLAR_GAP: f64 = 150.0;
pub const PILLAR_SPEED: f64 = 5.0;
// A new pillar spawns once the most recent one has scrolled past this x.
pub const PILLAR_SPAWN_THRESHOLD: f64 = SCREEN_WIDTH - 300.0;
// Gap top offset range; keeps both pillar halves at least 100px tall.
pub const GAP_TOP_MIN: f64 = 100.0;
pub const GAP_TOP_MAX: f64 = SCREEN_HEIGHT - PILLAR_GAP - 100.0;

// Game timing constants
pub const TICKS_PER_SECOND: u64 = 60;
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND);
// Cap on accumulated simulation debt after a stall, so a suspended
// terminal does not fast-forward the run on resume.
pub const MAX_TICK_BACKLOG: Duration = Duration::from_millis(250);

// Score store constants
pub const SCORE_VERSION_MAGIC: u64 = 0x494D5053434F5245; // "IMPSCORE" in hex
