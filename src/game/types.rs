//! Entity state for a single run: the imp, the pillar queue, and the
//! run aggregate itself.
//!
//! Everything here is plain data in the 400x600 logical pixel space.
//! The per-tick rules that mutate it live in [`super::logic`].

use crate::constants::{
    FLAP_VELOCITY, FRAME_ADVANCE_TICKS, FRAME_COUNTER_WRAP, GAP_TOP_MAX, GAP_TOP_MIN,
    IMP_FRAME_COUNT, IMP_HEIGHT, IMP_WIDTH, IMP_X, PILLAR_GAP, PILLAR_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use rand::Rng;

/// The player character. Horizontal position is fixed at `IMP_X`; only
/// the vertical axis is simulated.
#[derive(Debug, Clone)]
pub struct Imp {
    /// Top edge of the 40x30 bounding box in logical pixels. 0 = ceiling.
    pub y: f64,
    /// Vertical velocity in pixels/tick (positive = downward).
    pub velocity: f64,
    /// Current wing animation frame, cycling through the 4-frame set.
    pub frame_index: usize,
    /// Tick counter driving frame advancement; wraps at `FRAME_COUNTER_WRAP`.
    pub frame_counter: u32,
}

impl Imp {
    /// Imp at the run start position: mid-screen, at rest, wings neutral.
    pub fn new() -> Self {
        Self {
            y: SCREEN_HEIGHT / 2.0,
            velocity: 0.0,
            frame_index: 0,
            frame_counter: 0,
        }
    }

    /// Replace velocity with the flap impulse. Not additive; a flap from a
    /// steep dive and a flap at the apex both leave the same velocity.
    pub fn flap(&mut self) {
        self.velocity = FLAP_VELOCITY;
    }

    /// Advance the wing animation by one tick. Runs every tick regardless
    /// of vertical motion; the frame index steps every `FRAME_ADVANCE_TICKS`.
    pub fn advance_animation(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter % FRAME_ADVANCE_TICKS == 0 {
            self.frame_index = (self.frame_index + 1) % IMP_FRAME_COUNT;
        }
        self.frame_counter %= FRAME_COUNTER_WRAP;
    }
}

impl Default for Imp {
    fn default() -> Self {
        Self::new()
    }
}

/// A pillar pair: solid column above the gap, solid column below,
/// scrolling left at constant speed.
#[derive(Debug, Clone)]
pub struct Pillar {
    /// X of the left edge in logical pixels (float for smooth scrolling).
    pub x: f64,
    /// Y of the gap's top edge; the gap spans `gap_top..gap_top + PILLAR_GAP`.
    pub gap_top: f64,
    /// Whether this pillar has already been counted toward the score.
    pub scored: bool,
}

impl Pillar {
    /// Spawn a pillar at the right screen edge with a random gap offset.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: SCREEN_WIDTH,
            gap_top: rng.gen_range(GAP_TOP_MIN..=GAP_TOP_MAX),
            scored: false,
        }
    }

    /// Whether the trailing edge has fully left the playfield.
    pub fn is_off_screen(&self) -> bool {
        self.x + PILLAR_WIDTH < 0.0
    }

    /// Axis-aligned box test against the imp. A hit requires horizontal
    /// overlap with the imp's 40px span and the imp's box poking outside
    /// the gap on either side.
    pub fn hits(&self, imp: &Imp) -> bool {
        let overlaps_x = IMP_X + IMP_WIDTH > self.x && IMP_X < self.x + PILLAR_WIDTH;
        let outside_gap = imp.y < self.gap_top || imp.y + IMP_HEIGHT > self.gap_top + PILLAR_GAP;
        overlaps_x && outside_gap
    }
}

/// One play session from spawn to termination.
#[derive(Debug, Clone)]
pub struct Run {
    pub imp: Imp,
    /// Active pillars, left to right. Spawn order is spatial order since
    /// every pillar moves at the same speed.
    pub pillars: Vec<Pillar>,
    /// Pillars passed so far. Monotonic within a run.
    pub score: u32,
    /// Set when the run has ended (collision or boundary).
    pub over: bool,
    /// Total simulation ticks elapsed.
    pub tick_count: u64,
}

impl Run {
    /// Start a fresh run: imp at mid-screen, one pillar already inbound.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            imp: Imp::new(),
            pillars: vec![Pillar::spawn(rng)],
            score: 0,
            over: false,
            tick_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_defaults() {
        let mut rng = rand::thread_rng();
        let run = Run::new(&mut rng);
        assert!((run.imp.y - SCREEN_HEIGHT / 2.0).abs() < f64::EPSILON);
        assert_eq!(run.imp.velocity, 0.0);
        assert_eq!(run.imp.frame_index, 0);
        assert_eq!(run.pillars.len(), 1);
        assert_eq!(run.score, 0);
        assert!(!run.over);
    }

    #[test]
    fn test_spawn_gap_within_bounds() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let pillar = Pillar::spawn(&mut rng);
            assert!((pillar.x - SCREEN_WIDTH).abs() < f64::EPSILON);
            assert!(pillar.gap_top >= GAP_TOP_MIN);
            assert!(pillar.gap_top <= GAP_TOP_MAX);
            assert!(!pillar.scored);
        }
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut imp = Imp::new();
        imp.velocity = 57.3;
        imp.flap();
        assert_eq!(imp.velocity, FLAP_VELOCITY);

        imp.velocity = -20.0;
        imp.flap();
        assert_eq!(imp.velocity, FLAP_VELOCITY);
    }

    #[test]
    fn test_animation_frame_cadence() {
        let mut imp = Imp::new();
        for _ in 0..FRAME_ADVANCE_TICKS {
            imp.advance_animation();
        }
        assert_eq!(imp.frame_index, 1);

        // A full cycle brings the frame back around.
        for _ in 0..(FRAME_ADVANCE_TICKS * IMP_FRAME_COUNT as u32 - FRAME_ADVANCE_TICKS) {
            imp.advance_animation();
        }
        assert_eq!(imp.frame_index, 0);
    }

    #[test]
    fn test_animation_counter_wraps() {
        let mut imp = Imp::new();
        for _ in 0..FRAME_COUNTER_WRAP {
            imp.advance_animation();
        }
        assert_eq!(imp.frame_counter, 0);
    }

    #[test]
    fn test_off_screen_requires_full_exit() {
        let mut pillar = Pillar {
            x: -PILLAR_WIDTH,
            gap_top: 200.0,
            scored: false,
        };
        // Trailing edge exactly at x=0 is still on screen.
        assert!(!pillar.is_off_screen());
        pillar.x -= 0.1;
        assert!(pillar.is_off_screen());
    }

    #[test]
    fn test_no_hit_inside_gap() {
        let imp = Imp {
            y: 250.0,
            ..Imp::new()
        };
        let pillar = Pillar {
            x: IMP_X, // directly on the imp
            gap_top: 200.0,
            scored: false,
        };
        // Gap spans 200..350; imp box 250..280 sits fully inside.
        assert!(!pillar.hits(&imp));
    }

    #[test]
    fn test_hit_above_and_below_gap() {
        let pillar = Pillar {
            x: IMP_X,
            gap_top: 200.0,
            scored: false,
        };

        let high = Imp {
            y: 180.0, // top edge above the gap top
            ..Imp::new()
        };
        assert!(pillar.hits(&high));

        let low = Imp {
            y: 330.0, // bottom edge at 360, below the gap bottom at 350
            ..Imp::new()
        };
        assert!(pillar.hits(&low));
    }

    #[test]
    fn test_no_hit_without_horizontal_overlap() {
        let imp = Imp {
            y: 0.0, // well outside any gap
            ..Imp::new()
        };
        let behind = Pillar {
            x: IMP_X - PILLAR_WIDTH, // trailing edge exactly at the imp's left
            gap_top: 300.0,
            scored: false,
        };
        let ahead = Pillar {
            x: IMP_X + IMP_WIDTH, // leading edge exactly at the imp's right
            gap_top: 300.0,
            scored: false,
        };
        assert!(!behind.hits(&imp));
        assert!(!ahead.hits(&imp));
    }
}
