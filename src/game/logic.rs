//! One-tick simulation step for a run.
//!
//! Called at a fixed 60Hz from the game loop. All tuning constants are
//! per-tick values, so simulation speed is tied to tick count, never to
//! wall-clock render timing.

use super::types::{Pillar, Run};
use crate::constants::{
    GRAVITY, IMP_HEIGHT, IMP_X, PILLAR_SPAWN_THRESHOLD, PILLAR_SPEED, PILLAR_WIDTH, SCREEN_HEIGHT,
};
use rand::Rng;

/// Advance the run by one tick.
///
/// `flap` is the queued player input for this tick: when set, the flap
/// impulse overrides velocity after gravity integration, so a flap tick
/// always ends with velocity exactly at the flap impulse.
///
/// Order per tick: imp physics, flap override, animation, boundary clamp,
/// pillar scroll, spawn, removal, collision, scoring. Ends the run on
/// boundary contact or pillar collision; a terminating tick never scores.
pub fn step<R: Rng>(run: &mut Run, flap: bool, rng: &mut R) {
    if run.over {
        return;
    }
    run.tick_count += 1;

    // Imp physics
    run.imp.velocity += GRAVITY;
    run.imp.y += run.imp.velocity;
    if flap {
        run.imp.flap();
    }
    run.imp.advance_animation();

    // Boundary clamp. Touching the ceiling or the floor ends the run on
    // the spot; the imp rests on the edge in the final frame.
    if run.imp.y < 0.0 {
        run.imp.y = 0.0;
        run.imp.velocity = 0.0;
        run.over = true;
        return;
    }
    if run.imp.y + IMP_HEIGHT > SCREEN_HEIGHT {
        run.imp.y = SCREEN_HEIGHT - IMP_HEIGHT;
        run.imp.velocity = 0.0;
        run.over = true;
        return;
    }

    // Scroll pillars left
    for pillar in &mut run.pillars {
        pillar.x -= PILLAR_SPEED;
    }

    // Spawn the next pillar once the most recent one clears the threshold.
    // The fresh pillar sits at the right edge, so at most one spawn can
    // trigger per threshold crossing.
    if run
        .pillars
        .last()
        .map_or(true, |p| p.x < PILLAR_SPAWN_THRESHOLD)
    {
        run.pillars.push(Pillar::spawn(rng));
    }

    // Drop pillars whose trailing edge has left the screen
    run.pillars.retain(|p| !p.is_off_screen());

    // Collision ends the run
    if run.pillars.iter().any(|p| p.hits(&run.imp)) {
        run.over = true;
    }

    // Scoring: a pillar counts exactly once, on the tick its trailing edge
    // passes the imp's leading column. Suppressed on a terminating tick.
    if !run.over {
        for pillar in &mut run.pillars {
            if !pillar.scored && pillar.x + PILLAR_WIDTH < IMP_X {
                pillar.scored = true;
                run.score += 1;
            }
        }
    }
}
