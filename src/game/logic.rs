//! Per-tick simulation step.
//!
//! One [`advance`] call is one simulated tick: integrate the bird, check
//! the ground, spawn/scroll/recycle pipes, then test pipe collisions. The
//! session ends on the first collision detected in a tick; a ground hit
//! ends the tick outright, before any pipe work.

use crate::config::GameConfig;
use crate::game::types::{CrashCause, Pipe, Session};
use rand::Rng;

/// Flap: reset the bird's velocity to the upward impulse. Instantaneous,
/// not additive, so repeated flaps within one tick are idempotent.
pub fn flap(session: &mut Session, config: &GameConfig) {
    if session.is_over() {
        return;
    }
    session.bird.velocity = config.flap_impulse;
}

/// Advance the simulation by one tick. `now_ms` is a monotonic millisecond
/// clock supplied by the driver; only the spawn gate reads it.
pub fn advance<R: Rng>(session: &mut Session, config: &GameConfig, now_ms: u64, rng: &mut R) {
    if session.is_over() {
        return;
    }

    // Semi-implicit Euler; velocity has no terminal clamp.
    session.bird.velocity += config.gravity;
    session.bird.y += session.bird.velocity;

    if session.bird.rect(config).bottom() >= config.screen_height {
        session.crash = Some(CrashCause::Ground);
        return;
    }

    // Spawn gate is wall-clock based, independent of frame rate.
    if now_ms.saturating_sub(session.last_spawn_ms) > config.pipe_interval_ms {
        session.last_spawn_ms = now_ms;
        spawn_pipe(session, config, rng);
    }

    for pipe in &mut session.pipes {
        pipe.x -= config.pipe_speed;
    }

    // Recycle pipes that fully left the screen; each removal scores exactly
    // one point, in the same step.
    let before = session.pipes.len();
    session.pipes.retain(|pipe| !pipe.off_screen(config));
    session.score += (before - session.pipes.len()) as u32;

    check_pipe_collisions(session, config);
}

/// Push a new pipe at the right screen edge. The gap top is uniform within
/// bounds that keep both pipe halves at least `spawn_margin` tall.
fn spawn_pipe<R: Rng>(session: &mut Session, config: &GameConfig, rng: &mut R) {
    let min_gap_top = config.spawn_margin;
    let max_gap_top = config.screen_height - config.pipe_gap - config.spawn_margin;
    let gap_top = rng.gen_range(min_gap_top..=max_gap_top);

    session.pipes.push(Pipe {
        x: config.screen_width,
        gap_top,
    });
}

/// Test the bird against every active pipe's top and bottom rectangles.
/// The first overlap ends the session.
fn check_pipe_collisions(session: &mut Session, config: &GameConfig) {
    let bird = session.bird.rect(config);
    for pipe in &session.pipes {
        if bird.overlaps(&pipe.top_rect(config)) || bird.overlaps(&pipe.bottom_rect(config)) {
            session.crash = Some(CrashCause::Pipe);
            return;
        }
    }
}
