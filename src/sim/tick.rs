//! Fixed timestep simulation tick
//!
//! The whole game advances through [`tick`]: one call is exactly one physics
//! step, with pacing owned by the host. Inside `Playing` the order is fixed:
//! integrate and scroll, spawn, collide, score, compact.

use rand::Rng;

use super::collision;
use super::rect::Rect;
use super::state::{GamePhase, GameState, Obstacle, SCORE_PER_PAIR};

/// Input commands for a single tick (deterministic)
///
/// `flap` is contextual: it starts a round from the menu, flaps mid-round,
/// and restarts after a game over. Quit is a host concern and never reaches
/// the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub flap: bool,
}

/// Advance the game state by one fixed timestep.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Commands run before the pipeline, so a round entered on this tick also
    // simulates this tick.
    match state.phase {
        GamePhase::Menu => {
            if input.flap {
                state.phase = GamePhase::Playing;
                state.player.flap(state.config.jump_impulse);
                log::info!("round started (seed {})", state.seed);
            }
        }
        GamePhase::GameOver => {
            if input.flap {
                state.reset();
                state.phase = GamePhase::Playing;
                log::info!("round restarted");
            }
        }
        GamePhase::Playing => {
            if input.flap {
                state.player.flap(state.config.jump_impulse);
            }
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // 1. Integrate the player and scroll the field.
    state.player.integrate(state.config.gravity);
    let dx = -state.config.scroll_speed;
    for obstacle in &mut state.obstacles {
        obstacle.advance(dx);
    }

    // 2. Spawn a pair when the timer comes due.
    state.spawn_timer += 1;
    if state.spawn_timer >= state.config.spawn_interval {
        state.spawn_timer = 0;
        spawn_obstacle_pair(state);
    }

    // 3. Collisions: obstacles first, then the ground. A hit ends the round
    //    and halts scoring and compaction for this tick.
    if collision::hits_obstacle(&state.player.rect, &state.obstacles) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "obstacle hit at tick {}, final score {}",
            state.time_ticks,
            state.display_score()
        );
        return;
    }
    let ground_line = state.config.ground_line();
    if collision::hits_ground(&state.player.rect, ground_line) {
        state.player.land(ground_line);
        state.phase = GamePhase::GameOver;
        log::info!(
            "grounded at tick {}, final score {}",
            state.time_ticks,
            state.display_score()
        );
        return;
    }

    // 4. Credit pairs whose top half has fully cleared the player, then drop
    //    anything that has left the field. Scoring runs first so a pair
    //    retiring this tick is still evaluated.
    let player_left = state.player.rect.left();
    for obstacle in &mut state.obstacles {
        if obstacle.is_top && !obstacle.scored && obstacle.rect.right() < player_left {
            obstacle.scored = true;
            state.score += SCORE_PER_PAIR;
            log::debug!("pair cleared, score {}", state.score);
        }
    }
    state.obstacles.retain(|o| o.rect.right() >= 0.0);
}

/// Sample a top height and emit a pair at the right edge of the field.
///
/// Heights are whole units drawn uniformly from the band left over once the
/// gap, the ground, and the minimum height on both halves are accounted for;
/// `Config::validate` guarantees the band is non-empty.
fn spawn_obstacle_pair(state: &mut GameState) {
    let lo = state.config.min_obstacle_height as u32;
    let hi = state.config.max_top_height() as u32;
    let top_height = state.rng.random_range(lo..=hi) as f32;
    emit_obstacle_pair(state, top_height);
}

/// Push one top/bottom pair sharing a spawn column and a fixed gap. The top
/// half hangs from the top edge; the bottom half runs down to the field's
/// bottom edge.
fn emit_obstacle_pair(state: &mut GameState, top_height: f32) {
    let config = state.config;
    let bottom_top = top_height + config.gap;

    state.obstacles.push(Obstacle {
        rect: Rect::new(config.width, 0.0, config.obstacle_width, top_height),
        is_top: true,
        scored: false,
    });
    state.obstacles.push(Obstacle {
        rect: Rect::new(
            config.width,
            bottom_top,
            config.obstacle_width,
            config.height - bottom_top,
        ),
        is_top: false,
        scored: false,
    });
    log::debug!("spawned pair, gap spans [{top_height}, {bottom_top}]");
}
