//! Game state and core simulation types
//!
//! Everything a round needs lives on [`GameState`]; there is no ambient or
//! static state. The aggregate is serializable and fully deterministic given
//! its config, seed, and input history.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::{Config, ConfigError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for a confirm press
    Menu,
    /// Active gameplay
    Playing,
    /// Round ended; confirm starts a fresh round
    GameOver,
}

/// Score credited when a pair is cleared. Half a point per pair; the
/// displayed value is truncated to a whole number.
pub const SCORE_PER_PAIR: f32 = 0.5;

/// The player's avatar: fixed x, gravity-driven y.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in world units per tick (positive is down)
    pub velocity: f32,
}

impl Player {
    /// Spawn at the fixed column, vertically centred, at rest.
    pub fn new(config: &Config) -> Self {
        Self {
            rect: Rect::new(
                config.player_x,
                config.height / 2.0,
                config.player_size.x,
                config.player_size.y,
            ),
            velocity: 0.0,
        }
    }

    /// A flap replaces the current velocity outright; impulses never stack.
    pub fn flap(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    /// One integration step: accelerate, move, clamp at the top boundary.
    /// The ceiling kills velocity rather than reflecting it.
    pub fn integrate(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.rect.pos.y += self.velocity;
        if self.rect.top() < 0.0 {
            self.rect.set_top(0.0);
            self.velocity = 0.0;
        }
    }

    /// Settle on the ground line: bottom edge clamped, velocity zeroed.
    pub fn land(&mut self, ground_line: f32) {
        self.rect.set_bottom(ground_line);
        self.velocity = 0.0;
    }
}

/// One half of an obstacle pair scrolling across the field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Upper half of the pair (hangs from the top edge)
    pub is_top: bool,
    /// Set once the pair has been credited to the score
    pub scored: bool,
}

impl Obstacle {
    /// Scroll horizontally by `dx` (negative is leftward).
    pub fn advance(&mut self, dx: f32) {
        self.rect.pos.x += dx;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Field geometry, fixed for the session
    pub config: Config,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG; keeps rolling across resets so rounds differ
    pub(crate) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Player avatar
    pub player: Player,
    /// Active obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Static ground strip at the bottom boundary
    pub ground: Rect,
    /// Running score; see [`SCORE_PER_PAIR`]
    pub score: f32,
    /// Ticks since the last obstacle pair spawned
    pub spawn_timer: u32,
    /// Ticks simulated this round
    pub time_ticks: u64,
}

impl GameState {
    /// Build a session in the menu phase.
    ///
    /// The config is validated here; this is the only failure point in the
    /// crate.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            player: Player::new(&config),
            obstacles: Vec::new(),
            ground: Rect::new(0.0, config.ground_line(), config.width, config.ground_height),
            score: 0.0,
            spawn_timer: 0,
            time_ticks: 0,
        })
    }

    /// Rebuild the round state in place: fresh player, empty field, zero
    /// score and timers. The phase and the session RNG are left to the
    /// caller.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.score = 0.0;
        self.spawn_timer = 0;
        self.time_ticks = 0;
    }

    /// Whole-number score as shown on screen.
    #[inline]
    pub fn display_score(&self) -> u32 {
        self.score as u32
    }

    /// Read-only view for the render collaborator. Built fresh each tick;
    /// holds no references into the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: self.player.rect,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    rect: o.rect,
                    is_top: o.is_top,
                })
                .collect(),
            ground: self.ground,
            score: self.display_score(),
            time_ticks: self.time_ticks,
        }
    }
}

/// One obstacle as seen by the render collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleView {
    pub rect: Rect,
    pub is_top: bool,
}

/// Per-tick read-only view handed to the render collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Rect,
    pub obstacles: Vec<ObstacleView>,
    pub ground: Rect,
    /// Whole-number score as shown on screen
    pub score: u32,
    pub time_ticks: u64,
}
