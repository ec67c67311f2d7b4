//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one physics step per [`tick`] call)
//! - Seeded RNG only
//! - No I/O, rendering, or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{
    GamePhase, GameState, Obstacle, ObstacleView, Player, SCORE_PER_PAIR, Snapshot,
};
pub use tick::{TickInput, tick};
