//! Pipe Dash - a fixed-timestep side-scrolling arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Field geometry and tuning parameters
//!
//! The crate is headless. A host loop samples input once per frame, calls
//! [`sim::tick`] exactly once per rendered frame, and draws whatever
//! [`sim::GameState::snapshot`] hands back. Pacing, windowing, and process
//! exit all belong to the host.

pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};
pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};
