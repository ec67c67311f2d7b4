//! Field geometry and tuning parameters
//!
//! A [`Config`] is fixed for the lifetime of a session. It is validated once
//! when the session is constructed; after that the simulation is total and
//! never fails.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Geometry and tuning for one play field.
///
/// Defaults reproduce the classic 400x600 cabinet values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Config {
    /// Play-field width in world units
    pub width: f32,
    /// Play-field height
    pub height: f32,
    /// Fixed horizontal position of the player's left edge
    pub player_x: f32,
    /// Player bounding box
    pub player_size: Vec2,
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity set by a flap (negative is up)
    pub jump_impulse: f32,
    /// Horizontal extent of every obstacle
    pub obstacle_width: f32,
    /// Vertical clearance between a paired top and bottom obstacle
    pub gap: f32,
    /// Leftward field scroll per tick, applied to every obstacle
    pub scroll_speed: f32,
    /// Ticks between obstacle pair spawns
    pub spawn_interval: u32,
    /// Height of the ground strip at the bottom boundary
    pub ground_height: f32,
    /// Minimum height of either half of an obstacle pair
    pub min_obstacle_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            player_x: 50.0,
            player_size: Vec2::new(30.0, 30.0),
            gravity: 0.5,
            jump_impulse: -9.0,
            obstacle_width: 60.0,
            gap: 200.0,
            scroll_speed: 3.0,
            spawn_interval: 100,
            ground_height: 50.0,
            min_obstacle_height: 50.0,
        }
    }
}

impl Config {
    /// Y coordinate of the top of the ground strip.
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Largest top-obstacle height the sampling band allows.
    ///
    /// The band is `[min_obstacle_height, max_top_height()]`; [`validate`]
    /// guarantees it is non-empty.
    ///
    /// [`validate`]: Config::validate
    #[inline]
    pub fn max_top_height(&self) -> f32 {
        self.height - self.gap - self.min_obstacle_height - self.ground_height
    }

    /// Check the field geometry before a session is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("gravity", self.gravity),
            ("obstacle_width", self.obstacle_width),
            ("gap", self.gap),
            ("scroll_speed", self.scroll_speed),
            ("ground_height", self.ground_height),
            ("min_obstacle_height", self.min_obstacle_height),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.player_size.x <= 0.0 || self.player_size.y <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "player_size",
                value: self.player_size.min_element(),
            });
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }

        let required = self.gap + 2.0 * self.min_obstacle_height + self.ground_height;
        if required >= self.height {
            return Err(ConfigError::FieldTooShort {
                required,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Rejected field geometry. Raised at session construction, never per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The gap plus margins leave no band to sample a top-obstacle height
    /// from. `required` is `gap + 2 * min_obstacle_height + ground_height`,
    /// which must stay strictly below the field height.
    FieldTooShort { required: f32, height: f32 },

    /// A dimension or rate that must be strictly positive was not.
    NonPositive { name: &'static str, value: f32 },

    /// A spawn interval of zero ticks has no meaning.
    ZeroSpawnInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FieldTooShort { required, height } => write!(
                f,
                "field too short for obstacle sampling: needs more than {required} world units, have {height}"
            ),
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be strictly positive, got {value}")
            }
            ConfigError::ZeroSpawnInterval => write!(f, "spawn_interval must be at least 1 tick"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_sampling_band() {
        // 600 field, 50 ground, 200 gap, 50 minimum on both halves
        let config = Config::default();
        assert_eq!(config.min_obstacle_height, 50.0);
        assert_eq!(config.max_top_height(), 300.0);
        assert_eq!(config.ground_line(), 550.0);
    }

    #[test]
    fn test_oversized_gap_rejected() {
        let config = Config {
            gap: 450.0,
            ..Config::default()
        };
        // 450 + 100 + 50 == 600: empty band
        assert_eq!(
            config.validate(),
            Err(ConfigError::FieldTooShort {
                required: 600.0,
                height: 600.0
            })
        );
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        let config = Config {
            width: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "width", .. })
        ));

        let config = Config {
            scroll_speed: -3.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "scroll_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let config = Config {
            spawn_interval: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpawnInterval));
    }
}
