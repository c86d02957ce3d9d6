use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Length the snake grows to after a reset
    pub initial_length: usize,
    /// Time between two discrete steps of the snake
    pub move_interval_ms: f64,
    /// Time between two food spawns
    pub food_spawn_interval_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 20,
            initial_length: 4,
            move_interval_ms: 300.0,
            food_spawn_interval_ms: 1500.0,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Check every parameter is usable by a session
    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.initial_length == 0 {
            return Err(GameError::InvalidLength);
        }
        for (name, value) in [
            ("move_interval_ms", self.move_interval_ms),
            ("food_spawn_interval_ms", self.food_spawn_interval_ms),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidInterval { name, value });
            }
        }
        Ok(())
    }
}
