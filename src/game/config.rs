use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest grid side accepted; two terminal columns per cell already need
/// a 202-column terminal at this size.
pub const MAX_GRID_SIZE: usize = 100;

/// Configuration for the game, fixed once a game starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Score added for each food eaten
    pub score_per_food: u32,
    /// Displacement a swipe must exceed on either axis before it turns the snake
    pub swipe_threshold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_interval_ms: 150,
            score_per_food: 10,
            swipe_threshold: 20.0,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    pub fn total_cells(&self) -> usize {
        self.grid_size * self.grid_size
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Check the values the engine relies on
    pub fn validate(&self) -> Result<()> {
        // The starting snake sits on the second row, so a grid needs two of them.
        ensure!(
            self.grid_size >= 2,
            "grid_size must be at least 2, got {}",
            self.grid_size
        );
        ensure!(
            self.grid_size <= MAX_GRID_SIZE,
            "grid_size must be at most {MAX_GRID_SIZE}, got {}",
            self.grid_size
        );
        ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");
        ensure!(
            self.swipe_threshold > 0.0,
            "swipe_threshold must be positive, got {}",
            self.swipe_threshold
        );
        Ok(())
    }
}
