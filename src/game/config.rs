use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the play field, in board units
    pub window_width: f32,
    /// Height of the play field, in board units
    pub window_height: f32,
    /// Side length of a snake segment; also the distance moved per tick
    pub segment_size: f32,
    /// Side length of a treat
    pub treat_size: f32,

    /// Tick rate of the start and lost screens
    pub menu_tick_hz: u32,
    /// Tick rate while playing
    pub play_tick_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 820.0,
            window_height: 820.0,
            segment_size: 20.0,
            treat_size: 20.0,
            menu_tick_hz: 15,
            play_tick_hz: 30,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom window size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            window_width: width,
            window_height: height,
            ..Default::default()
        }
    }

    /// Create a small window for testing
    pub fn small() -> Self {
        Self::new(200.0, 200.0)
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Reject configurations the game cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            [
                self.window_width,
                self.window_height,
                self.segment_size,
                self.treat_size,
            ]
            .iter()
            .all(|size| size.is_finite()),
            "window, segment and treat sizes must be finite"
        );
        ensure!(
            self.segment_size > 0.0 && self.treat_size > 0.0,
            "segment and treat sizes must be positive"
        );
        ensure!(
            self.window_width > self.segment_size && self.window_height > self.segment_size,
            "window ({}x{}) must be larger than a segment ({})",
            self.window_width,
            self.window_height,
            self.segment_size
        );
        ensure!(
            self.menu_tick_hz > 0 && self.play_tick_hz > 0,
            "tick rates must be positive"
        );
        Ok(())
    }

    /// Center of the play field
    pub fn center(&self) -> (f32, f32) {
        (self.window_width / 2.0, self.window_height / 2.0)
    }

    pub fn menu_tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.menu_tick_hz))
    }

    pub fn play_tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.play_tick_hz))
    }
}
