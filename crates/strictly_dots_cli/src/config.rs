//! TOML configuration for grid size and pointer layout.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_dots::{DEFAULT_GRID_SIZE, GridLayout};
use tracing::{debug, info, instrument};

/// Complete configuration file.
///
/// ```toml
/// [grid]
/// size = 6
///
/// [layout]
/// dot_radius_px = 10.0
/// grid_size_px = 520.0
/// click_threshold_ratio = 0.3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
pub struct DotsConfig {
    /// Lattice settings.
    #[serde(default)]
    grid: GridSection,

    /// Rendered geometry used for pointer hit-testing.
    #[serde(default)]
    layout: LayoutSection,
}

/// `[grid]` table.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct GridSection {
    /// Dots along each side.
    #[serde(default = "default_size")]
    size: u32,
}

/// `[layout]` table.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct LayoutSection {
    /// Dot radius in pixels.
    #[serde(default = "default_dot_radius_px")]
    dot_radius_px: f64,

    /// Side of the rendered grid in pixels.
    #[serde(default = "default_grid_size_px")]
    grid_size_px: f64,

    /// Hit radius as a fraction of dot separation.
    #[serde(default = "default_click_threshold_ratio")]
    click_threshold_ratio: f64,
}

fn default_size() -> u32 {
    DEFAULT_GRID_SIZE
}

fn default_dot_radius_px() -> f64 {
    8.0
}

fn default_grid_size_px() -> f64 {
    416.0
}

fn default_click_threshold_ratio() -> f64 {
    0.4
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            size: default_size(),
        }
    }
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            dot_radius_px: default_dot_radius_px(),
            grid_size_px: default_grid_size_px(),
            click_threshold_ratio: default_click_threshold_ratio(),
        }
    }
}

impl DotsConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(size = config.grid.size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the grid size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.grid.size = size;
        self
    }

    /// Builds the validated pointer layout.
    #[instrument(skip(self))]
    pub fn grid_layout(&self) -> Result<GridLayout, ConfigError> {
        GridLayout::new(
            self.layout.dot_radius_px,
            self.layout.grid_size_px,
            self.layout.click_threshold_ratio,
            self.grid.size,
        )
        .map_err(|e| ConfigError::new(e.message))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
