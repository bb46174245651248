// config.rs - Startup configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "CONWAY_CONFIG";

/// Largest grid accepted, in cells.
pub const MAX_CELLS: usize = 4096 * 4096;

/// Cell side limits in pixels. The lower bound leaves room for the 1 px inset.
pub const MIN_CELL_SIZE: f32 = 3.0;
pub const MAX_CELL_SIZE: f32 = 64.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// World and display settings. Fields missing from a config file keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Side of one cell in pixels, grid line included.
    pub cell_size: f32,
    /// Delay between automatic ticks.
    pub interval_ms: u64,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            cell_size: 15.0,
            interval_ms: 500,
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
        }
    }
}

impl AppConfig {
    /// Reads the file named by `CONWAY_CONFIG` if set, defaults otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => {
                log::debug!("{CONFIG_ENV} not set, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading config from {}", path.display());
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        match self.width.checked_mul(self.height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "grid of {}x{} exceeds {MAX_CELLS} cells",
                    self.width, self.height
                )));
            }
        }
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&self.cell_size) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE} pixels, got {}",
                self.cell_size
            )));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid("interval_ms must be positive".into()));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
