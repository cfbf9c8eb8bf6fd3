//! Start-up configuration

use std::{fs, io, path::{Path, PathBuf}};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::auto_step::{MAX_INTERVAL_MS, MIN_INTERVAL_MS};

pub const DEFAULT_ROWS: usize = 24;
pub const DEFAULT_COLS: usize = 40;
pub const DEFAULT_MS_PER_AUTO_STEP: u64 = 100;
pub const DEFAULT_DELAY_BEFORE_AUTO_MS: u64 = 1000;
pub const DEFAULT_RANDOM_DENSITY: f64 = 0.3;

/// Board settings, read from a TOML file. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    /// Auto-step interval
    pub ms_per_auto_step: u64,
    /// How long the step button must be held before auto-stepping starts
    pub delay_before_auto_ms: u64,
    /// Fraction of cells brought to life by "random"
    pub random_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            ms_per_auto_step: DEFAULT_MS_PER_AUTO_STEP,
            delay_before_auto_ms: DEFAULT_DELAY_BEFORE_AUTO_MS,
            random_density: DEFAULT_RANDOM_DENSITY,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<Config>(text)?.validated())
    }

    /// Reset out-of-range values to their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if self.rows < 1 || self.cols < 1 {
            warn!("grid size {}x{} is invalid, using {}x{}", self.rows, self.cols, defaults.rows, defaults.cols);
            self.rows = defaults.rows;
            self.cols = defaults.cols;
        }
        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.ms_per_auto_step) {
            warn!(
                "auto-step interval {}ms is outside {MIN_INTERVAL_MS}..={MAX_INTERVAL_MS}, using {}ms",
                self.ms_per_auto_step, defaults.ms_per_auto_step
            );
            self.ms_per_auto_step = defaults.ms_per_auto_step;
        }
        if self.delay_before_auto_ms < 1 {
            warn!("hold delay must be at least 1ms, using {}ms", defaults.delay_before_auto_ms);
            self.delay_before_auto_ms = defaults.delay_before_auto_ms;
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            warn!("random density {} is outside 0..=1, using {}", self.random_density, defaults.random_density);
            self.random_density = defaults.random_density;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!((config.rows, config.cols), (24, 40));
        assert_eq!(config.ms_per_auto_step, 100);
        assert_eq!(config.delay_before_auto_ms, 1000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml_str("rows = 10\nms_per_auto_step = 250\n").unwrap();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, DEFAULT_COLS);
        assert_eq!(config.ms_per_auto_step, 250);
    }

    #[test]
    fn test_invalid_values_are_reset() {
        let config = Config::from_toml_str("rows = 0\ncols = 7\ndelay_before_auto_ms = 0\nrandom_density = 2.5\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_interval_outside_stepper_range_is_reset() {
        for text in ["ms_per_auto_step = 5000", "ms_per_auto_step = 5", "ms_per_auto_step = 0"] {
            let config = Config::from_toml_str(text).unwrap();
            assert_eq!(config.ms_per_auto_step, DEFAULT_MS_PER_AUTO_STEP, "{text}");
        }

        let edges = Config::from_toml_str("ms_per_auto_step = 10\ndelay_before_auto_ms = 3\n").unwrap();
        assert_eq!(edges.ms_per_auto_step, MIN_INTERVAL_MS);
        assert_eq!(edges.delay_before_auto_ms, 3);
        let top = Config::from_toml_str("ms_per_auto_step = 2000").unwrap();
        assert_eq!(top.ms_per_auto_step, MAX_INTERVAL_MS);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::from_toml_str("rows = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
