//! Application Configuration
//!
//! Window, layout and logging preferences stored in TOML format. The theme is
//! not configurable; every launch starts in the light theme.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::error::ConfigError;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Native window settings
    pub window: WindowConfig,
    /// Dashboard layout settings
    pub layout: LayoutConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        self.layout.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Native window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial inner width in logical pixels
    pub width: f32,
    /// Initial inner height in logical pixels
    pub height: f32,
    /// Minimum inner width
    pub min_width: f32,
    /// Minimum inner height
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Woopen Gamers".to_string(),
            width: 1400.0,
            height: 900.0,
            min_width: 360.0,
            min_height: 480.0,
        }
    }
}

impl WindowConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [self.width, self.height, self.min_width, self.min_height];
        if sizes.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::InvalidWindowSize(
                "all window dimensions must be positive".to_string(),
            ));
        }
        if self.min_width > self.width || self.min_height > self.height {
            return Err(ConfigError::InvalidWindowSize(format!(
                "minimum {}x{} exceeds initial {}x{}",
                self.min_width, self.min_height, self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Dashboard layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Below this width the compact (mobile) layout is used
    pub compact_breakpoint: f32,
    /// Width of the navigation sidebar
    pub sidebar_width: f32,
    /// Width of the widget column
    pub widgets_width: f32,
    /// Maximum width of the main column content
    pub content_max_width: f32,
    /// Fade game cards in when the dashboard opens
    pub animate_cards: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint: 768.0,
            sidebar_width: 220.0,
            widgets_width: 288.0,
            content_max_width: 1280.0,
            animate_cards: true,
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("compact_breakpoint", self.compact_breakpoint),
            ("sidebar_width", self.sidebar_width),
            ("widgets_width", self.widgets_width),
            ("content_max_width", self.content_max_width),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidLayout(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level; `RUST_LOG` takes precedence when set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        parse_level(&self.level).map(|_| ())
    }
}

/// Parse a log level name, case-insensitively
pub fn parse_level(level: &str) -> Result<Level, ConfigError> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("com", "woopen", "WoopenGamers")
        .ok_or(ConfigError::NoConfigDir)?;

    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Default location of the configuration file
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
