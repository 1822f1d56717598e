//! Configuration settings for gymtrack.
//!
//! Settings are loaded from `~/.gymtrack/config.yaml`.

use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::GymError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Workout session settings.
    pub workout: WorkoutConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
    /// Look and feel.
    pub appearance: AppearanceConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Workout session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutConfig {
    /// Milliseconds between timer ticks.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Calories text stored with each completed session.
    #[serde(default = "default_calories")]
    pub default_calories: String,
}

/// Statistics settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// First day of the week for weekly stats.
    #[serde(default = "default_week_start")]
    pub week_start: WeekStart,
}

/// Day a stats week begins on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
    /// Weeks run Saturday to Friday.
    Saturday,
}

impl WeekStart {
    /// The corresponding chrono weekday.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
            Self::Saturday => Weekday::Sat,
        }
    }
}

/// Look and feel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Use the dark palette in the workout screen.
    #[serde(default = "default_true")]
    pub dark_theme: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_tick_interval() -> u64 {
    1000
}

fn default_calories() -> String {
    "120 kcal".to_string()
}

const fn default_week_start() -> WeekStart {
    WeekStart::Sunday
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            default_calories: default_calories(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            dark_theme: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, GymError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            GymError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            GymError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), GymError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| GymError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            GymError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Tick interval as a `Duration`, never shorter than one millisecond.
    #[must_use]
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.workout.tick_interval_ms.max(1))
    }
}
