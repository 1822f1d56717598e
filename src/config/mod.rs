//! Configuration management for gymtrack.
//!
//! This module handles loading and saving configuration from `~/.gymtrack/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{
    AppearanceConfig, ColorSetting, Config, GeneralConfig, StatsConfig, WeekStart, WorkoutConfig,
};
