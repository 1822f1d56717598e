//! Workout plans and their display attributes.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::GymError;

/// Difficulty of a workout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Level {
    /// Entry level.
    #[default]
    Beginner,
    /// Some experience.
    Intermediate,
    /// Hard.
    Advanced,
}

impl Level {
    /// Stored name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(GymError::Parse(format!("Unknown level: {other}"))),
        }
    }
}

/// Card colour for a workout, from a fixed palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PlanColor {
    /// `#3F51B5`
    #[default]
    Indigo,
    /// `#009688`
    Teal,
    /// `#FF9800`
    Orange,
    /// `#E91E63`
    Pink,
    /// `#9C27B0`
    Purple,
    /// `#4CAF50`
    Green,
}

impl PlanColor {
    /// The whole palette, in picker order.
    pub const ALL: [Self; 6] = [
        Self::Indigo,
        Self::Teal,
        Self::Orange,
        Self::Pink,
        Self::Purple,
        Self::Green,
    ];

    /// `#RRGGBB` form.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Indigo => "#3F51B5",
            Self::Teal => "#009688",
            Self::Orange => "#FF9800",
            Self::Pink => "#E91E63",
            Self::Purple => "#9C27B0",
            Self::Green => "#4CAF50",
        }
    }

    /// RGB components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Indigo => (0x3F, 0x51, 0xB5),
            Self::Teal => (0x00, 0x96, 0x88),
            Self::Orange => (0xFF, 0x98, 0x00),
            Self::Pink => (0xE9, 0x1E, 0x63),
            Self::Purple => (0x9C, 0x27, 0xB0),
            Self::Green => (0x4C, 0xAF, 0x50),
        }
    }

    /// Palette entry for a stored hex string, case-insensitive.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(hex.trim()))
    }
}

/// A user-authored workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Row id.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Title.
    pub title: String,
    /// Duration text, always `"<digits> min"` for plans made here.
    pub duration: String,
    /// Difficulty.
    pub level: Level,
    /// Card colour as `#RRGGBB`.
    pub color_hex: String,
}

/// A validated plan ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlan {
    title: String,
    duration: String,
    level: Level,
    color: PlanColor,
}

impl NewPlan {
    /// Validate form input.
    ///
    /// `minutes` must be digits only; it is stored as `"<minutes> min"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title or a blank or non-numeric
    /// duration.
    pub fn new(title: &str, minutes: &str, level: Level, color: PlanColor) -> Result<Self, GymError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(GymError::InvalidInput("Title must not be empty".to_string()));
        }

        let minutes = minutes.trim();
        if minutes.is_empty() || !minutes.chars().all(|c| c.is_ascii_digit()) {
            return Err(GymError::InvalidInput(format!(
                "Duration must be a whole number of minutes, got {minutes:?}"
            )));
        }

        Ok(Self {
            title: title.to_string(),
            duration: format!("{minutes} min"),
            level,
            color,
        })
    }

    /// Title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Stored duration text.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Difficulty.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Card colour.
    #[must_use]
    pub const fn color(&self) -> PlanColor {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plan_formats_duration() {
        let plan = NewPlan::new(" Leg Day ", "40", Level::Advanced, PlanColor::Green).unwrap();
        assert_eq!(plan.title(), "Leg Day");
        assert_eq!(plan.duration(), "40 min");
        assert_eq!(plan.level(), Level::Advanced);
        assert_eq!(plan.color().hex(), "#4CAF50");
    }

    #[test]
    fn test_new_plan_rejects_bad_input() {
        for (title, minutes) in [("", "30"), ("  ", "30"), ("Run", ""), ("Run", "30 min"), ("Run", "-5")] {
            assert!(
                matches!(
                    NewPlan::new(title, minutes, Level::Beginner, PlanColor::Indigo),
                    Err(GymError::InvalidInput(_))
                ),
                "accepted {title:?} / {minutes:?}"
            );
        }
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("intermediate".parse::<Level>().unwrap(), Level::Intermediate);
        assert_eq!(" Advanced ".parse::<Level>().unwrap(), Level::Advanced);
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn test_palette_round_trips_through_hex() {
        for color in PlanColor::ALL {
            assert_eq!(PlanColor::from_hex(color.hex()), Some(color));
        }
        assert_eq!(PlanColor::from_hex("#3f51b5"), Some(PlanColor::Indigo));
        assert_eq!(PlanColor::from_hex("#000000"), None);
    }
}
