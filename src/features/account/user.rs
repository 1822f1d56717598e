//! User accounts and profile display.

use serde::{Deserialize, Serialize};

/// Kilograms to pounds.
const LB_PER_KG: f64 = 2.204_62;
/// Centimetres per foot.
const CM_PER_FOOT: f64 = 30.48;

/// Measurement system for profile display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    /// Kilograms and centimetres.
    #[default]
    Metric,
    /// Pounds and feet.
    Imperial,
}

impl Units {
    /// Stored name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::Imperial => "Imperial",
        }
    }

    /// Parse a stored name. Anything other than `Imperial` reads as metric.
    #[must_use]
    pub fn from_stored(s: &str) -> Self {
        if s == "Imperial" {
            Self::Imperial
        } else {
            Self::Metric
        }
    }

    /// The other system.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    /// Row id.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Login password, stored as entered.
    #[serde(skip_serializing)]
    pub password: String,
    /// Name shown in the profile; may be empty.
    pub display_name: String,
    /// Age in years, 0 if unset.
    pub age: i64,
    /// Weight in kilograms, 0 if unset.
    pub weight: f64,
    /// Height in centimetres, 0 if unset.
    pub height: f64,
    /// Preferred measurement system.
    pub units: Units,
    /// Path to a profile picture, if any.
    pub profile_picture_path: Option<String>,
}

impl User {
    /// Display name, or the username when none is set.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    /// Weight in the user's units, or `--` when unset or not positive.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn weight_display(&self) -> String {
        if self.weight <= 0.0 {
            return "--".to_string();
        }
        match self.units {
            Units::Metric => format!("{} kg", self.weight),
            Units::Imperial => format!("{} lb", (self.weight * LB_PER_KG) as i64),
        }
    }

    /// Height in the user's units, or `--` when unset.
    #[must_use]
    pub fn height_display(&self) -> String {
        if self.height <= 0.0 {
            return "--".to_string();
        }
        match self.units {
            Units::Metric => format!("{} cm", self.height),
            Units::Imperial => format!("{:.1} ft", self.height / CM_PER_FOOT),
        }
    }
}

/// Fields to change when editing a profile. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New display name.
    pub display_name: Option<String>,
    /// New age.
    pub age: Option<i64>,
    /// New weight in kilograms.
    pub weight: Option<f64>,
    /// New height in centimetres.
    pub height: Option<f64>,
    /// New picture path; `Some("")` clears it.
    pub profile_picture_path: Option<String>,
}
