//! Built-in workouts and search across them and the user's plans.

use serde::Serialize;

use super::plan::{Level, PlanColor, WorkoutPlan};

/// Which list a workout comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Built-in highlighted workouts.
    Featured,
    /// Built-in short workouts.
    Quick,
    /// The user's own plans.
    Custom,
}

/// A workout that can be started, built-in or user-authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutTemplate {
    /// Plan id for custom workouts.
    pub id: Option<i64>,
    /// Title.
    pub title: String,
    /// Duration text.
    pub duration: String,
    /// Difficulty, when known.
    pub level: Option<Level>,
    /// Card colour as `#RRGGBB`.
    pub color_hex: String,
    /// Origin list.
    pub section: Section,
}

impl WorkoutTemplate {
    fn builtin(title: &str, minutes: u32, level: Option<Level>, color: PlanColor, section: Section) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            duration: format!("{minutes} min"),
            level,
            color_hex: color.hex().to_string(),
            section,
        }
    }

    /// Case-insensitive match on title or duration.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.duration.to_lowercase().contains(&query)
    }
}

impl From<&WorkoutPlan> for WorkoutTemplate {
    fn from(plan: &WorkoutPlan) -> Self {
        Self {
            id: Some(plan.id),
            title: plan.title.clone(),
            duration: plan.duration.clone(),
            level: Some(plan.level),
            color_hex: plan.color_hex.clone(),
            section: Section::Custom,
        }
    }
}

/// Highlighted built-in workouts.
#[must_use]
pub fn featured() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate::builtin("Full Body Burn", 45, Some(Level::Intermediate), PlanColor::Indigo, Section::Featured),
        WorkoutTemplate::builtin("Core Training", 30, Some(Level::Beginner), PlanColor::Orange, Section::Featured),
    ]
}

/// Short built-in workouts.
#[must_use]
pub fn quick() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate::builtin("Morning Workout", 15, None, PlanColor::Teal, Section::Quick),
        WorkoutTemplate::builtin("Midday Workout", 20, None, PlanColor::Pink, Section::Quick),
        WorkoutTemplate::builtin("Evening Stretch", 25, None, PlanColor::Purple, Section::Quick),
    ]
}

/// Workouts grouped by section, custom plans first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// The user's plans, newest first.
    pub custom: Vec<WorkoutTemplate>,
    /// Built-in highlighted workouts.
    pub featured: Vec<WorkoutTemplate>,
    /// Built-in short workouts.
    pub quick: Vec<WorkoutTemplate>,
}

impl Catalog {
    /// Combine the user's plans with the built-ins.
    #[must_use]
    pub fn with_plans(plans: &[WorkoutPlan]) -> Self {
        Self {
            custom: plans.iter().map(WorkoutTemplate::from).collect(),
            featured: featured(),
            quick: quick(),
        }
    }

    /// Keep only workouts matching `query`. An empty query keeps everything.
    #[must_use]
    pub fn search(mut self, query: &str) -> Self {
        let query = query.trim();
        if !query.is_empty() {
            self.custom.retain(|w| w.matches(query));
            self.featured.retain(|w| w.matches(query));
            self.quick.retain(|w| w.matches(query));
        }
        self
    }

    /// Find a workout by exact title, case-insensitive, custom plans first.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&WorkoutTemplate> {
        self.iter().find(|w| w.title.eq_ignore_ascii_case(title.trim()))
    }

    /// Iterate over every section in display order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkoutTemplate> {
        self.custom.iter().chain(&self.featured).chain(&self.quick)
    }

    /// Total number of workouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.custom.len() + self.featured.len() + self.quick.len()
    }

    /// True if no workout is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
