//! Human-readable, colored output.

use colored::Colorize;

use crate::features::account::User;
use crate::features::goals::{TargetProgress, WeeklyProgress};
use crate::features::history::HistoryRecord;
use crate::features::plans::{Catalog, PlanColor, WorkoutPlan, WorkoutTemplate};
use crate::features::session::Completion;
use crate::features::stats::{StatsReport, WorkoutTotals};

/// Render a `[████░░░░]` bar for a fraction in `[0, 1]`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Format a list of history records
pub fn format_history_pretty(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "History (0 workouts)\n  No workouts yet".to_string();
    }

    let mut output = format!("History ({} workouts)\n", records.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for record in records {
        output.push_str(&format!(
            "{:>4}  {}  {}  {}  {}\n",
            record.id.to_string().dimmed(),
            record.title.bold(),
            record.duration.cyan(),
            record.calories.yellow(),
            record.date.dimmed(),
        ));
    }

    output
}

/// Format the user's workout plans
pub fn format_plans_pretty(plans: &[WorkoutPlan]) -> String {
    if plans.is_empty() {
        return "My Workouts (0 plans)\n  No custom workouts".to_string();
    }

    let mut output = format!("My Workouts ({} plans)\n", plans.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for plan in plans {
        output.push_str(&format!(
            "{:>4}  {} {}  {} · {}\n",
            plan.id.to_string().dimmed(),
            color_swatch(&plan.color_hex),
            plan.title.bold(),
            plan.duration.cyan(),
            plan.level,
        ));
    }

    output
}

/// A block in the plan's palette colour, or its hex code if off-palette.
fn color_swatch(hex: &str) -> String {
    match PlanColor::from_hex(hex) {
        Some(color) => {
            let (r, g, b) = color.rgb();
            "■".truecolor(r, g, b).to_string()
        }
        None => hex.dimmed().to_string(),
    }
}

fn push_section(output: &mut String, heading: &str, items: &[WorkoutTemplate]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("{}\n", heading.bold().underline()));
    for item in items {
        let mut line = format!("  {}  {}", item.title.bold(), item.duration.cyan());
        if let Some(level) = item.level {
            line.push_str(&format!(" · {level}"));
        }
        if let Some(id) = item.id {
            line.push_str(&format!("  {}", format!("(ID: {id})").dimmed()));
        }
        output.push_str(&line);
        output.push('\n');
    }
    output.push('\n');
}

/// Format the workout catalog
pub fn format_catalog_pretty(catalog: &Catalog, query: Option<&str>) -> String {
    if catalog.is_empty() {
        return match query {
            Some(q) => format!("No workouts match \"{q}\""),
            None => "No workouts".to_string(),
        };
    }

    let mut output = String::new();
    push_section(&mut output, "My Workouts", &catalog.custom);
    push_section(&mut output, "Featured", &catalog.featured);
    push_section(&mut output, "Quick Workouts", &catalog.quick);
    output.trim_end().to_string()
}

/// Format a user's profile
pub fn format_profile_pretty(user: &User, totals: &WorkoutTotals) -> String {
    let mut output = format!("{}\n", user.name().bold());
    output.push_str(&format!("  Username: {}\n", user.username));
    if user.age > 0 {
        output.push_str(&format!("  Age: {}\n", user.age));
    }
    output.push_str(&format!(
        "  {}  •  {}\n",
        user.weight_display(),
        user.height_display()
    ));
    output.push_str(&format!("  Units: {}\n", user.units));
    if let Some(path) = &user.profile_picture_path {
        output.push_str(&format!("  Picture: {}\n", path.dimmed()));
    }
    output.push_str(&format!(
        "  Workouts: {}   Minutes: {}   Calories: {}",
        totals.count.to_string().green(),
        totals.minutes.to_string().green(),
        totals.calories.to_string().green()
    ));
    output
}

fn format_totals_lines(output: &mut String, totals: &WorkoutTotals) {
    output.push_str(&format!("  Workouts:  {}\n", totals.count.to_string().green()));
    output.push_str(&format!("  Minutes:   {}\n", totals.minutes.to_string().green()));
    output.push_str(&format!("  Calories:  {} kcal\n", totals.calories.to_string().green()));
}

/// Format a stats report
pub fn format_stats_pretty(report: &StatsReport, week_only: bool) -> String {
    let mut output = String::new();
    if !week_only {
        output.push_str(&format!("{}\n", "All Time".bold()));
        format_totals_lines(&mut output, &report.total);
        output.push('\n');
    }
    output.push_str(&format!(
        "{} {}\n",
        "This Week".bold(),
        format!("(since {})", report.week_start).dimmed()
    ));
    format_totals_lines(&mut output, &report.week);
    output.trim_end().to_string()
}

fn format_target(label: &str, unit: &str, target: &TargetProgress) -> String {
    let bar = render_progress_bar(target.fraction, 20);
    let bar = if target.fraction >= 1.0 {
        bar.green().to_string()
    } else {
        bar.cyan().to_string()
    };
    format!(
        "  {label:<9} {bar} {} / {}{unit}",
        target.current, target.target
    )
}

/// Format weekly goal progress
pub fn format_goal_pretty(progress: &WeeklyProgress) -> String {
    let mut output = format!("{}\n", "Weekly Goal".bold());
    output.push_str(&format_target("Workouts", "", &progress.workouts));
    output.push('\n');
    output.push_str(&format_target("Calories", " kcal", &progress.calories));
    if !progress.goal_set {
        output.push_str(&format!(
            "\n  {}",
            "No goal set, showing suggested targets. Use 'gymtrack goal set'.".dimmed()
        ));
    }
    output
}

/// Format a finished workout
pub fn format_completion_pretty(completion: &Completion, recorded: bool) -> String {
    let mut output = format!("{} {}\n", "Workout complete!".green().bold(), completion.title.bold());
    output.push_str(&format!("  Duration: {}\n", completion.duration_text));
    output.push_str(&format!(
        "  Time spent: {}",
        crate::core::format_seconds(completion.elapsed_seconds)
    ));
    if completion.finished_early {
        output.push_str(&format!("  {}", "(finished early)".dimmed()));
    }
    if recorded {
        output.push_str(&format!("\n  {}", "Saved to history.".dimmed()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::goals::Goal;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_progress_bar() {
        assert_eq!(render_progress_bar(0.5, 10), "[█████░░░░░]");
        assert_eq!(render_progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(render_progress_bar(1.5, 4), "[████]");
    }

    #[test]
    fn test_empty_history() {
        assert!(format_history_pretty(&[]).contains("No workouts yet"));
    }

    #[test]
    fn test_plans_list() {
        plain();
        let plans = [WorkoutPlan {
            id: 3,
            user_id: 1,
            title: "Leg Day".to_string(),
            duration: "40 min".to_string(),
            level: crate::features::plans::Level::Advanced,
            color_hex: "#123456".to_string(),
        }];
        let out = format_plans_pretty(&plans);
        assert!(out.starts_with("My Workouts (1 plans)"));
        // off-palette colours fall back to the hex code
        assert!(out.contains("#123456 Leg Day  40 min · Advanced"));
        assert!(format_plans_pretty(&[]).contains("No custom workouts"));
    }

    #[test]
    fn test_catalog_no_match() {
        let catalog = Catalog::with_plans(&[]).search("zzz");
        assert_eq!(
            format_catalog_pretty(&catalog, Some("zzz")),
            "No workouts match \"zzz\""
        );
    }

    #[test]
    fn test_catalog_sections() {
        plain();
        let out = format_catalog_pretty(&Catalog::with_plans(&[]), None);
        assert!(out.contains("Featured"));
        assert!(out.contains("Quick Workouts"));
        assert!(out.contains("Full Body Burn  45 min · Intermediate"));
        assert!(!out.contains("My Workouts"));
    }

    #[test]
    fn test_goal_progress_output() {
        plain();
        let goal = Goal {
            id: 1,
            user_id: 1,
            weekly_workout_target: 4,
            weekly_calorie_target: 1000,
        };
        let week = WorkoutTotals {
            count: 2,
            minutes: 60,
            calories: 240,
        };
        let out = format_goal_pretty(&WeeklyProgress::new(Some(&goal), &week));
        assert!(out.contains("2 / 4"));
        assert!(out.contains("240 / 1000 kcal"));
        assert!(!out.contains("No goal set"));
    }
}
