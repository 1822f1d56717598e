//! Workout commands: browse, manage plans, and run the timer.

use serde_json::json;

use super::AppContext;
use crate::cli::args::{OutputFormat, PlanCommands};
use crate::core::SystemClock;
use crate::error::GymError;
use crate::features::history::HistoryStore;
use crate::features::plans::{Catalog, NewPlan, PlanStore};
use crate::features::session::{Completion, Step, WorkoutRun};
use crate::output::{format_catalog_pretty, format_completion_pretty, format_plans, to_json};

/// List workouts, optionally filtered.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the plans cannot be read.
pub fn workouts(ctx: &AppContext, search: Option<&str>) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    let plans = PlanStore::new(&ctx.db).list_for_user(user.id)?;
    let catalog = Catalog::with_plans(&plans).search(search.unwrap_or_default());

    match ctx.format {
        OutputFormat::Json => to_json(&catalog),
        OutputFormat::Pretty => Ok(format_catalog_pretty(&catalog, search)),
    }
}

/// Execute plan subcommands.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the input is invalid, or the
/// plan does not exist.
pub fn plan(ctx: &AppContext, cmd: PlanCommands) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    let store = PlanStore::new(&ctx.db);

    match cmd {
        PlanCommands::List => format_plans(&store.list_for_user(user.id)?, ctx.format),
        PlanCommands::Add {
            title,
            minutes,
            level,
            color,
        } => {
            let plan = store.create(user.id, &NewPlan::new(&title, &minutes, level, color)?)?;
            match ctx.format {
                OutputFormat::Json => to_json(&plan),
                OutputFormat::Pretty => Ok(format!(
                    "Created workout: {} (ID: {})",
                    plan.title, plan.id
                )),
            }
        }
        PlanCommands::Delete { id } => {
            store.delete(user.id, id)?;
            match ctx.format {
                OutputFormat::Json => to_json(&json!({ "deleted": id })),
                OutputFormat::Pretty => Ok(format!("Deleted workout: {id}")),
            }
        }
    }
}

/// Run a workout and save it to history when it completes.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the workout is unknown and no
/// duration was given, or the terminal or database fails.
pub fn start(
    ctx: &AppContext,
    title: &str,
    duration: Option<&str>,
    plain: bool,
) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    let plans = PlanStore::new(&ctx.db).list_for_user(user.id)?;
    let catalog = Catalog::with_plans(&plans);
    let found = catalog.find(title);

    let (title, duration) = match (found, duration) {
        (Some(workout), None) => (workout.title.clone(), workout.duration.clone()),
        (Some(workout), Some(d)) => (workout.title.clone(), d.to_string()),
        (None, Some(d)) => (title.trim().to_string(), d.to_string()),
        (None, None) => {
            return Err(GymError::NotFound(format!(
                "Workout \"{title}\". Use --duration to run a custom workout."
            )))
        }
    };

    let run = WorkoutRun::start(&title, &duration, ctx.config.tick_interval())?;
    let completion = if plain {
        run_plain(run, ctx.format == OutputFormat::Pretty)
    } else {
        crate::tui::run_workout(run, ctx.config.appearance.dark_theme)?
    };

    let Some(completion) = completion else {
        return match ctx.format {
            OutputFormat::Json => to_json(&json!({ "completed": false })),
            OutputFormat::Pretty => Ok("Workout abandoned, nothing saved".to_string()),
        };
    };

    let record = HistoryStore::new(&ctx.db).record_completion(
        user.id,
        &completion,
        &ctx.config.workout.default_calories,
        &SystemClock,
    )?;

    match ctx.format {
        OutputFormat::Json => to_json(&json!({
            "completed": true,
            "completion": completion,
            "record": record,
        })),
        OutputFormat::Pretty => Ok(format_completion_pretty(&completion, true)),
    }
}

/// Count down without the full-screen UI, printing each second.
fn run_plain(mut run: WorkoutRun, show_progress: bool) -> Option<Completion> {
    if show_progress {
        println!("{}  {}", run.title(), run.timer().format_remaining());
    }
    loop {
        match run.step() {
            Step::Ticked => {
                if show_progress {
                    println!("{}", run.timer().format_remaining());
                }
            }
            Step::Completed(completion) => return Some(completion),
            // a late tick while still running is not an abandon
            Step::Idle if run.timer().is_running() => {}
            Step::Idle => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing::signed_in;
    use crate::features::plans::{Level, PlanColor};

    #[test]
    fn test_plan_add_list_delete() {
        let (_dir, ctx, _user) = signed_in();

        let out = plan(
            &ctx,
            PlanCommands::Add {
                title: "Leg Day".to_string(),
                minutes: "40".to_string(),
                level: Level::Advanced,
                color: PlanColor::Green,
            },
        )
        .unwrap();
        assert!(out.starts_with("Created workout: Leg Day"));

        let listed = plan(&ctx, PlanCommands::List).unwrap();
        assert!(listed.contains("Leg Day"));

        let plans = PlanStore::new(&ctx.db)
            .list_for_user(ctx.current_user().unwrap().id)
            .unwrap();
        plan(&ctx, PlanCommands::Delete { id: plans[0].id }).unwrap();
        assert!(plan(&ctx, PlanCommands::List).unwrap().contains("No custom workouts"));
    }

    #[test]
    fn test_plan_add_rejects_non_digit_minutes() {
        let (_dir, ctx, _user) = signed_in();
        let result = plan(
            &ctx,
            PlanCommands::Add {
                title: "Leg Day".to_string(),
                minutes: "forty".to_string(),
                level: Level::Beginner,
                color: PlanColor::Indigo,
            },
        );
        assert!(matches!(result, Err(GymError::InvalidInput(_))));
    }

    #[test]
    fn test_start_unknown_without_duration() {
        let (_dir, ctx, _user) = signed_in();
        assert!(matches!(
            start(&ctx, "Mystery", None, true),
            Err(GymError::NotFound(_))
        ));
    }

    #[test]
    fn test_start_plain_records_history() {
        let (_dir, mut ctx, user) = signed_in();
        ctx.config.workout.tick_interval_ms = 5;

        let out = start(&ctx, "Plank", Some("0 min"), true).unwrap();
        assert!(out.contains("Workout complete!"));

        let history = HistoryStore::new(&ctx.db).list_for_user(user.id).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].title, "Plank");
        assert_eq!(history[0].duration, "0 min");
        assert_eq!(history[0].calories, "120 kcal");
    }

    #[test]
    fn test_workouts_search() {
        let (_dir, mut ctx, _user) = signed_in();
        ctx.format = OutputFormat::Json;
        let out = workouts(&ctx, Some("core")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["featured"][0]["title"], "Core Training");
        assert!(value["quick"].as_array().unwrap().is_empty());
    }
}
