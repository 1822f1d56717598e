//! Stats and goal commands.

use serde_json::json;

use super::AppContext;
use crate::cli::args::{GoalCommands, OutputFormat};
use crate::core::{Clock, SystemClock};
use crate::error::GymError;
use crate::features::goals::{GoalStore, GoalTargets, WeeklyProgress};
use crate::features::history::HistoryStore;
use crate::features::stats::{weekly_stats, StatsReport};
use crate::output::{format_goal_pretty, format_stats_pretty, to_json};

/// Show all-time and weekly totals.
///
/// # Errors
///
/// Returns an error if nobody is signed in or history cannot be read.
pub fn stats(ctx: &AppContext, week_only: bool) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    let records = HistoryStore::new(&ctx.db).list_for_user(user.id)?;
    let report = StatsReport::build(&records, &SystemClock, ctx.config.stats.week_start.weekday());

    match ctx.format {
        OutputFormat::Json if week_only => to_json(&json!({
            "week": report.week,
            "week_start": report.week_start,
        })),
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => Ok(format_stats_pretty(&report, week_only)),
    }
}

/// Execute goal subcommands.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the targets are out of range.
pub fn goal(ctx: &AppContext, cmd: Option<GoalCommands>) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    let store = GoalStore::new(&ctx.db);

    if let Some(GoalCommands::Set { workouts, calories }) = cmd {
        store.set(user.id, GoalTargets::new(workouts, calories)?)?;
    }

    let goal = store.get(user.id)?;
    let records = HistoryStore::new(&ctx.db).list_for_user(user.id)?;
    let week = weekly_stats(
        &records,
        SystemClock.now(),
        ctx.config.stats.week_start.weekday(),
    );
    let progress = WeeklyProgress::new(goal.as_ref(), &week);

    match ctx.format {
        OutputFormat::Json => to_json(&progress),
        OutputFormat::Pretty => Ok(format_goal_pretty(&progress)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing::signed_in;
    use crate::core::format_record_date;
    use crate::features::history::NewHistoryRecord;

    fn add_record(ctx: &AppContext, user_id: i64, date: String, duration: &str) {
        HistoryStore::new(&ctx.db)
            .insert(
                user_id,
                &NewHistoryRecord {
                    title: "Run".to_string(),
                    duration: duration.to_string(),
                    date,
                    calories: "120 kcal".to_string(),
                },
            )
            .unwrap();
    }

    #[test]
    fn test_stats_json() {
        let (_dir, mut ctx, user) = signed_in();
        ctx.format = OutputFormat::Json;
        add_record(&ctx, user.id, format_record_date(SystemClock.now()), "30 min");
        add_record(&ctx, user.id, "garbled".to_string(), "bad");

        let value: serde_json::Value = serde_json::from_str(&stats(&ctx, false).unwrap()).unwrap();
        assert_eq!(value["total"]["count"], 2);
        assert_eq!(value["total"]["minutes"], 30);
        assert_eq!(value["total"]["calories"], 240);
        // the garbled date is left out of the week
        assert_eq!(value["week"]["count"], 1);
    }

    #[test]
    fn test_goal_set_and_show() {
        let (_dir, mut ctx, _user) = signed_in();
        ctx.format = OutputFormat::Json;

        let value: serde_json::Value = serde_json::from_str(&goal(&ctx, None).unwrap()).unwrap();
        assert_eq!(value["goal_set"], false);
        assert_eq!(value["workouts"]["target"], 3);
        assert_eq!(value["calories"]["target"], 500);

        let set = GoalCommands::Set {
            workouts: 5,
            calories: 1500,
        };
        let value: serde_json::Value =
            serde_json::from_str(&goal(&ctx, Some(set)).unwrap()).unwrap();
        assert_eq!(value["goal_set"], true);
        assert_eq!(value["workouts"]["target"], 5);
    }

    #[test]
    fn test_goal_set_out_of_range() {
        let (_dir, ctx, _user) = signed_in();
        let set = GoalCommands::Set {
            workouts: 20,
            calories: 1500,
        };
        assert!(matches!(goal(&ctx, Some(set)), Err(GymError::InvalidInput(_))));
    }
}
