use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::WeekStart;
use crate::features::plans::{Level, PlanColor};

#[derive(Parser)]
#[command(name = "gymtrack")]
#[command(about = "Workout timer, history and stats in your terminal")]
#[command(long_about = "gymtrack - Workout timer, history and stats in your terminal

Pick a workout, run the countdown, and keep track of what you did.
Completed sessions are saved to your history and count toward your
weekly goal.

QUICK START:
  gymtrack signup ana --password secret     Create an account
  gymtrack workouts                         Browse workouts
  gymtrack start \"Core Training\"            Run a workout timer
  gymtrack stats                            All-time and weekly totals

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  gymtrack <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to `general.default_output` from
    /// the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and sign in
    ///
    /// # Examples
    ///
    ///   gymtrack signup ana --password secret
    ///   GYMTRACK_PASSWORD=secret gymtrack signup ana
    Signup(CredentialsArgs),

    /// Sign in to an existing account
    Login(CredentialsArgs),

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// View or edit your profile
    Profile(ProfileArgs),

    /// Change your password
    Password {
        /// New password
        #[arg(long, env = "GYMTRACK_NEW_PASSWORD", hide_env_values = true)]
        new: String,
    },

    /// Browse workouts: your plans, featured, and quick workouts
    ///
    /// # Examples
    ///
    ///   gymtrack workouts
    ///   gymtrack workouts --search yoga
    ///   gymtrack workouts --search "30 min"
    Workouts {
        /// Only show workouts whose title or duration contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Manage your custom workout plans
    Plan(PlanArgs),

    /// Start a workout timer
    ///
    /// Looks the title up among your plans and the built-in workouts.
    /// Pass --duration to run any title for a custom length.
    ///
    /// KEYS (interactive mode):
    ///   space / p    Pause or resume
    ///   f            Finish now and save
    ///   q / Esc      Quit without saving
    ///
    /// # Examples
    ///
    ///   gymtrack start "Core Training"
    ///   gymtrack start "Plank" --duration "5 min"
    ///   gymtrack start "Quick" --duration "1 min" --plain
    Start {
        /// Workout title
        title: String,

        /// Duration text, e.g. "20 min"
        #[arg(short, long)]
        duration: Option<String>,

        /// Print a line per tick instead of the full-screen timer
        #[arg(long)]
        plain: bool,
    },

    /// Show or manage workout history
    ///
    /// # Examples
    ///
    ///   gymtrack history
    ///   gymtrack history --watch
    ///   gymtrack history delete 12
    History(HistoryArgs),

    /// Show workout totals
    ///
    /// # Examples
    ///
    ///   gymtrack stats
    ///   gymtrack stats --week
    Stats {
        /// Only show this week
        #[arg(short, long)]
        week: bool,
    },

    /// Show or set your weekly goal
    Goal(GoalArgs),

    /// View or change settings
    Settings(SettingsArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   gymtrack completions bash > ~/.local/share/bash-completion/completions/gymtrack
    ///   gymtrack completions zsh > ~/.zsh/completions/_gymtrack
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Username and password.
#[derive(Args)]
pub struct CredentialsArgs {
    /// Username
    pub username: String,

    /// Password
    #[arg(long, env = "GYMTRACK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: Option<ProfileCommands>,
}

/// Profile subcommands.
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show your profile (default)
    Show,

    /// Edit profile fields
    ///
    /// # Examples
    ///
    ///   gymtrack profile edit --name "Ana" --age 31 --weight 62.5 --height 168
    Edit(ProfileEditArgs),

    /// Switch between metric and imperial units
    Units,
}

#[derive(Args)]
pub struct ProfileEditArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<i64>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimetres
    #[arg(long)]
    pub height: Option<f64>,

    /// Path to a profile picture (empty to clear)
    #[arg(long)]
    pub picture: Option<String>,
}

#[derive(Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommands,
}

/// Plan subcommands.
#[derive(Subcommand)]
pub enum PlanCommands {
    /// List your plans
    List,

    /// Add a plan
    ///
    /// # Examples
    ///
    ///   gymtrack plan add "Leg Day" --minutes 40 --level advanced --color green
    Add {
        /// Plan title
        title: String,

        /// Length in whole minutes
        #[arg(short, long)]
        minutes: String,

        /// Difficulty
        #[arg(short, long, value_enum, default_value = "beginner")]
        level: Level,

        /// Card colour
        #[arg(short, long, value_enum, default_value = "indigo")]
        color: PlanColor,
    },

    /// Delete a plan
    Delete {
        /// Plan ID
        id: i64,
    },
}

#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: Option<HistoryCommands>,

    /// Keep running and print the history again whenever it changes
    #[arg(short, long)]
    pub watch: bool,
}

/// History subcommands.
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List completed workouts (default)
    List,

    /// Delete a history record
    Delete {
        /// Record ID
        id: i64,
    },
}

#[derive(Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    pub command: Option<GoalCommands>,
}

/// Goal subcommands.
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Show progress toward your weekly goal (default)
    Show,

    /// Set your weekly goal
    ///
    /// # Examples
    ///
    ///   gymtrack goal set --workouts 4 --calories 1200
    Set {
        /// Workouts per week (1-14)
        #[arg(short, long)]
        workouts: i64,

        /// Calories per week (100-5000)
        #[arg(short, long)]
        calories: i64,
    },
}

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings (default)
    Show,

    /// Set the workout screen theme, or toggle it when no value is given
    Theme {
        /// Theme to use
        #[arg(value_enum)]
        theme: Option<Theme>,
    },

    /// Set the first day of the week for weekly stats
    WeekStart {
        /// First day of the week
        #[arg(value_enum)]
        day: WeekStart,
    },
}

/// Workout screen palette.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    /// Light text on a dark background.
    Dark,
    /// Dark text on a light background.
    Light,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_start() {
        let cli = Cli::parse_from(["gymtrack", "start", "Core Training", "--plain"]);
        match cli.command {
            Commands::Start {
                title,
                duration,
                plain,
            } => {
                assert_eq!(title, "Core Training");
                assert!(duration.is_none());
                assert!(plain);
            }
            _ => panic!("expected start"),
        }
    }

    #[test]
    fn test_parse_plan_add_defaults() {
        let cli = Cli::parse_from(["gymtrack", "plan", "add", "Legs", "--minutes", "40"]);
        match cli.command {
            Commands::Plan(PlanArgs {
                command:
                    PlanCommands::Add {
                        level, color, ..
                    },
            }) => {
                assert_eq!(level, Level::Beginner);
                assert_eq!(color, PlanColor::Indigo);
            }
            _ => panic!("expected plan add"),
        }
    }

    #[test]
    fn test_output_is_global() {
        let cli = Cli::parse_from(["gymtrack", "stats", "-o", "json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
