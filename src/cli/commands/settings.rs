//! Settings command implementation.

use super::AppContext;
use crate::cli::args::{OutputFormat, SettingsCommands, Theme};
use crate::error::GymError;
use crate::output::to_json;

/// Execute settings subcommands, saving any change.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
pub fn settings(ctx: &mut AppContext, cmd: Option<SettingsCommands>) -> Result<String, GymError> {
    match cmd.unwrap_or(SettingsCommands::Show) {
        SettingsCommands::Show => {}
        SettingsCommands::Theme { theme } => {
            ctx.config.appearance.dark_theme = match theme {
                Some(Theme::Dark) => true,
                Some(Theme::Light) => false,
                None => !ctx.config.appearance.dark_theme,
            };
            ctx.save_config()?;
        }
        SettingsCommands::WeekStart { day } => {
            ctx.config.stats.week_start = day;
            ctx.save_config()?;
        }
    }

    match ctx.format {
        OutputFormat::Json => to_json(&ctx.config),
        OutputFormat::Pretty => Ok(serde_yaml::to_string(&ctx.config)?.trim_end().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing::signed_in;
    use crate::config::{Config, WeekStart};

    #[test]
    fn test_theme_toggle_persists() {
        let (_dir, mut ctx, _user) = signed_in();
        assert!(ctx.config.appearance.dark_theme);

        settings(&mut ctx, Some(SettingsCommands::Theme { theme: None })).unwrap();
        assert!(!ctx.config.appearance.dark_theme);

        let saved = Config::load_from_path(&ctx.paths.config_file).unwrap();
        assert!(!saved.appearance.dark_theme);

        settings(&mut ctx, Some(SettingsCommands::Theme { theme: Some(Theme::Dark) })).unwrap();
        assert!(ctx.config.appearance.dark_theme);
    }

    #[test]
    fn test_week_start() {
        let (_dir, mut ctx, _user) = signed_in();
        let out = settings(
            &mut ctx,
            Some(SettingsCommands::WeekStart {
                day: WeekStart::Monday,
            }),
        )
        .unwrap();
        assert!(out.contains("week_start: monday"));
    }
}
