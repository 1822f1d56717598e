//! Account commands: sign-up, login, profile and password.

use colored::Colorize;
use serde_json::json;

use super::AppContext;
use crate::cli::args::{OutputFormat, ProfileCommands, ProfileEditArgs};
use crate::error::GymError;
use crate::features::account::{current, ProfileUpdate, User};
use crate::features::history::HistoryStore;
use crate::features::stats::total_stats;
use crate::output::{format_profile_pretty, to_json};

/// Create an account and sign in as it.
///
/// # Errors
///
/// Returns an error if the username is taken or the input is blank.
pub fn signup(ctx: &AppContext, username: &str, password: &str) -> Result<String, GymError> {
    let user = ctx.accounts().sign_up(username, password)?;
    current::remember(&ctx.paths.session_file, user.id)?;
    signed_in_message(ctx.format, &user, "Account created. Signed in as")
}

/// Sign in.
///
/// # Errors
///
/// Returns `Auth` if the credentials do not match.
pub fn login(ctx: &AppContext, username: &str, password: &str) -> Result<String, GymError> {
    let user = ctx.accounts().login(username, password)?;
    current::remember(&ctx.paths.session_file, user.id)?;
    signed_in_message(ctx.format, &user, "Signed in as")
}

fn signed_in_message(format: OutputFormat, user: &User, prefix: &str) -> Result<String, GymError> {
    match format {
        OutputFormat::Json => to_json(user),
        OutputFormat::Pretty => Ok(format!("{prefix} {}", user.username.bold())),
    }
}

/// Sign out.
///
/// # Errors
///
/// Returns an error if the session file cannot be removed.
pub fn logout(ctx: &AppContext) -> Result<String, GymError> {
    current::forget(&ctx.paths.session_file)?;
    log::info!("signed out");
    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "signed_in": false })),
        OutputFormat::Pretty => Ok("Signed out".to_string()),
    }
}

/// Show who is signed in.
///
/// # Errors
///
/// Returns `NotSignedIn` if nobody is.
pub fn whoami(ctx: &AppContext) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    match ctx.format {
        OutputFormat::Json => to_json(&user),
        OutputFormat::Pretty => Ok(user.username),
    }
}

/// Execute profile subcommands.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the update is rejected.
pub fn profile(ctx: &AppContext, cmd: Option<ProfileCommands>) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    let user = match cmd.unwrap_or(ProfileCommands::Show) {
        ProfileCommands::Show => user,
        ProfileCommands::Edit(args) => ctx.accounts().update_profile(user.id, &profile_update(args))?,
        ProfileCommands::Units => {
            ctx.accounts().toggle_units(user.id)?;
            ctx.accounts().require(user.id)?
        }
    };

    let history = HistoryStore::new(&ctx.db).list_for_user(user.id)?;
    let totals = total_stats(&history);

    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "user": user, "totals": totals })),
        OutputFormat::Pretty => Ok(format_profile_pretty(&user, &totals)),
    }
}

fn profile_update(args: ProfileEditArgs) -> ProfileUpdate {
    ProfileUpdate {
        display_name: args.name,
        age: args.age,
        weight: args.weight,
        height: args.height,
        profile_picture_path: args.picture,
    }
}

/// Change the signed-in user's password.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the password is empty.
pub fn password(ctx: &AppContext, new_password: &str) -> Result<String, GymError> {
    let user = ctx.current_user()?;
    ctx.accounts().update_password(user.id, new_password)?;
    match ctx.format {
        OutputFormat::Json => to_json(&json!({ "updated": true })),
        OutputFormat::Pretty => Ok("Password updated".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::context::testing::signed_in;

    #[test]
    fn test_logout_then_whoami_fails() {
        let (_dir, ctx, _user) = signed_in();
        assert_eq!(whoami(&ctx).unwrap(), "ana");

        logout(&ctx).unwrap();
        assert!(matches!(whoami(&ctx), Err(GymError::NotSignedIn)));
    }

    #[test]
    fn test_login_switches_user() {
        let (_dir, ctx, _user) = signed_in();
        ctx.accounts().sign_up("bo", "pw2").unwrap();

        login(&ctx, "bo", "pw2").unwrap();
        assert_eq!(whoami(&ctx).unwrap(), "bo");
    }

    #[test]
    fn test_profile_units_toggle() {
        colored::control::set_override(false);
        let (_dir, ctx, user) = signed_in();
        let edit = ProfileEditArgs {
            name: None,
            age: None,
            weight: Some(70.0),
            height: None,
            picture: None,
        };
        profile(&ctx, Some(ProfileCommands::Edit(edit))).unwrap();

        let out = profile(&ctx, Some(ProfileCommands::Units)).unwrap();
        assert!(out.contains("154 lb"));
        assert!(out.contains("Units: Imperial"));
        assert_eq!(ctx.accounts().require(user.id).unwrap().units.as_str(), "Imperial");
    }

    #[test]
    fn test_password_change() {
        let (_dir, ctx, _user) = signed_in();
        password(&ctx, "new-pw").unwrap();
        assert!(ctx.accounts().login("ana", "new-pw").is_ok());
    }
}
