use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use env_logger::Env;

use gymtrack::cli::args::{Cli, Commands};
use gymtrack::cli::commands::{self, AppContext};
use gymtrack::config::Paths;

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("GYMTRACK_LOG", "warn")).init();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // completions need no data directory
    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let paths = Paths::new()?;
    let mut ctx = AppContext::open(paths, cli.output).context("failed to open gymtrack data")?;
    ctx.config.general.color.apply();

    let result = dispatch(&mut ctx, cli.command);
    ctx.close().context("failed to close database")?;

    let output = result?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<String, gymtrack::GymError> {
    match command {
        Commands::Signup(args) => commands::signup(ctx, &args.username, &args.password),
        Commands::Login(args) => commands::login(ctx, &args.username, &args.password),
        Commands::Logout => commands::logout(ctx),
        Commands::Whoami => commands::whoami(ctx),
        Commands::Profile(args) => commands::profile(ctx, args.command),
        Commands::Password { new } => commands::password(ctx, &new),
        Commands::Workouts { search } => commands::workouts(ctx, search.as_deref()),
        Commands::Plan(args) => commands::plan(ctx, args.command),
        Commands::Start {
            title,
            duration,
            plain,
        } => commands::start(ctx, &title, duration.as_deref(), plain),
        Commands::History(args) => commands::history(ctx, args.command, args.watch),
        Commands::Stats { week } => commands::stats(ctx, week),
        Commands::Goal(args) => commands::goal(ctx, args.command),
        Commands::Settings(args) => commands::settings(ctx, args.command),
        Commands::Completions { shell } => commands::completions(shell),
    }
}
