//! gymtrack - workout timer, history and stats for the terminal
//!
//! This crate provides the workout countdown, history-based statistics, and
//! the SQLite-backed account, plan, history and goal stores behind the
//! `gymtrack` command-line tool.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::GymError;
pub use storage::Database;
