//! Command-line argument definitions for the Planboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global options select the configuration file and logging
//! verbosity; each subcommand drives one dashboard view.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use planboard::timeline::ReferenceMonth;

/// Command-line arguments for the Planboard tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a gesture script onto the canvas and export it as SVG
    Canvas(CanvasArgs),

    /// Lay out work items over one month and export the timeline as SVG
    Timeline(TimelineArgs),

    /// List leaves covering a date and the next upcoming leaves
    Leaves(LeavesArgs),

    /// Drive the mock user session
    Session(SessionArgs),
}

#[derive(clap::Args, Debug)]
pub struct CanvasArgs {
    /// Path to a gesture script (TOML)
    pub script: Option<String>,

    /// Start from an empty canvas instead of the sample diagram
    #[arg(long)]
    pub empty: bool,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "canvas.svg")]
    pub output: String,
}

#[derive(clap::Args, Debug)]
pub struct TimelineArgs {
    /// Reference month (YYYY-MM)
    #[arg(long, default_value = "2024-02")]
    pub month: ReferenceMonth,

    /// Plan file with the work items (TOML); defaults to the sample items
    #[arg(long)]
    pub plan: Option<String>,

    /// Draw a "today" marker at this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "timeline.svg")]
    pub output: String,
}

#[derive(clap::Args, Debug)]
pub struct LeavesArgs {
    /// Day to inspect (YYYY-MM-DD); defaults to the current local date
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Plan file with leave records (TOML); defaults to the sample leaves
    #[arg(long)]
    pub plan: Option<String>,

    /// Maximum number of upcoming leaves to list
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

#[derive(clap::Args, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub action: SessionAction,

    /// Directory holding the session records; defaults to the platform data
    /// directory
    #[arg(long)]
    pub store: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Sign in with any credentials
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Register and sign in
    Register {
        name: String,
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,
}
