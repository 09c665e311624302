//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// u-fixture - greedy sports fixture scheduler
#[derive(Parser)]
#[command(
    name = "u-fixture",
    about = "Schedule league matchups onto venue fields",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to TOML config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Log every placement")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Schedule one or more case directories
    Run {
        /// Case directories holding teams.json, leagues.json and venues.json
        /// (or team.csv, league.csv and venue.csv)
        #[arg(value_name = "CASE_DIR", required = true)]
        cases: Vec<PathBuf>,

        /// Game length in hours (overrides config)
        #[arg(long)]
        duration: Option<f64>,

        /// Fields to use at every venue (overrides config)
        #[arg(long)]
        fields: Option<u32>,

        /// Use the fixed 9-11 and 14-16 slots instead of stepping through the day
        #[arg(long)]
        fixed_slots: bool,

        /// Last week to search (overrides config)
        #[arg(long)]
        max_week: Option<u32>,
    },

    /// Write a random case directory
    Generate {
        /// Output directory
        #[arg(value_name = "OUT_DIR")]
        out: PathBuf,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Size preset
        #[arg(long, default_value = "default")]
        preset: Preset,

        /// Write team.csv, league.csv and venue.csv instead of JSON
        #[arg(long)]
        csv: bool,
    },
}

/// Generator size presets
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Preset {
    Small,
    Default,
    Large,
}
