use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Rota seasonal weekly rotation planner.
#[derive(Parser)]
#[command(
    name = "rota",
    version,
    about = "Shares season weeks equally and rotates the midsummer week"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Allocate one or more consecutive seasons.
    Allocate(AllocateArgs),
    /// Show who holds the anchor week in a given year.
    Anchor(AnchorArgs),
}

/// Output format for allocated seasons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One Markdown table per season.
    #[default]
    Markdown,
    /// Pretty-printed JSON array of seasons.
    Json,
}

/// Arguments for the `allocate` subcommand.
#[derive(clap::Args)]
pub struct AllocateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "rota.toml")]
    pub config: PathBuf,

    /// First season year (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Number of consecutive seasons to allocate.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub seasons: usize,

    /// Anchor holder for the first season, overriding the configured record.
    #[arg(short, long)]
    pub anchor: Option<String>,

    /// Override the RNG seed used when no anchor record exists.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
    pub format: Format,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `anchor` subcommand.
#[derive(clap::Args)]
pub struct AnchorArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "rota.toml")]
    pub config: PathBuf,

    /// Season year (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Override the RNG seed used when no anchor record exists.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
