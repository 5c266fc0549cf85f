//! CLI argument definitions for the word spinner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wordspin",
    version,
    about = "Word combination spinner - permute a word list and spin for a winner",
    long_about = "Generate ordered word combinations from a list of up to 12 words\n\
                  and spin a wheel of them to pick one at random."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every combination of the input words.
    Combos(CombosArgs),

    /// Generate combinations and spin the wheel to pick one.
    Spin(SpinArgs),

    /// List the supported output modes.
    Modes,
}

/// Where the word list comes from.
#[derive(Args, Clone, Default)]
pub struct InputArgs {
    /// File with one word per line ("-" for stdin).
    #[arg(long = "input", short = 'i', value_name = "FILE", conflicts_with = "words")]
    pub input: Option<PathBuf>,

    /// A word to include; repeat for more. Reads stdin when neither this nor
    /// --input is given.
    #[arg(long = "word", short = 'w', value_name = "WORD")]
    pub words: Vec<String>,

    /// Output mode: pairs, triplets, quads, quints or all.
    #[arg(long = "mode", short = 'm', default_value = "pairs")]
    pub mode: String,
}

#[derive(Parser)]
pub struct CombosArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Collapse duplicate combinations. Modes other than pairs and triplets
    /// then fall back to every arity instead of failing.
    #[arg(long = "unique")]
    pub unique: bool,

    /// How to print the combinations.
    #[arg(long = "format", value_enum, default_value = "plain")]
    pub format: CombosFormatArg,
}

#[derive(Parser)]
pub struct SpinArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Seed for the random extra rotation, for reproducible spins.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Spin duration in milliseconds.
    #[arg(long = "duration-ms", default_value_t = 5000)]
    pub duration_ms: u64,

    /// Delay between animation frames in milliseconds.
    #[arg(long = "frame-ms", default_value_t = 16)]
    pub frame_ms: u64,

    /// Do not draw the live spin progress.
    #[arg(long = "quiet-progress")]
    pub quiet_progress: bool,

    /// Print the outcome as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CombosFormatArg {
    Plain,
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

