//! CLI argument definitions.

use crate::config::{ExportFormat, OutputMode};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::validators::{parse_export_format, parse_separator};

/// Cut FLEx interlinear text phrases out of their audio recording.
#[derive(Debug, Parser)]
#[command(name = "flexclip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// FLEx interlinear text export (.flextext).
    #[arg(requires = "audio")]
    pub annotation: Option<PathBuf>,

    /// Recording the text was transcribed from (.wav).
    pub audio: Option<PathBuf>,

    /// Options for extraction.
    #[command(flatten)]
    pub extract: ExtractArgs,

    /// Options shared by all commands.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the texts in an annotation file.
    Texts {
        /// FLEx interlinear text export (.flextext).
        annotation: PathBuf,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments controlling extraction.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Output directory for clips (default: current directory).
    #[arg(short, long, env = "FLEXCLIP_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Title abbreviation of the text to extract (default: first text).
    #[arg(short, long, env = "FLEXCLIP_TEXT")]
    pub text: Option<String>,

    /// Slugify text abbreviations before matching and naming clips.
    #[arg(long)]
    pub slugify: bool,

    /// Clip file format.
    #[arg(short, long, value_parser = parse_export_format, env = "FLEXCLIP_FORMAT")]
    pub format: Option<ExportFormat>,

    /// Separator between text abbreviation and phrase number (default: "-").
    #[arg(long, value_parser = parse_separator)]
    pub separator: Option<String>,

    /// Suppress the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments shared by every command.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Output mode for results.
    #[arg(long, value_enum, default_value_t = OutputMode::Human, global = true)]
    pub output_mode: OutputMode,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}
