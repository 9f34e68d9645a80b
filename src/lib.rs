//! Flexclip - FLEx interlinear text phrase clipper.
//!
//! This crate cuts one audio clip per phrase of a FLEx interlinear text
//! export out of the recording the text was transcribed from.

#![warn(missing_docs)]

pub mod annotation;
pub mod audio;
pub mod cli;
pub mod clipper;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;

use clap::Parser;
use cli::{Cli, Command, ExtractArgs};
use clipper::{ExtractOptions, PhraseExtractor, process_file};
use config::{Config, OutputMode, config_file_path, load_default_config, save_default_config};
use output::{ResultType, create_observer, emit_json_result};
use std::path::Path;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for flexclip CLI.
///
/// # Errors
///
/// Returns an error if configuration loading, text listing or extraction fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet);

    let config = load_default_config()?;
    let output_mode = cli.global.output_mode;

    if let Some(command) = cli.command {
        return handle_command(command, output_mode);
    }

    let (Some(annotation), Some(audio)) = (cli.annotation.as_deref(), cli.audio.as_deref()) else {
        cli::help::print_usage_help();
        return Ok(());
    };

    let progress = !cli.global.quiet && !cli.extract.no_progress;
    extract(annotation, audio, &cli.extract, &config, output_mode, progress)
}

/// Resolve extraction options: command line over config file over defaults.
#[must_use]
pub fn resolve_options(args: &ExtractArgs, config: &Config) -> ExtractOptions {
    let mut options = ExtractOptions::from(&config.defaults);

    if let Some(out_dir) = &args.out_dir {
        options.out_dir.clone_from(out_dir);
    }
    if let Some(separator) = &args.separator {
        options.separator.clone_from(separator);
    }
    if let Some(format) = args.format {
        options.export_format = format;
    }
    options.text_abbr.clone_from(&args.text);
    options.slugify_abbr |= args.slugify;

    options
}

fn extract(
    annotation: &Path,
    audio: &Path,
    args: &ExtractArgs,
    config: &Config,
    output_mode: OutputMode,
    progress: bool,
) -> Result<()> {
    let extractor = PhraseExtractor::new(resolve_options(args, config));
    let mut observer = create_observer(output_mode, progress);

    let report = process_file(annotation, audio, &extractor, observer.as_mut())?;

    if output_mode.is_structured() {
        emit_json_result(ResultType::ClipExtraction, &report)?;
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Logs go to stderr so stdout stays clean for JSON results.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, output_mode: OutputMode) -> Result<()> {
    match command {
        Command::Texts { annotation } => handle_texts_command(&annotation, output_mode),
        Command::Config { action } => handle_config_command(action),
    }
}

#[allow(clippy::print_stdout)]
fn handle_texts_command(annotation: &Path, output_mode: OutputMode) -> Result<()> {
    let texts = annotation::list_texts(annotation)?;

    if output_mode.is_structured() {
        return emit_json_result(ResultType::TextList, &texts);
    }

    if texts.is_empty() {
        info!("No texts found in {}", annotation.display());
        return Ok(());
    }

    println!("Texts in {}:", annotation.display());
    for text in &texts {
        println!(
            "  [{}] {} {} ({} phrases)",
            text.index,
            text.abbreviation.as_deref().unwrap_or("<no abbreviation>"),
            text.title.as_deref().unwrap_or(""),
            text.phrase_count
        );
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            let contents = toml::to_string_pretty(&config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            println!("{contents}");
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", config_file_path()?.display());
            Ok(())
        }
    }
}
