// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds a trie from a dictionary
//! file and answers lookup and prefix-match queries against it.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, OutputFormat, ENV_PREFIX};
use lanai_lib::data_structures::MatchMode;
use lanai_lib::dictionary::load_dictionary_file;
use lanai_lib::error::{ErrorContext, ErrorReporter, LanaiError, LanaiResult, TracingErrorReporter};
use lanai_lib::report;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Lanai.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Output format, overriding the configuration
    #[clap(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Look up exact keys
    Lookup {
        /// Dictionary file of `key<separator>value` lines
        #[clap(short, long, value_parser)]
        dict: PathBuf,

        /// Keys to look up
        #[clap(required = true)]
        keys: Vec<String>,
    },

    /// Match stored keys that are prefixes of each input
    Match {
        /// Dictionary file of `key<separator>value` lines
        #[clap(short, long, value_parser)]
        dict: PathBuf,

        /// Which prefixes to report
        #[clap(short, long, value_enum, default_value_t = ModeArg::Longest)]
        mode: ModeArg,

        /// Inputs to match
        #[clap(required = true)]
        inputs: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Shortest,
    Longest,
    All,
}

impl From<ModeArg> for MatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Shortest => MatchMode::ShortestPrefix,
            ModeArg::Longest => MatchMode::LongestPrefix,
            ModeArg::All => MatchMode::AllPrefixes,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// they never mix with query output.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    installed
        .map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs `mode` for every input and prints one report per input.
fn run_queries(
    config: &LanaiConfig,
    dict: &Path,
    inputs: &[String],
    mode: MatchMode,
) -> LanaiResult<()> {
    let dictionary = load_dictionary_file(dict, &config.dictionary)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for input in inputs {
        let query = report::query(dictionary.trie(), input, mode);
        writeln!(out, "{}", report::render(&query, config.output.format)?)?;
    }

    out.flush()?;
    Ok(())
}

fn run(args: Args, config: &LanaiConfig) -> LanaiResult<()> {
    match args.command {
        Command::Lookup { dict, keys } => run_queries(config, &dict, &keys, MatchMode::Exact),
        Command::Match { dict, mode, inputs } => run_queries(config, &dict, &inputs, mode.into()),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LanaiConfig::default())
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .context("failed to load configuration")?;
    if let Some(format) = args.format {
        config.output.format = format.into();
    }

    init_logging(&config.log).context("failed to initialize logging")?;

    let component = match &args.command {
        Command::Lookup { .. } => "lookup",
        Command::Match { .. } => "match",
        Command::Validate => "validate",
        Command::GenConfig { .. } => "gen-config",
    };

    if let Err(error) = run(args, &config) {
        let context = ErrorContext::new(error, component);
        TracingErrorReporter.report(&context);
        eprintln!("{context}");
        process::exit(1);
    }

    Ok(())
}
