//! Huaolelo - Main entrypoint.
//!
//! Command line front end for the predictive-text dictionary. It initializes
//! logging, loads configuration, opens the dictionary file, and dispatches
//! one action or an interactive shell.

use clap::{Parser, Subcommand};
use huaolelo_lib::config::{ConfigLoader, HuaoleloConfig, LogConfig, ENV_PREFIX};
use huaolelo_lib::dictionary::{store, Dictionary, DictionaryResult, Outcome};
use huaolelo_lib::error::{report_error, ErrorContext, HuaoleloError, HuaoleloResult};
use huaolelo_lib::shell::Shell;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Huaolelo.
#[derive(Parser, Debug)]
#[clap(name = "huaolelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Dictionary file (overrides the configured path)
    #[clap(short, long, value_parser)]
    dict: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new word
    Add {
        /// The word
        word: String,
        /// Its frequency
        #[clap(allow_hyphen_values = true)]
        freq: i64,
    },

    /// Delete a word
    Delete {
        /// The word
        word: String,
    },

    /// Change a word's frequency
    Modify {
        /// The word
        word: String,
        /// Its new frequency
        #[clap(allow_hyphen_values = true)]
        freq: i64,
    },

    /// Keypad lookup, traced per digit
    T9 {
        /// Digit sequence
        digits: String,
    },

    /// Words starting with a prefix
    Prefix {
        /// The prefix
        prefix: String,
    },

    /// Words matching a glob of ? and *
    Pattern {
        /// The glob
        pattern: String,
    },

    /// List every word with its frequency
    List,

    /// Words within one keypad digit of a sequence
    Fuzzy {
        /// Digit sequence
        digits: String,
    },

    /// Replace the dictionary with a JSON file
    Import {
        /// File to read
        path: PathBuf,
    },

    /// Write the dictionary to a JSON file
    Export {
        /// File to write
        path: PathBuf,
    },

    /// Start an interactive shell
    Shell,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to stderr so command output on stdout stays clean.
fn init_logging(log: &LogConfig) -> HuaoleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    result.map_err(|e| HuaoleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            let _ = init_logging(&LogConfig::default());
            huaolelo_lib::init();
            report_error(ErrorContext::new(e, "config"));
            process::exit(2);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
    }
    huaolelo_lib::init();

    match run(args, &config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            report_error(ErrorContext::new(e, "main"));
            process::exit(2);
        }
    }
}

/// Dispatches one subcommand.
///
/// Returns whether the action succeeded; failure messages are already printed.
fn run(args: Args, config: &HuaoleloConfig) -> HuaoleloResult<bool> {
    let dict_path = args.dict.unwrap_or_else(|| config.dictionary.path.clone());
    let pretty = config.dictionary.pretty_export;

    match args.command {
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = toml::to_string_pretty(&HuaoleloConfig::default())
                .map_err(|e| HuaoleloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;
            info!("Default configuration written to {:?}", output);
            Ok(true)
        }
        Command::Shell => {
            let dictionary = open(&dict_path, config)?;
            info!(path = %dict_path.display(), words = dictionary.len(), "starting shell");

            let mut shell = Shell::new(dictionary, config.shell.clone(), pretty);
            let stdin = std::io::stdin();
            shell
                .run(stdin.lock(), std::io::stdout())
                .map_err(|e| HuaoleloError::Custom(e.to_string()))?;

            if config.dictionary.autosave {
                shell.into_dictionary().export(&dict_path, pretty)?;
            }
            Ok(true)
        }
        Command::Add { word, freq } => one_shot(&dict_path, config, true, |d| d.add(&word, freq)),
        Command::Delete { word } => one_shot(&dict_path, config, true, |d| d.delete(&word)),
        Command::Modify { word, freq } => {
            one_shot(&dict_path, config, true, |d| d.modify(&word, freq))
        }
        Command::Import { path } => one_shot(&dict_path, config, true, |d| d.import(&path)),
        Command::T9 { digits } => one_shot(&dict_path, config, false, |d| d.t9(&digits)),
        Command::Prefix { prefix } => one_shot(&dict_path, config, false, |d| d.prefix(&prefix)),
        Command::Pattern { pattern } => {
            one_shot(&dict_path, config, false, |d| d.pattern(&pattern))
        }
        Command::Fuzzy { digits } => one_shot(&dict_path, config, false, |d| d.fuzzy(&digits)),
        Command::List => one_shot(&dict_path, config, false, |d| Ok(d.list())),
        Command::Export { path } => {
            one_shot(&dict_path, config, false, |d| d.export(&path, pretty))
        }
    }
}

/// Opens the dictionary, applies one action, prints its outcome, and saves
/// the file back after a successful mutation when autosave is on.
fn one_shot<F>(dict_path: &Path, config: &HuaoleloConfig, mutates: bool, action: F) -> HuaoleloResult<bool>
where
    F: FnOnce(&mut Dictionary) -> DictionaryResult<Outcome>,
{
    let mut dictionary = open(dict_path, config)?;
    let succeeded = print_outcome(action(&mut dictionary));
    if succeeded && mutates && config.dictionary.autosave {
        dictionary.export(dict_path, config.dictionary.pretty_export)?;
    }
    Ok(succeeded)
}

/// Loads the dictionary file, treating a missing file as empty.
fn open(path: &Path, config: &HuaoleloConfig) -> HuaoleloResult<Dictionary> {
    let keypad = config.keypad.to_layout()?;
    let mut dictionary = Dictionary::with_keypad(keypad);
    dictionary.load_entries(store::load_or_default(path)?)?;
    Ok(dictionary)
}

fn print_outcome(outcome: DictionaryResult<Outcome>) -> bool {
    match outcome {
        Ok(outcome) => {
            for line in outcome.lines() {
                println!("{line}");
            }
            true
        }
        Err(e) => {
            eprintln!("{e}");
            false
        }
    }
}
