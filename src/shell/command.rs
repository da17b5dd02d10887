//! Command parsing for the interactive shell.

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// Shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new word: add <word> <freq>
    Add {
        /// Word to add
        word: String,
        /// Its frequency
        freq: i64,
    },
    /// Delete a word: delete <word>
    Delete {
        /// Word to delete
        word: String,
    },
    /// Change a word's frequency: modify <word> <freq>
    Modify {
        /// Word to update
        word: String,
        /// New frequency
        freq: i64,
    },
    /// Keypad lookup: t9 <digits>
    T9 {
        /// Digit sequence
        digits: String,
    },
    /// Prefix lookup: prefix [prefix]
    Prefix {
        /// Prefix, empty for everything
        prefix: String,
    },
    /// Pattern lookup: pattern <glob>
    Pattern {
        /// Glob over `?` and `*`
        pattern: String,
    },
    /// Fuzzy keypad lookup: fuzzy <digits>
    Fuzzy {
        /// Digit sequence
        digits: String,
    },
    /// List every word: list
    List,
    /// Frequency of one word: freq <word>
    Freq {
        /// Word to look up
        word: String,
    },
    /// Total frequency under a prefix: prefix-freq [prefix]
    PrefixFreq {
        /// Prefix, empty for the whole dictionary
        prefix: String,
    },
    /// Replace contents with a file: import <path>
    Import {
        /// File to read
        path: PathBuf,
    },
    /// Write contents to a file: export <path>
    Export {
        /// File to write
        path: PathBuf,
    },
    /// Remove every word: clear
    Clear,
    /// Show statistics: stats
    Stats,
    /// Show help: help
    Help,
    /// Exit the shell: exit | quit
    Exit,
}

/// Command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Print these lines and keep reading
    Continue(Vec<String>),
    /// Leave the shell
    Exit,
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  add <word> <freq>       add a new word
  delete <word>           delete a word (alias: rm)
  modify <word> <freq>    change a word's frequency
  t9 <digits>             keypad lookup, traced per digit
  prefix [prefix]         words starting with prefix
  pattern <glob>          words matching ? (one char) and * (any run)
  fuzzy <digits>          words within one digit of the keypad sequence
  list                    every word (alias: ls)
  freq <word>             frequency of a word
  prefix-freq [prefix]    total frequency under a prefix
  import <path>           replace the dictionary with a JSON file
  export <path>           write the dictionary to a JSON file
  clear                   remove every word
  stats                   word and node counts
  help                    this text
  exit                    leave (alias: quit)";

impl Command {
    /// Parse command from input string
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((cmd, args)) = parts.split_first() else {
            return Err(anyhow!("Empty command"));
        };

        match cmd.to_lowercase().as_str() {
            "add" | "insert" => {
                let (word, freq) = Self::word_and_freq(args, "add <word> <freq>")?;
                Ok(Self::Add { word, freq })
            }
            "delete" | "remove" | "rm" => Ok(Self::Delete {
                word: Self::single(args, "delete <word>")?,
            }),
            "modify" | "set" => {
                let (word, freq) = Self::word_and_freq(args, "modify <word> <freq>")?;
                Ok(Self::Modify { word, freq })
            }
            "t9" | "digits" => Ok(Self::T9 {
                digits: Self::single(args, "t9 <digits>")?,
            }),
            "prefix" => Ok(Self::Prefix {
                prefix: Self::optional(args, "prefix [prefix]")?,
            }),
            "pattern" | "glob" => Ok(Self::Pattern {
                pattern: Self::single(args, "pattern <glob>")?,
            }),
            "fuzzy" => Ok(Self::Fuzzy {
                digits: Self::single(args, "fuzzy <digits>")?,
            }),
            "list" | "ls" => Ok(Self::List),
            "freq" => Ok(Self::Freq {
                word: Self::single(args, "freq <word>")?,
            }),
            "prefix-freq" => Ok(Self::PrefixFreq {
                prefix: Self::optional(args, "prefix-freq [prefix]")?,
            }),
            "import" | "load" => Ok(Self::Import {
                path: PathBuf::from(Self::single(args, "import <path>")?),
            }),
            "export" | "save" => Ok(Self::Export {
                path: PathBuf::from(Self::single(args, "export <path>")?),
            }),
            "clear" => Ok(Self::Clear),
            "stats" | "info" => Ok(Self::Stats),
            "help" | "?" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            other => Err(anyhow!(
                "Unknown command: '{}'. Type 'help' for available commands.",
                other
            )),
        }
    }

    fn single(args: &[&str], usage: &str) -> Result<String> {
        match args {
            [arg] => Ok(arg.to_string()),
            _ => Err(anyhow!("Usage: {usage}")),
        }
    }

    fn optional(args: &[&str], usage: &str) -> Result<String> {
        match args {
            [] => Ok(String::new()),
            [arg] => Ok(arg.to_string()),
            _ => Err(anyhow!("Usage: {usage}")),
        }
    }

    fn word_and_freq(args: &[&str], usage: &str) -> Result<(String, i64)> {
        match args {
            [word, freq] => {
                let freq = freq
                    .parse()
                    .with_context(|| format!("Invalid frequency '{freq}'"))?;
                Ok((word.to_string(), freq))
            }
            _ => Err(anyhow!("Usage: {usage}")),
        }
    }
}
