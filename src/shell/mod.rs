//! Interactive shell for Huaolelo
//!
//! A line-oriented Read-Eval-Print Loop over a [`Dictionary`]. Each line is
//! one command; results and failure messages are printed as text.

pub mod command;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::config::shell::ShellConfig;
use crate::dictionary::Dictionary;
use crate::error::{report_error, ErrorContext};

pub use command::{Command, CommandResult, HELP};

/// Interactive session state.
#[derive(Debug)]
pub struct Shell {
    dictionary: Dictionary,
    config: ShellConfig,
    pretty_export: bool,
}

impl Shell {
    /// Creates a shell over `dictionary`.
    pub fn new(dictionary: Dictionary, config: ShellConfig, pretty_export: bool) -> Self {
        Self {
            dictionary,
            config,
            pretty_export,
        }
    }

    /// The dictionary as modified so far.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Consumes the shell, returning its dictionary.
    pub fn into_dictionary(self) -> Dictionary {
        self.dictionary
    }

    /// Parses and executes one input line.
    pub fn execute_line(&mut self, line: &str) -> CommandResult {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => CommandResult::Continue(vec![e.to_string()]),
        }
    }

    /// Executes one command.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        debug!(?command, "executing shell command");
        let outcome = match command {
            Command::Add { word, freq } => self.dictionary.add(&word, freq),
            Command::Delete { word } => self.dictionary.delete(&word),
            Command::Modify { word, freq } => self.dictionary.modify(&word, freq),
            Command::T9 { digits } => self.dictionary.t9(&digits),
            Command::Prefix { prefix } => self.dictionary.prefix(&prefix),
            Command::Pattern { pattern } => self.dictionary.pattern(&pattern),
            Command::Fuzzy { digits } => self.dictionary.fuzzy(&digits),
            Command::List => Ok(self.dictionary.list()),
            Command::Import { path } => self.dictionary.import(&path),
            Command::Export { path } => self.dictionary.export(&path, self.pretty_export),
            Command::Freq { word } => {
                return self.lines(vec![format!("{word} {}", self.dictionary.frequency(&word))])
            }
            Command::PrefixFreq { prefix } => {
                let total = self.dictionary.prefix_frequency(&prefix);
                return self.lines(vec![format!("{prefix}* {total}")]);
            }
            Command::Clear => {
                self.dictionary.clear();
                return self.lines(vec!["cleared".to_string()]);
            }
            Command::Stats => {
                let trie = self.dictionary.trie();
                return self.lines(vec![
                    format!("words: {}", trie.len()),
                    format!("nodes: {}", trie.node_count()),
                    format!("total frequency: {}", trie.get_prefix_frequency("")),
                ]);
            }
            Command::Help => return self.lines(HELP.lines().map(str::to_string).collect()),
            Command::Exit => return CommandResult::Exit,
        };

        match outcome {
            Ok(outcome) => self.lines(outcome.lines()),
            Err(e) => {
                let message = e.to_string();
                if matches!(e, crate::error::dictionary::DictionaryError::Store(_)) {
                    report_error(ErrorContext::new(e, "shell"));
                }
                self.lines(message.lines().map(str::to_string).collect())
            }
        }
    }

    /// Runs the loop until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", self.config.prompt)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                match self.execute_line(&line) {
                    CommandResult::Continue(lines) => {
                        for line in lines {
                            writeln!(output, "{line}")?;
                        }
                    }
                    CommandResult::Exit => break,
                }
            }
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    fn lines(&self, mut lines: Vec<String>) -> CommandResult {
        let limit = self.config.max_results;
        if limit > 0 && lines.len() > limit {
            let hidden = lines.len() - limit;
            lines.truncate(limit);
            lines.push(format!("... {hidden} more"));
        }
        CommandResult::Continue(lines)
    }
}
