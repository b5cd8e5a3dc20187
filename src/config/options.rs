// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;

/// Which bookmaker layout a run parses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bookmaker {
    Bet365,
    FanDuel,
}

impl Bookmaker {
    pub const ALL: [Bookmaker; 2] = [Bookmaker::Bet365, Bookmaker::FanDuel];

    /// CLI / file-name key.
    pub fn key(self) -> &'static str {
        match self {
            Bookmaker::Bet365 => "bet365",
            Bookmaker::FanDuel => "fanduel",
        }
    }

    /// Value written to the `bookmaker` field of every record.
    pub fn label(self) -> &'static str {
        match self {
            Bookmaker::Bet365 => "bet365",
            Bookmaker::FanDuel => "FanDuel",
        }
    }

    /// One match per bet in the saved history page.
    pub fn block_selector(self) -> &'static str {
        match self {
            Bookmaker::Bet365 => "div.h-BetSummary",
            Bookmaker::FanDuel => ".stmnt-bet",
        }
    }

    pub fn default_input(self) -> PathBuf {
        PathBuf::from(join!(self.key(), ".html"))
    }
}

impl fmt::Display for Bookmaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Bookmaker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bookmaker::ALL
            .into_iter()
            .find(|b| b.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown bookmaker: {} (expected bet365 or fanduel)", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<key>.<ext>`: the table of fields as scraped.
    pub fn raw_path(&self, bookmaker: Bookmaker) -> PathBuf {
        self.file_in_out_dir(bookmaker.key())
    }

    /// `<out_dir>/<key>_processed.<ext>`: the presentation table.
    pub fn processed_path(&self, bookmaker: Bookmaker) -> PathBuf {
        self.file_in_out_dir(&join!(bookmaker.key(), PROCESSED_SUFFIX))
    }

    fn file_in_out_dir(&self, stem: &str) -> PathBuf {
        join_dir_and_filename(&self.out_dir, &join!(stem, ".", self.format.ext()))
    }
}

fn join_dir_and_filename(dir: &Path, file_name: &str) -> PathBuf {
    if dir.as_os_str().is_empty() {
        PathBuf::from(file_name)
    } else {
        dir.join(file_name)
    }
}

/// Everything one run needs; built by the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub bookmaker: Bookmaker,
    pub input: PathBuf,
    pub export: ExportOptions,
    pub classify: bool,
    pub verbose: bool,
}

impl RunOptions {
    pub fn new(bookmaker: Bookmaker) -> Self {
        Self {
            bookmaker,
            input: bookmaker.default_input(),
            export: ExportOptions::default(),
            classify: true,
            verbose: false,
        }
    }
}
