// src/cli.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::classify::{ClassifyError, OpenAiClassifier, TextClassifier};
use crate::config::classifier::ClassifierConfig;
use crate::config::options::{Bookmaker, ExportFormat, RunOptions};
use crate::error::ScrapeError;
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}\n\nRun with --help for usage.")]
    Usage(String),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Run(RunOptions),
}

/// Parse everything after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let usage = |msg: String| CliError::Usage(msg);

    let mut bookmaker: Option<Bookmaker> = None;
    let mut input: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut format = ExportFormat::Csv;
    let mut classify = true;
    let mut verbose = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-i" | "--input" => {
                let v = args.next().ok_or_else(|| usage(s!("Missing input path")))?;
                input = Some(PathBuf::from(v));
            }
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| usage(s!("Missing output directory")))?;
                out_dir = Some(PathBuf::from(v));
            }
            "--format" => {
                let v = args.next().ok_or_else(|| usage(s!("Missing value for --format")))?;
                format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(usage(format!("Unknown format: {}", other))),
                };
            }
            "--no-classify" => classify = false,
            "-v" | "--verbose" => verbose = true,
            flag if flag.starts_with('-') => return Err(usage(format!("Unknown arg: {}", flag))),
            name => {
                if bookmaker.is_some() {
                    return Err(usage(format!("Unexpected argument: {}", name)));
                }
                bookmaker = Some(name.parse().map_err(usage)?);
            }
        }
    }

    let bookmaker = bookmaker.ok_or_else(|| usage(s!("Missing bookmaker (bet365 or fanduel)")))?;
    let mut opts = RunOptions::new(bookmaker);
    if let Some(p) = input {
        opts.input = p;
    }
    if let Some(d) = out_dir {
        opts.export.out_dir = d;
    }
    opts.export.format = format;
    opts.classify = classify;
    opts.verbose = verbose;
    Ok(Command::Run(opts))
}

/// `None` when disabled or not configured; a missing key only warns.
fn build_classifier(opts: &RunOptions) -> Option<OpenAiClassifier> {
    if !opts.classify {
        logd!("classification disabled");
        return None;
    }
    match OpenAiClassifier::new(ClassifierConfig::from_env()) {
        Ok(c) => {
            logd!("classifier model: {}", c.model());
            Some(c)
        }
        Err(ClassifyError::MissingApiKey) => {
            logw!("OPENAI_API_KEY not set, skipping classification");
            None
        }
        Err(e) => {
            logw!("classifier unavailable, skipping classification: {e}");
            None
        }
    }
}

pub fn run(opts: &RunOptions) -> Result<RunSummary, CliError> {
    let classifier = build_classifier(opts);
    let mut progress = LogProgress::new();
    let summary = runner::run(
        opts,
        classifier.as_ref().map(|c| c as &dyn TextClassifier),
        &mut progress,
    )?;

    if summary.bets > 0 {
        logf!(
            "{}: {} bet(s), {} classified, {} file(s) written",
            opts.bookmaker,
            summary.bets,
            summary.classified,
            summary.files_written.len()
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, CliError> {
        parse_args(args.iter().map(|a| s!(*a)))
    }

    #[test]
    fn bookmaker_alone_uses_defaults() {
        let Ok(Command::Run(opts)) = parse(&["bet365"]) else { panic!("expected run") };
        assert_eq!(opts, RunOptions::new(Bookmaker::Bet365));
    }

    #[test]
    fn all_flags() {
        let Ok(Command::Run(opts)) =
            parse(&["fanduel", "-i", "saved/fd.html", "-o", "out", "--format", "TSV", "--no-classify", "-v"])
        else {
            panic!("expected run")
        };
        assert_eq!(opts.bookmaker, Bookmaker::FanDuel);
        assert_eq!(opts.input, PathBuf::from("saved/fd.html"));
        assert_eq!(opts.export.out_dir, PathBuf::from("out"));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert!(!opts.classify);
        assert!(opts.verbose);
    }

    #[test]
    fn help_wins() {
        assert!(matches!(parse(&["bet365", "--help"]), Ok(Command::Help)));
        assert!(HELP.contains("--no-classify"));
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(parse(&[]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["draftkings"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["bet365", "fanduel"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["bet365", "--format", "xlsx"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["bet365", "-o"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["bet365", "--all"]), Err(CliError::Usage(_))));
    }
}
