// src/runner.rs
use std::path::PathBuf;

use crate::{
    classify::{TextClassifier, classify_all},
    config::options::{Bookmaker, RunOptions},
    core::html::parse_document,
    csv::{processed_table, raw_table},
    error::Result,
    file::write_table,
    process,
    progress::Progress,
    record::CanonicalBetRecord,
    specs::{self, RawBet},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub bets: usize,
    pub classified: usize,
    pub files_written: Vec<PathBuf>,
}

/// Every bet block in document order. A block missing a mandatory field fails the whole document.
pub fn extract_document(html: &str, bookmaker: Bookmaker) -> Result<Vec<RawBet>> {
    let doc = parse_document(html);
    let blocks = specs::find_bet_blocks(&doc, bookmaker)?;
    logd!("{bookmaker}: {} bet block(s)", blocks.len());

    blocks
        .into_iter()
        .map(|block| {
            let raw = specs::extract(block, bookmaker)?;
            logd!("raw: {:?}", raw.fields());
            Ok(raw)
        })
        .collect()
}

pub fn normalize_all(bets: &[RawBet]) -> Result<Vec<CanonicalBetRecord>> {
    bets.iter().map(process::normalize).collect()
}

/// Top-level pipeline: read → extract → raw table → normalize → classify → processed table.
/// `classifier` is `None` when classification is disabled.
pub fn run(
    opts: &RunOptions,
    classifier: Option<&dyn TextClassifier>,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let html = std::fs::read_to_string(&opts.input)?;
    run_document(&html, opts, classifier, progress)
}

/// Same as [`run`] with the document already in memory.
pub fn run_document(
    html: &str,
    opts: &RunOptions,
    classifier: Option<&dyn TextClassifier>,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let bookmaker = opts.bookmaker;
    let sep = opts.export.format.delim();

    let bets = extract_document(html, bookmaker)?;
    if bets.is_empty() {
        logw!("{bookmaker}: no bets found in {}", opts.input.display());
        return Ok(RunSummary::default());
    }
    progress.log(&format!("{bookmaker}: extracted {} bet(s)", bets.len()));

    let mut written = Vec::with_capacity(2);
    written.push(write_table(&opts.export.raw_path(bookmaker), &raw_table(&bets)?, sep)?);

    let mut records = normalize_all(&bets)?;

    let classified = match classifier {
        Some(c) => classify_all(c, &mut records, progress),
        None => 0,
    };

    written.push(write_table(
        &opts.export.processed_path(bookmaker),
        &processed_table(&records)?,
        sep,
    )?);
    for path in &written {
        progress.log(&format!("wrote {}", path.display()));
    }

    Ok(RunSummary { bets: bets.len(), classified, files_written: written })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_without_blocks_yields_nothing() {
        let bets = extract_document("<html><body><p>No bets</p></body></html>", Bookmaker::Bet365).unwrap();
        assert!(bets.is_empty());
    }

    #[test]
    fn extraction_failure_fails_the_document() {
        // class list too short for status/type tokens
        let doc = r#"<div class="stmnt-bet stmnt-bet-won"></div>"#;
        assert!(extract_document(doc, Bookmaker::FanDuel).is_err());
    }
}
