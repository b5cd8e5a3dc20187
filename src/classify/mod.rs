// src/classify/mod.rs
//! Sport / bet-kind tagging from a record's free text.
//!
//! The bridge is best effort: whatever the classifier says (or fails to say)
//! never stops the pipeline. Failures are logged and the record is kept as is.

pub mod openai;

pub use openai::OpenAiClassifier;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progress::Progress;
use crate::record::CanonicalBetRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sport {
    #[serde(rename = "NBA")]
    Nba,
    #[serde(rename = "MLB")]
    Mlb,
    #[serde(rename = "NHL")]
    Nhl,
    Tennis,
    Soccer,
    Golf,
    #[serde(rename = "NFL")]
    Nfl,
    #[serde(rename = "UFC")]
    Ufc,
    #[serde(rename = "Formula 1")]
    Formula1,
    Unknown,
}

impl Sport {
    pub const ALL: [Sport; 10] = [
        Sport::Nba,
        Sport::Mlb,
        Sport::Nhl,
        Sport::Tennis,
        Sport::Soccer,
        Sport::Golf,
        Sport::Nfl,
        Sport::Ufc,
        Sport::Formula1,
        Sport::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sport::Nba => "NBA",
            Sport::Mlb => "MLB",
            Sport::Nhl => "NHL",
            Sport::Tennis => "Tennis",
            Sport::Soccer => "Soccer",
            Sport::Golf => "Golf",
            Sport::Nfl => "NFL",
            Sport::Ufc => "UFC",
            Sport::Formula1 => "Formula 1",
            Sport::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetKind {
    Winner,
    #[serde(rename = "Head to Head")]
    HeadToHead,
    #[serde(rename = "Not to Win")]
    NotToWin,
    Doubles,
    Triples,
    #[serde(rename = "Over / Under")]
    OverUnder,
    #[serde(rename = "No Run First Inning")]
    NoRunFirstInning,
    #[serde(rename = "To Hit Home Run")]
    ToHitHomeRun,
    Unknown,
}

impl BetKind {
    pub const ALL: [BetKind; 9] = [
        BetKind::Winner,
        BetKind::HeadToHead,
        BetKind::NotToWin,
        BetKind::Doubles,
        BetKind::Triples,
        BetKind::OverUnder,
        BetKind::NoRunFirstInning,
        BetKind::ToHitHomeRun,
        BetKind::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BetKind::Winner => "Winner",
            BetKind::HeadToHead => "Head to Head",
            BetKind::NotToWin => "Not to Win",
            BetKind::Doubles => "Doubles",
            BetKind::Triples => "Triples",
            BetKind::OverUnder => "Over / Under",
            BetKind::NoRunFirstInning => "No Run First Inning",
            BetKind::ToHitHomeRun => "To Hit Home Run",
            BetKind::Unknown => "Unknown",
        }
    }
}

/// Arguments of the `Classification` function call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub sport: Sport,
    pub bet_type: BetKind,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no API key configured for the classifier")]
    MissingApiKey,

    #[error("classifier request failed: {0}")]
    Http(String),

    #[error("classifier request timed out after {0}s")]
    Timeout(u64),

    #[error("classifier API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("unexpected classifier response: {0}")]
    MalformedResponse(String),
}

pub trait TextClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;
}

/// Tag one record. `sport` is always overwritten on success; `bet_type` only
/// when normalization left it empty (single legs). Returns whether it applied.
pub fn classify_record(classifier: &dyn TextClassifier, record: &mut CanonicalBetRecord) -> bool {
    logd!("classify {}: {:?}", record.bet_id, record.selection);

    match classifier.classify(&record.selection) {
        Ok(c) => {
            logd!("classify {}: {} / {}", record.bet_id, c.sport.label(), c.bet_type.label());
            record.sport = s!(c.sport.label());
            if record.bet_type.is_empty() {
                record.bet_type = s!(c.bet_type.label());
            }
            true
        }
        Err(e) => {
            loge!("classify {}: {e}", record.bet_id);
            false
        }
    }
}

/// Reported to `Progress::item_failed` for records the classifier could not tag.
pub const UNTAGGED: &str = "left untagged";

/// Returns how many records were tagged. Untagged records stay in place.
pub fn classify_all(
    classifier: &dyn TextClassifier,
    records: &mut [CanonicalBetRecord],
    progress: &mut dyn Progress,
) -> usize {
    progress.begin("classify", records.len());
    let mut applied = 0;
    for (i, record) in records.iter_mut().enumerate() {
        if classify_record(classifier, record) {
            applied += 1;
            progress.item_done(i);
        } else {
            progress.item_failed(i, UNTAGGED);
        }
    }
    progress.finish();
    applied
}
