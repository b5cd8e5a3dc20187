// src/specs/mod.rs
//! # Source adapters
//!
//! One module per bookmaker layout. Each knows **where the ground truth lives
//! in that bookmaker's saved bet-history markup** and lifts it, untouched, into
//! a typed raw bag (`Bet365Raw`, `FanDuelRaw`).
//!
//! ## What lives here
//! - Selector choice and fallback precedence per layout.
//! - Presence checks: optional fields stay `None`, mandatory ones fail with
//!   `ScrapeError::FieldNotFound` naming the selector that missed.
//! - Rendering a raw bag as ordered `(key, value)` cells for the raw table.
//!
//! ## What does **not** live here
//! - Any reshaping of values (dates, amounts, selection text, status). That
//!   belongs to `process`.
//! - File output.
//!
//! ## Conventions
//! - Selectors are named constants at the top of each module so markup drift
//!   is fixed in one place.
//! - Positional assumptions (class-token indexes, leg pairing) are named and
//!   commented where they are used.
pub mod bet365;
pub mod fanduel;

use scraper::{ElementRef, Html};

use crate::config::options::Bookmaker;
use crate::core::html::select_doc;
use crate::error::{Result, ScrapeError};

pub use bet365::Bet365Raw;
pub use fanduel::{BonusBet, FanDuelRaw, Leg};

/// Raw fields of one bet block, shape depends on the bookmaker.
#[derive(Clone, Debug, PartialEq)]
pub enum RawBet {
    Bet365(Bet365Raw),
    FanDuel(FanDuelRaw),
}

impl RawBet {
    pub fn bookmaker(&self) -> Bookmaker {
        match self {
            RawBet::Bet365(_) => Bookmaker::Bet365,
            RawBet::FanDuel(_) => Bookmaker::FanDuel,
        }
    }

    /// Cells for the raw table, in extraction order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            RawBet::Bet365(raw) => raw.fields(),
            RawBet::FanDuel(raw) => raw.fields(),
        }
    }
}

/// Every bet-summary block in the document, document order.
pub fn find_bet_blocks(doc: &Html, bookmaker: Bookmaker) -> Result<Vec<ElementRef<'_>>> {
    select_doc(doc, bookmaker.block_selector())
}

pub fn extract(block: ElementRef<'_>, bookmaker: Bookmaker) -> Result<RawBet> {
    match bookmaker {
        Bookmaker::Bet365 => bet365::extract(block).map(RawBet::Bet365),
        Bookmaker::FanDuel => fanduel::extract(block).map(RawBet::FanDuel),
    }
}

fn require<'a>(
    found: Option<ElementRef<'a>>,
    bookmaker: Bookmaker,
    field: &'static str,
) -> Result<ElementRef<'a>> {
    found.ok_or(ScrapeError::missing(bookmaker, field))
}
