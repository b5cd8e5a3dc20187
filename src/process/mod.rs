// src/process/mod.rs
// Raw bag → CanonicalBetRecord. The per-bookmaker rules live in the
// submodules; what both layouts share lives here.

pub mod bet365;
pub mod fanduel;

use crate::error::Result;
use crate::record::{BetStatus, CanonicalBetRecord};
use crate::specs::RawBet;

pub fn normalize(raw: &RawBet) -> Result<CanonicalBetRecord> {
    match raw {
        RawBet::Bet365(r) => bet365::normalize(r),
        RawBet::FanDuel(r) => fanduel::normalize(r),
    }
}

/// Singles stay blank so the classifier can fill them in.
pub fn bet_type_for_legs(legs: usize) -> &'static str {
    match legs {
        0 | 1 => "",
        2 => "Multi Bet - 2 legs",
        3 => "Multi Bet - 3 legs",
        _ => "Multi Bet - 4+ legs",
    }
}

/// `1. first\n2. second…`
pub fn number_legs<S: AsRef<str>>(labels: &[S]) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}. {}", i + 1, label.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `refund_on_equal` turns "returned exactly the stake" into a refund
/// (bet365 voids and break-even cash-outs).
pub fn infer_status(wager: f64, returned: f64, refund_on_equal: bool) -> BetStatus {
    if returned == 0.0 {
        BetStatus::Loss
    } else if refund_on_equal && wager == returned {
        BetStatus::Refund
    } else if returned > 0.0 {
        BetStatus::Win
    } else {
        // Unreachable for extracted amounts (never negative). Open bets with
        // no return text fail earlier with MalformedAmount instead of landing here.
        BetStatus::Pending
    }
}
