// src/process/fanduel.rs
use chrono::NaiveDate;

use super::{bet_type_for_legs, infer_status};
use crate::config::options::Bookmaker;
use crate::core::amount::{first_amount, parse_amount};
use crate::core::sanitize::{commas_to_semicolons, contains_ci, strip_paren_qualifier};
use crate::error::{Result, ScrapeError};
use crate::record::{BOOST_MARK, CanonicalBetRecord};
use crate::specs::{FanDuelRaw, Leg};

const BK: Bookmaker = Bookmaker::FanDuel;

pub fn normalize(raw: &FanDuelRaw) -> Result<CanonicalBetRecord> {
    let bet_id = raw
        .bet_id
        .as_deref()
        .ok_or(ScrapeError::missing(BK, "bet id"))?
        .trim_matches('#');
    let placed = raw
        .placed_time
        .as_deref()
        .ok_or(ScrapeError::missing(BK, "placed time"))?;

    let (selection, boost) = selection_and_boost(&raw.legs)?;

    let wager = first_amount(
        raw.total_wager
            .as_deref()
            .ok_or(ScrapeError::missing(BK, "total wager"))?,
    )?;
    let returned = first_amount(
        raw.bet_return
            .as_deref()
            .ok_or(ScrapeError::missing(BK, "bet return"))?,
    )?;
    logd!("{bet_id}: wager {wager}, returned {returned}");

    Ok(CanonicalBetRecord {
        date: placed_date(placed)?,
        bet_id: s!(bet_id),
        bookmaker: s!(BK.label()),
        sport: s!(),
        selection: commas_to_semicolons(&selection),
        bet_type: s!(bet_type_for_legs(raw.legs.len())),
        boost,
        bet_status: infer_status(parse_amount(&wager)?, parse_amount(&returned)?, false),
        wager,
        odds: raw.odds.clone().unwrap_or_default(),
        bonus_bet: raw.bonus_bet.is_some(),
        fixture: raw.event_name.clone().unwrap_or_default(),
    })
}

fn selection_and_boost(legs: &[Leg]) -> Result<(String, String)> {
    match legs {
        [] => Err(ScrapeError::missing(BK, "leg")),
        [leg] => {
            let name = strip_paren_qualifier(&leg.leg_name);
            if contains_ci(&leg.leg_info, "boost") {
                Ok((name, s!(BOOST_MARK)))
            } else {
                Ok((join!(&name, " - ", &leg.leg_info), s!()))
            }
        }
        legs => {
            let lines = legs
                .iter()
                .enumerate()
                .map(|(i, l)| format!("{}. {} - {}", i + 1, l.leg_name, l.leg_info))
                .collect::<Vec<_>>()
                .join("\n");
            Ok((s!(lines.trim_matches('"')), s!()))
        }
    }
}

/// `"Mar 15, 2024 7:12PM ET"` → `"2024-03-15"`. `%B` takes full and abbreviated month names.
fn placed_date(placed: &str) -> Result<String> {
    let mut tokens = placed.split_whitespace();
    let (Some(month), Some(day), Some(year)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(ScrapeError::MalformedDate(s!(placed)));
    };
    let day = day.trim_end_matches(',');

    NaiveDate::parse_from_str(&join!(month, " ", day, " ", year), "%B %d %Y")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| ScrapeError::MalformedDate(s!(placed)))
}
