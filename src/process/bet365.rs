// src/process/bet365.rs
use super::{bet_type_for_legs, infer_status, number_legs};
use crate::config::options::Bookmaker;
use crate::core::amount::{first_amount, parse_amount};
use crate::core::sanitize::contains_ci;
use crate::error::{Result, ScrapeError};
use crate::record::{BOOST_MARK, CanonicalBetRecord};
use crate::specs::Bet365Raw;

// "03/15/2024 19:30": date and time separated by one space...
const DATE_TOKEN: usize = 0;
const TIME_TOKEN: usize = 1;
// ...then the date split on '/'. The exported history puts the month first.
const MONTH_PART: usize = 0;
const DAY_PART: usize = 1;
const YEAR_PART: usize = 2;

pub fn normalize(raw: &Bet365Raw) -> Result<CanonicalBetRecord> {
    let (date, bet_id) = date_and_bet_id(&raw.date_and_time)?;

    let selection = match raw.selection_labels.as_slice() {
        [] => return Err(ScrapeError::missing(Bookmaker::Bet365, "selection label")),
        [only] => only.clone(),
        labels => number_legs(labels),
    };

    let boost = match &raw.boost {
        Some(badge) if contains_ci(badge, "boost") => s!(BOOST_MARK),
        _ => s!(),
    };

    let wager = first_amount(&raw.wager)?;
    let returned = parse_amount(&first_amount(&raw.ret)?)?;
    logd!("{bet_id}: wager {wager}, returned {returned}");

    Ok(CanonicalBetRecord {
        date,
        bet_id,
        bookmaker: s!(Bookmaker::Bet365.label()),
        sport: s!(),
        selection,
        bet_type: s!(bet_type_for_legs(raw.selection_labels.len())),
        boost,
        bet_status: infer_status(parse_amount(&wager)?, returned, true),
        wager,
        odds: raw.odds.clone(),
        bonus_bet: raw.bonus_bet,
        fixture: raw.fixture_label.clone(),
    })
}

/// `"03/15/2024 19:30"` → (`"2024-03-15"`, `"202403151930"`)
fn date_and_bet_id(date_and_time: &str) -> Result<(String, String)> {
    let malformed = || ScrapeError::MalformedDate(s!(date_and_time));

    let tokens: Vec<&str> = date_and_time.split(' ').collect();
    let day = tokens.get(DATE_TOKEN).ok_or_else(malformed)?;
    let time = tokens.get(TIME_TOKEN).ok_or_else(malformed)?;

    let parts: Vec<&str> = day.split('/').collect();
    let (Some(month), Some(dom), Some(year)) =
        (parts.get(MONTH_PART), parts.get(DAY_PART), parts.get(YEAR_PART))
    else {
        return Err(malformed());
    };

    let date = join!(*year, "-", *month, "-", *dom);
    let bet_id = join!(&date, *time)
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | ' '))
        .collect();

    Ok((date, bet_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BetStatus;

    fn raw(labels: &[&str], wager: &str, ret: &str) -> Bet365Raw {
        Bet365Raw {
            date_and_time: s!("03/15/2024 19:30"),
            bet_type: s!(if labels.len() > 1 { "Parlay" } else { "Single" }),
            selection_labels: labels.iter().map(|l| s!(*l)).collect(),
            odds: s!("+245"),
            fixture_label: s!(if labels.len() > 1 { "Lakers @ Nuggets" } else { "" }),
            odds_holder: Vec::new(),
            stake: s!("$10.00"),
            boost: None,
            wager: s!(wager),
            ret: s!(ret),
            bonus_bet: false,
        }
    }

    #[test]
    fn two_leg_loss() {
        let rec = normalize(&raw(&["Lakers to Win", "Over 220.5"], "$10.00", "$0.00")).unwrap();
        assert_eq!(rec.wager, "10.00");
        assert_eq!(rec.bet_status, BetStatus::Loss);
        assert_eq!(rec.bet_type, "Multi Bet - 2 legs");
        assert_eq!(rec.selection, "1. Lakers to Win\n2. Over 220.5");
        assert_eq!(rec.fixture, "Lakers @ Nuggets");
    }

    #[test]
    fn single_keeps_label_and_leaves_type_blank() {
        let rec = normalize(&raw(&["Boston Celtics"], "$15.00", "$25.00")).unwrap();
        assert_eq!(rec.selection, "Boston Celtics");
        assert_eq!(rec.bet_type, "");
        assert_eq!(rec.sport, "");
        assert_eq!(rec.bet_status, BetStatus::Win);
        assert_eq!(rec.bookmaker, "bet365");
    }

    #[test]
    fn stake_returned_is_a_refund() {
        let rec = normalize(&raw(&["Boston Celtics"], "$10.00", "$10")).unwrap();
        assert_eq!(rec.bet_status, BetStatus::Refund);
    }

    #[test]
    fn date_and_id_come_from_placement_time() {
        let rec = normalize(&raw(&["A"], "$1", "$0")).unwrap();
        assert_eq!(rec.date, "2024-03-15");
        assert_eq!(rec.bet_id, "202403151930");
    }

    #[test]
    fn boost_badge_sets_mark() {
        let mut r = raw(&["A"], "$1", "$2");
        r.boost = Some(s!("Super Boost"));
        assert_eq!(normalize(&r).unwrap().boost, BOOST_MARK);

        r.boost = Some(s!("Early Payout"));
        assert_eq!(normalize(&r).unwrap().boost, "");
    }

    #[test]
    fn malformed_inputs_are_reported() {
        let mut r = raw(&["A"], "$1", "$2");
        r.date_and_time = s!("15.03.2024");
        assert!(matches!(normalize(&r), Err(ScrapeError::MalformedDate(_))));

        let r = raw(&["A"], "Free bet", "$2");
        assert!(matches!(normalize(&r), Err(ScrapeError::MalformedAmount(t)) if t == "Free bet"));

        let r = raw(&[], "$1", "$2");
        assert!(matches!(normalize(&r), Err(ScrapeError::FieldNotFound { .. })));
    }
}
