// src/record.rs
//! The bookmaker-independent bet row and its presentation shape.

use std::fmt;

/// Settlement as written to the `Win` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BetStatus {
    Win,
    Loss,
    Pending,
    /// Void, or cashed out for exactly the stake.
    Refund,
}

impl BetStatus {
    pub fn code(self) -> &'static str {
        match self {
            BetStatus::Win => "Y",
            BetStatus::Loss => "N",
            BetStatus::Pending => "P",
            BetStatus::Refund => "R",
        }
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One normalized bet. Empty strings stand for "unknown".
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalBetRecord {
    pub date: String,
    /// Timestamp-derived on bet365, platform id on FanDuel. Not guaranteed unique.
    pub bet_id: String,
    pub bookmaker: String,
    pub sport: String,
    pub selection: String,
    pub bet_type: String,
    pub boost: String,
    pub wager: String,
    pub odds: String,
    pub bonus_bet: bool,
    pub bet_status: BetStatus,
    pub fixture: String,
}

/// Column order of the processed table.
pub const PROCESSED_COLUMNS: [&str; 12] = [
    "Date",
    "Notes",
    "Bookmaker",
    "Sport / League",
    "Selection",
    "Bet Type",
    "My Variable",
    "Fixture / Event",
    "Stake",
    "Odds (US)",
    "BB",
    "Win",
];

pub const BOOST_MARK: &str = "Boost";

impl CanonicalBetRecord {
    /// Internal field names in record order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        cols![
            "date" => &self.date,
            "bet_id" => &self.bet_id,
            "bookmaker" => &self.bookmaker,
            "sport" => &self.sport,
            "selection" => &self.selection,
            "bet_type" => &self.bet_type,
            "boost" => &self.boost,
            "wager" => &self.wager,
            "odds" => &self.odds,
            "bonus_bet" => yes_no(self.bonus_bet),
            "bet_status" => self.bet_status.code(),
            "fixture" => &self.fixture,
        ]
    }

    /// Fields renamed to the spreadsheet headers.
    pub fn presentation(&self) -> Vec<(&'static str, String)> {
        self.fields()
            .into_iter()
            .map(|(key, value)| (presentation_name(key), value))
            .collect()
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Y" } else { "N" }
}

fn presentation_name(field: &'static str) -> &'static str {
    match field {
        "date" => "Date",
        "bet_id" => "Notes",
        "bookmaker" => "Bookmaker",
        "sport" => "Sport / League",
        "selection" => "Selection",
        "bet_type" => "Bet Type",
        "boost" => "My Variable",
        "fixture" => "Fixture / Event",
        "wager" => "Stake",
        "odds" => "Odds (US)",
        "bonus_bet" => "BB",
        "bet_status" => "Win",
        other => other,
    }
}

#[cfg(test)]
pub(crate) fn sample_record() -> CanonicalBetRecord {
    CanonicalBetRecord {
        date: s!("2024-03-15"),
        bet_id: s!("202403151930"),
        bookmaker: s!("bet365"),
        sport: s!(),
        selection: s!("Boston Celtics"),
        bet_type: s!(),
        boost: s!(),
        wager: s!("15.00"),
        odds: s!("-150"),
        bonus_bet: false,
        bet_status: BetStatus::Win,
        fixture: s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_covers_every_column() {
        let rec = sample_record();
        let mut names: Vec<&str> = rec.presentation().into_iter().map(|(k, _)| k).collect();
        let mut expected = PROCESSED_COLUMNS.to_vec();
        names.sort_unstable();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn flags_render_as_letters() {
        let mut rec = sample_record();
        rec.bonus_bet = true;
        rec.bet_status = BetStatus::Refund;
        let cells = rec.presentation();
        assert!(cells.contains(&("BB", s!("Y"))));
        assert!(cells.contains(&("Win", s!("R"))));
        assert!(cells.contains(&("Notes", s!("202403151930"))));
    }
}
