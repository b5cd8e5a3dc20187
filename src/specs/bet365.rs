// src/specs/bet365.rs
//! bet365 settled-bets page, one `div.h-BetSummary` per bet.
//!
//! Singles carry a `h-BetSelection_*` block; bet builders and multis carry a
//! `h-BetBuilderMultipleSelections` block instead. Bonus-bet stakes use a
//! separate `h-StakeReturnSectionIPOffer_*` pair.

use scraper::ElementRef;

use super::require;
use crate::config::consts::LIST_SEP;
use crate::config::options::Bookmaker;
use crate::core::html::{inner_text, select_all, select_first, select_first_of};
use crate::core::sanitize::collapse_newlines;
use crate::error::{Result, ScrapeError};

const BK: Bookmaker = Bookmaker::Bet365;

const DATE_AND_TIME: &str = "div.h-BetSummary_DateAndTime";

const MULTI: &str = "div.h-BetBuilderMultipleSelections";
const MULTI_HEADER_LABEL: &str = "div.h-BetBuilderMultipleSelections_HeaderContainer div";
const MULTI_LEG: &str = "div.h-BetBuilderSelection_Container";
const MULTI_LEG_LABEL: &str = "div.h-BetBuilderSelection_SelectionLabel";
const MULTI_ODDS_LABEL: &str = "div.h-BetBuilderMultipleSelections_OddsLabel";
const MULTI_ODDS_SPAN: &str = "span";
const MULTI_FIXTURE: &str = "div.h-BetBuilderMultipleSelections_FixtureLabel";

const SINGLE: &str = "div.h-BetSelection_Container";
const SINGLE_NAME: &str = "div.h-BetSelection_Name";
const SINGLE_ODDS: &str = "div.h-BetSelection_Odds";

const STAKE_DESCRIPTION: &str = "div.h-StakeDescription_Text";
const STAKE: &str = "div.h-StakeReturnSection_StakeContainer";
const RETURN: &str = "div.h-StakeReturnSection_ReturnText";
const OFFER_STAKE: &str = "div.h-StakeReturnSectionIPOffer_StakeDetails";
const OFFER_RETURN: &str = "div.h-StakeReturnSectionIPOffer_ReturnContainer";

const BOOST_BADGES: [&str; 2] = [
    "div.h-WinningsBoostBadge_BoostLabel",
    "div.h-BetBoostLabel.h-BetBoostLabel-superboost",
];

pub const SINGLE_BET_TYPE: &str = "Single";

#[derive(Clone, Debug, PartialEq)]
pub struct Bet365Raw {
    pub date_and_time: String,
    pub bet_type: String,
    pub selection_labels: Vec<String>,
    pub odds: String,
    pub fixture_label: String,
    /// Parsed leg prices (multis only).
    pub odds_holder: Vec<f64>,
    pub stake: String,
    pub boost: Option<String>,
    pub wager: String,
    pub ret: String,
    pub bonus_bet: bool,
}

impl Bet365Raw {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let odds_holder = self
            .odds_holder
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(LIST_SEP);

        cols![
            "date_and_time" => &self.date_and_time,
            "bet_type" => &self.bet_type,
            "selection_labels" => self.selection_labels.join(LIST_SEP),
            "odds" => &self.odds,
            "fixture_label" => &self.fixture_label,
            "odds_holder" => odds_holder,
            "stake" => &self.stake,
            "boost" => self.boost.clone().unwrap_or_default(),
            "wager" => &self.wager,
            "return" => &self.ret,
            "bonus_bet" => self.bonus_bet.to_string(),
        ]
    }
}

struct Selections {
    bet_type: String,
    labels: Vec<String>,
    odds: String,
    odds_holder: Vec<f64>,
    fixture_label: String,
}

pub fn extract(block: ElementRef<'_>) -> Result<Bet365Raw> {
    let date_and_time = inner_text(require(select_first(block, DATE_AND_TIME)?, BK, DATE_AND_TIME)?);

    // The multiple-selections block is what separates multis from singles.
    let selections = match select_first(block, MULTI)? {
        Some(multi) => read_multi(multi)?,
        None => read_single(block)?,
    };

    let stake = inner_text(require(select_first(block, STAKE_DESCRIPTION)?, BK, STAKE_DESCRIPTION)?);
    let (wager, ret, bonus_bet) = read_wager_and_return(block)?;

    let boost = select_first_of(block, &BOOST_BADGES)?.map(|b| collapse_newlines(&inner_text(b)));

    Ok(Bet365Raw {
        date_and_time,
        bet_type: selections.bet_type,
        selection_labels: selections.labels,
        odds: selections.odds,
        fixture_label: selections.fixture_label,
        odds_holder: selections.odds_holder,
        stake,
        boost,
        wager,
        ret,
        bonus_bet,
    })
}

fn read_multi(multi: ElementRef<'_>) -> Result<Selections> {
    let bet_type = inner_text(require(select_first(multi, MULTI_HEADER_LABEL)?, BK, MULTI_HEADER_LABEL)?);

    let mut labels = Vec::new();
    for leg in select_all(multi, MULTI_LEG)? {
        let label = require(select_first(leg, MULTI_LEG_LABEL)?, BK, MULTI_LEG_LABEL)?;
        labels.push(inner_text(label));
    }

    let odds_label = require(select_first(multi, MULTI_ODDS_LABEL)?, BK, MULTI_ODDS_LABEL)?;
    let mut prices: Vec<(String, f64)> = Vec::new();
    for span in select_all(odds_label, MULTI_ODDS_SPAN)? {
        let text = inner_text(span);
        let value = text
            .parse::<f64>()
            .map_err(|_| ScrapeError::MalformedOdds(text.clone()))?;
        prices.push((text, value));
    }

    // FIXME: shows the single largest leg price, not the combined price of the
    // multi. Kept as-is so exports stay comparable with earlier runs.
    let mut best: Option<&(String, f64)> = None;
    for p in &prices {
        if best.is_none_or(|b| p.1 > b.1) {
            best = Some(p);
        }
    }
    let odds = best
        .map(|(text, _)| text.clone())
        .ok_or(ScrapeError::missing(BK, MULTI_ODDS_SPAN))?;

    let fixture_label = inner_text(require(select_first(multi, MULTI_FIXTURE)?, BK, MULTI_FIXTURE)?);

    Ok(Selections {
        bet_type,
        labels,
        odds,
        odds_holder: prices.into_iter().map(|(_, v)| v).collect(),
        fixture_label,
    })
}

fn read_single(block: ElementRef<'_>) -> Result<Selections> {
    let selection = require(select_first(block, SINGLE)?, BK, SINGLE)?;
    let name = inner_text(require(select_first(selection, SINGLE_NAME)?, BK, SINGLE_NAME)?);
    let odds = inner_text(require(select_first(selection, SINGLE_ODDS)?, BK, SINGLE_ODDS)?);

    Ok(Selections {
        bet_type: s!(SINGLE_BET_TYPE),
        labels: vec![name],
        odds,
        odds_holder: Vec::new(),
        fixture_label: s!(),
    })
}

/// Cash stakes use the stake/return pair; if either half is missing the bet
/// was placed with a bonus offer and uses the IPOffer pair instead.
fn read_wager_and_return(block: ElementRef<'_>) -> Result<(String, String, bool)> {
    if let (Some(stake), Some(ret)) = (select_first(block, STAKE)?, select_first(block, RETURN)?) {
        return Ok((inner_text(stake), inner_text(ret), false));
    }

    let stake = require(select_first(block, OFFER_STAKE)?, BK, OFFER_STAKE)?;
    let ret = require(select_first(block, OFFER_RETURN)?, BK, OFFER_RETURN)?;
    Ok((inner_text(stake), inner_text(ret), true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::{parse_document, select_doc};

    fn extract_first(doc: &str) -> Result<Bet365Raw> {
        let html = parse_document(doc);
        let blocks = select_doc(&html, Bookmaker::Bet365.block_selector()).unwrap();
        extract(blocks[0])
    }

    const SINGLE_BET: &str = r#"
        <div class="h-BetSummary">
          <div class="h-BetSummary_DateAndTime">03/15/2024 19:30</div>
          <div class="h-BetSelection_Container">
            <div class="h-BetSelection_Name">Boston Celtics</div>
            <div class="h-BetSelection_Odds">-150</div>
          </div>
          <div class="h-StakeDescription_Text">$15.00 Single</div>
          <div class="h-StakeReturnSection_StakeContainer">Stake $15.00</div>
          <div class="h-StakeReturnSection_ReturnText">Return $25.00</div>
        </div>
    "#;

    const MULTI_BET: &str = r#"
        <div class="h-BetSummary">
          <div class="h-BetSummary_DateAndTime">04/02/2024 18:05</div>
          <div class="h-BetBuilderMultipleSelections">
            <div class="h-BetBuilderMultipleSelections_HeaderContainer"><div>Bet Builder</div></div>
            <div class="h-BetBuilderSelection_Container">
              <div class="h-BetBuilderSelection_SelectionLabel">Lakers to Win</div>
            </div>
            <div class="h-BetBuilderSelection_Container">
              <div class="h-BetBuilderSelection_SelectionLabel">LeBron James 25+ Points</div>
            </div>
            <div class="h-BetBuilderMultipleSelections_OddsLabel"><span>+120</span><span>+245</span><span>+245.0</span></div>
            <div class="h-BetBuilderMultipleSelections_FixtureLabel">Lakers @ Nuggets</div>
          </div>
          <div class="h-StakeDescription_Text">$10.00 Bet Builder</div>
          <div class="h-StakeReturnSectionIPOffer_StakeDetails">Bonus $10.00</div>
          <div class="h-StakeReturnSectionIPOffer_ReturnContainer">Return $0.00</div>
          <div class="h-BetBoostLabel h-BetBoostLabel-superboost">Super
Boost</div>
        </div>
    "#;

    #[test]
    fn single_has_one_label_and_no_fixture() {
        let raw = extract_first(SINGLE_BET).unwrap();
        assert_eq!(raw.date_and_time, "03/15/2024 19:30");
        assert_eq!(raw.bet_type, SINGLE_BET_TYPE);
        assert_eq!(raw.selection_labels, vec!["Boston Celtics"]);
        assert_eq!(raw.odds, "-150");
        assert_eq!(raw.fixture_label, "");
        assert!(raw.odds_holder.is_empty());
        assert_eq!(raw.wager, "Stake $15.00");
        assert_eq!(raw.ret, "Return $25.00");
        assert!(!raw.bonus_bet);
        assert_eq!(raw.boost, None);
    }

    #[test]
    fn multi_reads_legs_in_order_and_takes_first_max_price() {
        let raw = extract_first(MULTI_BET).unwrap();
        assert_eq!(raw.bet_type, "Bet Builder");
        assert_eq!(raw.selection_labels, vec!["Lakers to Win", "LeBron James 25+ Points"]);
        assert_eq!(raw.odds_holder, vec![120.0, 245.0, 245.0]);
        assert_eq!(raw.odds, "+245");
        assert_eq!(raw.fixture_label, "Lakers @ Nuggets");
    }

    #[test]
    fn offer_stake_marks_bonus_bet_and_boost_is_flattened() {
        let raw = extract_first(MULTI_BET).unwrap();
        assert!(raw.bonus_bet);
        assert_eq!(raw.wager, "Bonus $10.00");
        assert_eq!(raw.ret, "Return $0.00");
        assert_eq!(raw.boost.as_deref(), Some("Super Boost"));
    }

    #[test]
    fn winnings_boost_badge_is_checked_before_superboost() {
        let doc = SINGLE_BET.replace(
            r#"<div class="h-StakeDescription_Text">"#,
            r#"<div class="h-WinningsBoostBadge_BoostLabel">Winnings
Boost</div><div class="h-StakeDescription_Text">"#,
        );
        assert_eq!(extract_first(&doc).unwrap().boost.as_deref(), Some("Winnings Boost"));

        // both present: the winnings badge wins
        let both = MULTI_BET.replace(
            r#"<div class="h-StakeDescription_Text">"#,
            r#"<div class="h-WinningsBoostBadge_BoostLabel">Winnings Boost</div><div class="h-StakeDescription_Text">"#,
        );
        assert_eq!(extract_first(&both).unwrap().boost.as_deref(), Some("Winnings Boost"));
    }

    #[test]
    fn missing_date_names_the_selector() {
        let doc = SINGLE_BET.replace("h-BetSummary_DateAndTime", "h-Other");
        let err = extract_first(&doc).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::FieldNotFound { bookmaker: Bookmaker::Bet365, field: DATE_AND_TIME }
        ));
    }

    #[test]
    fn non_numeric_leg_price_is_rejected() {
        let doc = MULTI_BET.replace("<span>+120</span>", "<span>EVS</span>");
        assert!(matches!(extract_first(&doc), Err(ScrapeError::MalformedOdds(t)) if t == "EVS"));
    }

    #[test]
    fn raw_fields_keep_extraction_order() {
        let raw = extract_first(MULTI_BET).unwrap();
        let keys: Vec<&str> = raw.fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "date_and_time", "bet_type", "selection_labels", "odds", "fixture_label",
                "odds_holder", "stake", "boost", "wager", "return", "bonus_bet",
            ]
        );
        let fields = raw.fields();
        assert_eq!(fields[2].1, "Lakers to Win | LeBron James 25+ Points");
        assert_eq!(fields[5].1, "120 | 245 | 245");
    }
}
