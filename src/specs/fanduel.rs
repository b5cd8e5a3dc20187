// src/specs/fanduel.rs
//! FanDuel account statement, one `.stmnt-bet` per bet.
//!
//! Status and bet type are not in the text at all; they are encoded in the
//! block's class list, e.g. `class="stmnt-bet stmnt-bet-won open parlay"`.
//! Everything except the class tokens is optional and simply left unset when
//! the lookup misses.

use scraper::ElementRef;

use crate::config::consts::LIST_SEP;
use crate::config::options::Bookmaker;
use crate::core::html::{class_tokens, select_all, select_first, select_first_of, stripped_text};
use crate::error::{Result, ScrapeError};

const BK: Bookmaker = Bookmaker::FanDuel;

/// Class token holding `...-<status>`.
const STATUS_CLASS_TOKEN: usize = 1;
/// Class token holding the bet type.
const TYPE_CLASS_TOKEN: usize = 3;

const EVENT_NAME: &str = ".eventname";
const TIME_STATUS: [&str; 2] = [".time-player .time", ".time"];
const LEG_NAME: &str = ".leg-name";
const LEG_INFO: &str = ".leginfo-sub .first";
const ODDS: [&str; 2] = [".leginfo-odds", ".betodds .value"];
const WAGER: &str = ".betstake .value span";
const RETURN: &str = ".betreturn .value span";
const BET_ID: &str = ".bet-id span:last-child";
const PLACED_TIME: &str = ".time span:last-child";
const BONUS: &str = ".bonus-bets";
const BONUS_AMOUNT: &str = ".bonus-amount";
const BONUS_TEXT: &str = ".bonus-text";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub leg_name: String,
    pub leg_info: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BonusBet {
    pub bonus_amount: String,
    pub bonus_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FanDuelRaw {
    pub bet_status: String,
    pub bet_type: String,
    pub event_name: Option<String>,
    pub time_status: Option<String>,
    pub legs: Vec<Leg>,
    pub odds: Option<String>,
    pub total_wager: Option<String>,
    pub bet_return: Option<String>,
    pub bet_id: Option<String>,
    pub placed_time: Option<String>,
    pub bonus_bet: Option<BonusBet>,
}

impl FanDuelRaw {
    /// Optional lookups that missed produce no cell at all.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let legs = self
            .legs
            .iter()
            .map(|l| join!(&l.leg_name, " - ", &l.leg_info))
            .collect::<Vec<_>>()
            .join(LIST_SEP);
        let bonus = self
            .bonus_bet
            .as_ref()
            .map(|b| join!(&b.bonus_amount, " ", &b.bonus_text))
            .unwrap_or_default();

        let mut out = cols![
            "bet_status" => &self.bet_status,
            "bet_type" => &self.bet_type,
            "event_name" => self.event_name.clone().unwrap_or_default(),
        ];
        push_set(&mut out, "time_status", &self.time_status);
        out.push(("legs", legs));
        push_set(&mut out, "odds", &self.odds);
        push_set(&mut out, "total_wager", &self.total_wager);
        push_set(&mut out, "bet_return", &self.bet_return);
        push_set(&mut out, "bet_id", &self.bet_id);
        push_set(&mut out, "placed_time", &self.placed_time);
        out.push(("bonus_bet", bonus));
        out
    }
}

fn push_set(out: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        out.push((key, v.clone()));
    }
}

pub fn extract(block: ElementRef<'_>) -> Result<FanDuelRaw> {
    let classes = class_tokens(block);
    let status_token = classes
        .get(STATUS_CLASS_TOKEN)
        .ok_or(ScrapeError::missing(BK, "class token 1 (status)"))?;
    let bet_status = status_token
        .rsplit_once('-')
        .map_or(*status_token, |(_, suffix)| suffix);
    let bet_type = classes
        .get(TYPE_CLASS_TOKEN)
        .ok_or(ScrapeError::missing(BK, "class token 3 (bet type)"))?;

    let text_of = |css: &'static str| -> Result<Option<String>> {
        Ok(select_first(block, css)?.map(stripped_text))
    };

    // Names and sub-infos are queried separately and paired by position. A leg
    // without sub-info shifts every later pairing, and the shorter list wins.
    let names = select_all(block, LEG_NAME)?;
    let infos = select_all(block, LEG_INFO)?;
    let legs = names
        .into_iter()
        .zip(infos)
        .map(|(name, info)| Leg { leg_name: stripped_text(name), leg_info: stripped_text(info) })
        .collect();

    let bonus_bet = match select_first(block, BONUS)? {
        Some(bonus) => match (select_first(bonus, BONUS_AMOUNT)?, select_first(bonus, BONUS_TEXT)?) {
            (Some(amount), Some(text)) => Some(BonusBet {
                bonus_amount: stripped_text(amount),
                bonus_text: stripped_text(text),
            }),
            _ => None,
        },
        None => None,
    };

    Ok(FanDuelRaw {
        bet_status: s!(bet_status),
        bet_type: s!(*bet_type),
        event_name: text_of(EVENT_NAME)?,
        time_status: select_first_of(block, &TIME_STATUS)?.map(stripped_text),
        legs,
        odds: select_first_of(block, &ODDS)?.map(stripped_text),
        total_wager: text_of(WAGER)?,
        bet_return: text_of(RETURN)?,
        bet_id: text_of(BET_ID)?,
        placed_time: text_of(PLACED_TIME)?,
        bonus_bet,
    })
}
