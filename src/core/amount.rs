// src/core/amount.rs
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScrapeError};

// `$12.50` → "12.50", `50%` → "50". Thousands separators are not understood:
// `$1,250.00` yields "1".
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+(?:\.\d+)?)|(\d+(?:\.\d+)?)%").unwrap());

/// Every currency- or percent-marked number in `s`, in order.
pub fn extract_numbers(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    for caps in AMOUNT_RE.captures_iter(s) {
        if let Some(m) = caps.get(1) {
            out.push(s!(m.as_str()));
        } else if let Some(m) = caps.get(2) {
            // percent form must start on a number boundary
            let mid_number = s[..m.start()]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit());
            if !mid_number {
                out.push(s!(m.as_str()));
            }
        }
    }
    out
}

/// The first marked number; the layouts only ever carry one per field.
pub fn first_amount(s: &str) -> Result<String> {
    extract_numbers(s)
        .into_iter()
        .next()
        .ok_or_else(|| ScrapeError::MalformedAmount(s!(s)))
}

pub fn parse_amount(s: &str) -> Result<f64> {
    s.parse::<f64>().map_err(|_| ScrapeError::MalformedAmount(s!(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_and_percent_forms() {
        assert_eq!(extract_numbers("$123.45"), vec!["123.45"]);
        assert_eq!(extract_numbers("50%"), vec!["50"]);
        assert_eq!(extract_numbers("Stake $10.00 / Return $25"), vec!["10.00", "25"]);
        assert_eq!(extract_numbers("Profit boost 25.5% on $5"), vec!["25.5", "5"]);
    }

    #[test]
    fn bare_numbers_are_ignored() {
        assert!(extract_numbers("10.00").is_empty());
        assert!(extract_numbers("Cash out unavailable").is_empty());
    }

    #[test]
    fn repeat_calls_agree() {
        let s = "Return $7.50";
        assert_eq!(extract_numbers(s), extract_numbers(s));
    }

    #[test]
    fn thousands_separator_cuts_number() {
        assert_eq!(extract_numbers("$1,250.00"), vec!["1"]);
    }

    #[test]
    fn empty_result_is_an_error_for_callers() {
        assert!(matches!(first_amount("N/A"), Err(ScrapeError::MalformedAmount(t)) if t == "N/A"));
        assert_eq!(first_amount("To Return $0.00").unwrap(), "0.00");
        assert_eq!(parse_amount("0.00").unwrap(), 0.0);
    }
}
