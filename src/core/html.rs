// src/core/html.rs
// Thin query layer over `scraper`: compile a selector, take the first or all
// matches, read text. Everything the adapters ask of the DOM goes through here.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn parse_document(doc: &str) -> Html {
    Html::parse_document(doc)
}

pub fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector { css, reason: e.to_string() })
}

/// All matches in the whole document, document order.
pub fn select_doc<'a>(doc: &'a Html, css: &'static str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).collect())
}

/// First descendant of `scope` matching `css`.
pub fn select_first<'a>(scope: ElementRef<'a>, css: &'static str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).next())
}

/// First match of the first selector in `chain` that matches anything.
pub fn select_first_of<'a>(scope: ElementRef<'a>, chain: &[&'static str]) -> Result<Option<ElementRef<'a>>> {
    for &css in chain {
        if let Some(el) = select_first(scope, css)? {
            return Ok(Some(el));
        }
    }
    Ok(None)
}

pub fn select_all<'a>(scope: ElementRef<'a>, css: &'static str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).collect())
}

/// All descendant text joined as-is, outer whitespace trimmed.
pub fn inner_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Every text node trimmed, empty ones dropped, then glued with no separator.
/// `<span> A </span> <span>(ML)</span>` → `A(ML)`
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Raw `class` attribute tokens in source order.
pub fn class_tokens<'a>(el: ElementRef<'a>) -> Vec<&'a str> {
    el.value()
        .attr("class")
        .map(|c| c.split_whitespace().collect())
        .unwrap_or_default()
}
