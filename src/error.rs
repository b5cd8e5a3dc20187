// src/error.rs
use thiserror::Error;

use crate::config::options::Bookmaker;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A field the layout always carries was not in the block.
    /// Usually means the bookmaker changed its markup.
    #[error("{bookmaker}: field not found: {field}")]
    FieldNotFound {
        bookmaker: Bookmaker,
        field: &'static str,
    },

    #[error("no $ or % amount in {0:?}")]
    MalformedAmount(String),

    #[error("leg odds are not a number: {0:?}")]
    MalformedOdds(String),

    #[error("unexpected date format: {0:?}")]
    MalformedDate(String),

    #[error("invalid selector {css:?}: {reason}")]
    Selector {
        css: &'static str,
        reason: String,
    },

    #[error("row {row}: missing column {column:?}")]
    MissingColumn { column: String, row: usize },

    #[error("row {row}: unexpected column {column:?}")]
    UnexpectedColumn { column: String, row: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

impl ScrapeError {
    pub fn missing(bookmaker: Bookmaker, field: &'static str) -> Self {
        ScrapeError::FieldNotFound { bookmaker, field }
    }
}
