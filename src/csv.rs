// src/csv.rs
use std::io::{self, Write};

use crate::error::{Result, ScrapeError};
use crate::record::{CanonicalBetRecord, PROCESSED_COLUMNS};
use crate::specs::RawBet;

/* ---------------- Table shaping ---------------- */

/// What to do when a record lacks a declared column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingPolicy {
    Fail,
    Blank,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Lay out records under `columns`. `row` in errors is 0-based over records.
pub fn tabulate<I>(columns: &[&str], records: I, policy: MissingPolicy) -> Result<Table>
where
    I: IntoIterator<Item = Vec<(&'static str, String)>>,
{
    let mut rows = Vec::new();
    for (row, mut cells) in records.into_iter().enumerate() {
        if let Some((extra, _)) = cells.iter().find(|(k, _)| !columns.contains(k)) {
            return Err(ScrapeError::UnexpectedColumn { column: s!(*extra), row });
        }

        let mut out = Vec::with_capacity(columns.len());
        for col in columns {
            match cells.iter().position(|(k, _)| k == col) {
                Some(i) => out.push(cells.swap_remove(i).1),
                None if policy == MissingPolicy::Blank => out.push(s!()),
                None => return Err(ScrapeError::MissingColumn { column: s!(*col), row }),
            }
        }
        rows.push(out);
    }

    Ok(Table { headers: columns.iter().map(|c| s!(*c)).collect(), rows })
}

/// Header follows the first bet's keys; later bets may leave cells blank.
pub fn raw_table(bets: &[RawBet]) -> Result<Table> {
    let Some(first) = bets.first() else {
        return Ok(Table::default());
    };
    let columns: Vec<&'static str> = first.fields().into_iter().map(|(k, _)| k).collect();
    tabulate(&columns, bets.iter().map(RawBet::fields), MissingPolicy::Blank)
}

pub fn processed_table(records: &[CanonicalBetRecord]) -> Result<Table> {
    tabulate(
        &PROCESSED_COLUMNS,
        records.iter().map(CanonicalBetRecord::presentation),
        MissingPolicy::Fail,
    )
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line plus every row.
pub fn to_export_string(table: &Table, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, &table.headers, sep);
    for r in &table.rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
