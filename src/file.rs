// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::{Table, write_row};
use crate::error::Result;

/// Write one table (header + rows) to `path`, creating parent directories.
/// Returns the final path written to.
pub fn write_table(path: &Path, table: &Table, sep: char) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_row(&mut out, &table.headers, sep)?;
    for row in &table.rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()?;

    logd!("wrote {} row(s) to {}", table.rows.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table { headers: vec![s!("Date"), s!("Selection")], rows: vec![vec![s!("2024-03-15"), s!("1. A\n2. B")]] }
    }

    #[test]
    fn creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/out/bets.csv");
        let written = write_table(&path, &table(), ',').unwrap();
        assert_eq!(written, path);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Date,Selection\n2024-03-15,\"1. A\n2. B\"\n"
        );
    }

    #[test]
    fn file_in_place_of_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("taken");
        fs::write(&blocker, "x").unwrap();
        assert!(write_table(&blocker.join("bets.csv"), &table(), ',').is_err());
    }
}
