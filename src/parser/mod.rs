//! Loading tables from delimited text

mod csv;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::config::LoadOptions;
use crate::model::Table;

pub use self::csv::CsvLoader;

/// Produces a table from a byte stream
pub trait TableLoader {
    /// Parse `reader` into a table called `name`
    fn load(&self, reader: &mut dyn Read, name: &str, options: &LoadOptions) -> Result<Table>;
}

/// Load a CSV file with default options
pub fn load_csv(path: impl AsRef<Path>) -> Result<Table> {
    load_csv_with(path, &LoadOptions::default())
}

/// Load a CSV file; files ending in `.gz` are decompressed on the fly
pub fn load_csv_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Table> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(MultiGzDecoder::new(reader))
    } else {
        Box::new(reader)
    };

    let table = CsvLoader
        .load(&mut reader, &table_name(path), options)
        .with_context(|| format!("Failed to parse file: {}", path.display()))?;

    log::info!(
        "Loaded {} ({} columns, {} rows)",
        path.display(),
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// File name with compression and format suffixes removed
fn table_name(path: &Path) -> String {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    for suffix in [".gz", ".csv", ".tsv", ".txt"] {
        if name.len() > suffix.len() && name.to_lowercase().ends_with(suffix) {
            name.truncate(name.len() - suffix.len());
        }
    }
    name
}
