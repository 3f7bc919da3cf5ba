//! CSV table loader

use std::borrow::Cow;
use std::io::Read;

use anyhow::{Context, Result};

use crate::config::LoadOptions;
use crate::model::{CellValue, Column, Table};

use super::TableLoader;

/// Loader for comma- (or otherwise) separated text
pub struct CsvLoader;

impl TableLoader for CsvLoader {
    fn load(&self, reader: &mut dyn Read, name: &str, options: &LoadOptions) -> Result<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(options.header)
            .delimiter(options.delimiter()?)
            .flexible(true)
            .from_reader(reader);

        let mut names: Vec<String> = if options.header {
            csv_reader
                .headers()
                .context("Failed to read CSV headers")?
                .iter()
                .map(|h| h.trim().to_string())
                .collect()
        } else {
            Vec::new()
        };

        let first_line = if options.header { 2 } else { 1 };
        let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];
        let mut row_count = 0;

        for (line_num, result) in csv_reader.records().enumerate() {
            let record = result
                .with_context(|| format!("Failed to read CSV row {}", line_num + first_line))?;

            // Headerless input grows columns as wider rows appear
            if !options.header && record.len() > columns.len() {
                for i in columns.len()..record.len() {
                    names.push(format!("C{}", i));
                    columns.push(vec![CellValue::Null; row_count]);
                }
            }

            // Pad with nulls if row has fewer columns; extra fields are dropped
            for (i, values) in columns.iter_mut().enumerate() {
                values.push(record.get(i).map_or(CellValue::Null, parse_cell_value));
            }
            row_count += 1;
        }

        let table = Table::from_columns(
            name,
            names
                .into_iter()
                .zip(columns)
                .map(|(name, values)| Column::new(name, values)),
        )?;
        log::debug!(
            "Parsed table {} with columns {:?}",
            table.name(),
            table.column_names()
        );
        Ok(table)
    }
}

/// Parse a string value into a CellValue with type inference
fn parse_cell_value(s: &str) -> CellValue {
    let trimmed = s.trim();

    // Check for empty/null
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") || trimmed == "NA" {
        return CellValue::Null;
    }

    // Try parsing as boolean
    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("yes") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed.eq_ignore_ascii_case("no") {
        return CellValue::Bool(false);
    }

    // Try parsing as integer
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }

    // Try parsing as float
    if let Ok(f) = trimmed.parse::<f64>() {
        return CellValue::Float(f);
    }

    // Try parsing as date
    if let Ok(date) = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellValue::Date(date);
    }

    // Try parsing as datetime (ISO 8601)
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return CellValue::DateTime(dt);
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(dt);
    }

    // Default to string
    CellValue::String(Cow::Owned(trimmed.to_string()))
}
