// src/pipeline/mod.rs
pub mod search;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::{fs::File, path::Path};
use tracing::info;

/// One source sheet as an independent table. Schemas are heterogeneous by
/// design; nothing joins or unifies them. `None` cells are genuinely empty.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

fn cell_to_string(cell: &Data) -> Option<String> {
    let s = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => format!("{}", f),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    };
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Loads every sheet of the workbook as its own table, in workbook order.
/// First row of each sheet is taken as its header row; sheets with no rows
/// come back as empty tables rather than errors.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<SheetTable>> {
    let mut workbook = open_workbook_auto(&path)
        .with_context(|| format!("failed to open workbook {:?}", path.as_ref()))?;

    let mut tables = Vec::new();
    for sheet_name in workbook.sheet_names().to_vec() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("failed to read sheet `{}`", sheet_name))?;

        let mut rows_iter = range.rows();
        let headers: Vec<String> = match rows_iter.next() {
            Some(header) => header
                .iter()
                .map(|c| cell_to_string(c).unwrap_or_default())
                .collect(),
            None => Vec::new(),
        };
        let rows: Vec<Vec<Option<String>>> = rows_iter
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        info!(sheet = %sheet_name, rows = rows.len(), "sheet loaded");
        tables.push(SheetTable {
            name: sheet_name,
            headers,
            rows,
        });
    }
    Ok(tables)
}

/// Single-table fallback for a pre-flattened CSV export of the workbook.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_flat_csv<P: AsRef<Path>>(path: P, name: &str) -> Result<SheetTable> {
    let file =
        File::open(&path).with_context(|| format!("failed to open table {:?}", path.as_ref()))?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading table header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (row_num, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at row {}", row_num))?;
        rows.push(
            record
                .iter()
                .map(|s| {
                    if s.trim().is_empty() {
                        None
                    } else {
                        Some(s.to_string())
                    }
                })
                .collect(),
        );
    }
    info!(rows = rows.len(), "flat table loaded");
    Ok(SheetTable {
        name: name.to_string(),
        headers,
        rows,
    })
}
