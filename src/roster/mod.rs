// src/roster/mod.rs
pub mod dates;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::{collections::BTreeSet, fs::File, path::Path};
use tracing::info;

use crate::roster::dates::parse_br_date;

pub const COMPANY_COL: &str = "Empresa";
pub const CATEGORY_COL: &str = "Seguro";
pub const POLICY_COL: &str = "Apólice";
pub const OUTREACH_COL: &str = "Avisar Empresa";
pub const EXPIRY_COL: &str = "Fim Apólice";

/// One row of the client/policy roster. The typed fields are the ones the
/// dashboard computes over; `cells` keeps the entire source row verbatim,
/// in header order, so raw views can expose every column.
#[derive(Debug, Clone)]
pub struct PolicyRecord {
    pub company: String,
    pub category: String,
    pub policy_id: String,
    pub outreach: NaiveDate,
    pub expiry: NaiveDate,
    pub cells: Vec<String>,
}

/// The loaded roster. Immutable after load; every filter pass derives a new
/// view over `records`, never a mutation of it.
#[derive(Debug)]
pub struct Roster {
    pub headers: Vec<String>,
    pub records: Vec<PolicyRecord>,
}

impl Roster {
    /// Distinct company names, sorted ascending.
    pub fn distinct_companies(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.company.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct insurance categories, sorted ascending.
    pub fn distinct_categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.category.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Min and max policy-expiry dates across the whole roster.
    pub fn expiry_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.expiry).min()?;
        let max = self.records.iter().map(|r| r.expiry).max()?;
        Some((min, max))
    }
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow!("roster is missing required column `{}`", name))
}

/// Loads the roster CSV. Both date columns must hold `DD/MM/YYYY` text;
/// any malformed value aborts the load. This is a precondition on the input
/// file's shape, not a recoverable condition.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let file = File::open(&path)
        .with_context(|| format!("failed to open roster file {:?}", path.as_ref()))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading roster header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let company_idx = column_index(&headers, COMPANY_COL)?;
    let category_idx = column_index(&headers, CATEGORY_COL)?;
    let policy_idx = column_index(&headers, POLICY_COL)?;
    let outreach_idx = column_index(&headers, OUTREACH_COL)?;
    let expiry_idx = column_index(&headers, EXPIRY_COL)?;

    let mut records = Vec::new();
    for (row_num, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at roster row {}", row_num))?;
        let cells: Vec<String> = record.iter().map(str::to_string).collect();

        let field = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");

        let outreach_raw = field(outreach_idx);
        let outreach = parse_br_date(outreach_raw).ok_or_else(|| {
            anyhow!(
                "row {}: `{}` value `{}` is not a DD/MM/YYYY date",
                row_num,
                OUTREACH_COL,
                outreach_raw
            )
        })?;
        let expiry_raw = field(expiry_idx);
        let expiry = parse_br_date(expiry_raw).ok_or_else(|| {
            anyhow!(
                "row {}: `{}` value `{}` is not a DD/MM/YYYY date",
                row_num,
                EXPIRY_COL,
                expiry_raw
            )
        })?;

        records.push(PolicyRecord {
            company: field(company_idx).to_string(),
            category: field(category_idx).to_string(),
            policy_id: field(policy_idx).to_string(),
            outreach,
            expiry,
            cells,
        });
    }

    if records.is_empty() {
        bail!("roster file {:?} has no data rows", path.as_ref());
    }
    info!(rows = records.len(), "roster loaded");
    Ok(Roster { headers, records })
}
