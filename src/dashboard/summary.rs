use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::roster::{PolicyRecord, Roster};

/// Detail row behind a company's expandable listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyDetail {
    pub policy_id: String,
    pub category: String,
    pub expiry: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanySummary {
    pub company: String,
    pub total_policies: usize,
    pub details: Vec<PolicyDetail>,
}

/// Metric cards plus the two side-by-side per-company listings. The sorted
/// company list splits ceil(n/2) into the left column, remainder right.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_companies: usize,
    pub total_policies: usize,
    pub left: Vec<CompanySummary>,
    pub right: Vec<CompanySummary>,
}

impl Summary {
    pub fn per_company(&self) -> impl Iterator<Item = &CompanySummary> {
        self.left.iter().chain(self.right.iter())
    }
}

/// Full-column view of the filtered rows for the raw data table; the host
/// UI subsets `columns` on demand.
#[derive(Debug, Clone, Serialize)]
pub struct RawView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn summarize(filtered: &[&PolicyRecord]) -> Summary {
    let mut per_company: BTreeMap<&str, Vec<PolicyDetail>> = BTreeMap::new();
    for r in filtered {
        per_company
            .entry(r.company.as_str())
            .or_default()
            .push(PolicyDetail {
                policy_id: r.policy_id.clone(),
                category: r.category.clone(),
                expiry: r.expiry,
            });
    }

    let mut entries: Vec<CompanySummary> = per_company
        .into_iter()
        .map(|(company, details)| CompanySummary {
            company: company.to_string(),
            total_policies: details.len(),
            details,
        })
        .collect();

    let total_companies = entries.len();
    let total_policies = filtered.len();
    let split = total_companies.div_ceil(2);
    let right = entries.split_off(split);

    Summary {
        total_companies,
        total_policies,
        left: entries,
        right,
    }
}

pub fn raw_view(roster: &Roster, filtered: &[&PolicyRecord]) -> RawView {
    RawView {
        columns: roster.headers.clone(),
        rows: filtered.iter().map(|r| r.cells.clone()).collect(),
    }
}
