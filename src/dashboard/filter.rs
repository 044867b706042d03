use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::roster::{dates::month_bounds, PolicyRecord, Roster};

/// Inclusive `[start, end]` range as picked in a two-endpoint date widget.
/// Either endpoint may still be unset while the user is mid-selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Both endpoints, iff the range is fully selected.
    pub fn complete(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }
}

/// Everything the user has selected in the sidebar. Defaults to the widest
/// selection the roster supports, with the outreach window narrowed to the
/// current calendar month.
#[derive(Debug, Clone)]
pub struct FilterSelection {
    pub companies: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub outreach: DateRange,
    pub expiry: DateRange,
}

impl FilterSelection {
    pub fn default_for(roster: &Roster, today: NaiveDate) -> Self {
        let (month_start, month_end) = month_bounds(today);
        let expiry = match roster.expiry_bounds() {
            Some((min, max)) => DateRange::closed(min, max),
            None => DateRange::default(),
        };
        Self {
            companies: roster.distinct_companies().into_iter().collect(),
            categories: roster.distinct_categories().into_iter().collect(),
            outreach: DateRange::closed(month_start, month_end),
            expiry,
        }
    }
}

/// Result of one filter pass. An incomplete date range blocks the pass
/// entirely: the caller surfaces the warning and withholds all downstream
/// output until the user completes the range.
#[derive(Debug)]
pub enum FilterOutcome<'a> {
    Incomplete { warning: String },
    Filtered(Vec<&'a PolicyRecord>),
}

pub const OUTREACH_RANGE_WARNING: &str =
    "Por favor, selecione uma data final para o filtro de contato.";
pub const EXPIRY_RANGE_WARNING: &str =
    "Por favor, selecione uma data final para o filtro de vencimento da apólice.";

/// Applies the four predicates as a strict conjunction over the roster.
pub fn filter<'a>(roster: &'a Roster, sel: &FilterSelection) -> FilterOutcome<'a> {
    let Some((outreach_start, outreach_end)) = sel.outreach.complete() else {
        return FilterOutcome::Incomplete {
            warning: OUTREACH_RANGE_WARNING.to_string(),
        };
    };
    let Some((expiry_start, expiry_end)) = sel.expiry.complete() else {
        return FilterOutcome::Incomplete {
            warning: EXPIRY_RANGE_WARNING.to_string(),
        };
    };

    let rows = roster
        .records
        .iter()
        .filter(|r| {
            sel.companies.contains(&r.company)
                && sel.categories.contains(&r.category)
                && outreach_start <= r.outreach
                && r.outreach <= outreach_end
                && expiry_start <= r.expiry
                && r.expiry <= expiry_end
        })
        .collect();
    FilterOutcome::Filtered(rows)
}
