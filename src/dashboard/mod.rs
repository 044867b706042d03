// src/dashboard/mod.rs
pub mod aggregate;
pub mod chart;
pub mod colors;
pub mod filter;
pub mod negotiation;
pub mod summary;

use serde::Serialize;
use tracing::{info, warn};

use crate::dashboard::{
    chart::{ChartSeries, ChartStyle},
    colors::ColorMap,
    filter::{FilterOutcome, FilterSelection},
    negotiation::{NegotiationCard, NEGOTIATION_CARD},
    summary::{RawView, Summary},
};
use crate::roster::Roster;

pub const PAGE_TITLE: &str = "DASHBOARD DE CLIENTES - STRATSEG";

/// Everything one interaction produces. `warning` set means the filter was
/// blocked and the derived sections are withheld.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub warning: Option<String>,
    pub chart: Option<ChartSeries>,
    pub summary: Option<Summary>,
    pub raw: Option<RawView>,
    pub negotiation: &'static NegotiationCard,
}

/// The whole Pipeline A recompute, run once per parameter change: filter,
/// color, aggregate, chart, summarize. Pure over the loaded roster.
#[tracing::instrument(level = "info", skip(roster, selection))]
pub fn render(roster: &Roster, selection: &FilterSelection) -> DashboardView {
    let filtered = match filter::filter(roster, selection) {
        FilterOutcome::Incomplete { warning } => {
            warn!(%warning, "date range incomplete; withholding output");
            return DashboardView {
                title: PAGE_TITLE,
                warning: Some(warning),
                chart: None,
                summary: None,
                raw: None,
                negotiation: &NEGOTIATION_CARD,
            };
        }
        FilterOutcome::Filtered(rows) => rows,
    };
    info!(rows = filtered.len(), "filter pass complete");

    // full-roster scope: a company's color depends on its identity only,
    // never on which companies the current filter leaves in
    let colors = ColorMap::assign(roster.distinct_companies());
    let aggregated = aggregate::aggregate(&filtered);
    let chart = chart::build(&aggregated, &colors, ChartStyle::default());
    let summary = summary::summarize(&filtered);
    let raw = summary::raw_view(roster, &filtered);

    DashboardView {
        title: PAGE_TITLE,
        warning: None,
        chart: Some(chart),
        summary: Some(summary),
        raw: Some(raw),
        negotiation: &NEGOTIATION_CARD,
    }
}
