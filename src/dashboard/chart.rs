use chrono::NaiveDate;
use serde::Serialize;

use crate::dashboard::{
    aggregate::AggregatedRow,
    colors::{ColorMap, PALETTE},
};
use crate::roster::dates::format_br_date;

pub const CHART_TITLE: &str = "Número de Apólices por Data de Aviso e Empresa";
pub const X_LABEL: &str = "Data de Aviso";
pub const Y_LABEL: &str = "Número de Apólices";

/// Cosmetic knobs the dashboard variants used to differ on. Values are the
/// production defaults; the presentation layer may override any of them.
#[derive(Debug, Clone, Serialize)]
pub struct ChartStyle {
    pub tick_format: &'static str,
    pub tick_angle: i32,
    pub show_grid: bool,
    pub hover_bgcolor: &'static str,
    pub hover_bordercolor: &'static str,
    pub hover_font_family: &'static str,
    pub hover_font_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            tick_format: "%d/%m/%Y",
            tick_angle: -45,
            show_grid: false,
            hover_bgcolor: "white",
            hover_bordercolor: "black",
            hover_font_family: "Rockwell",
            hover_font_size: 16,
        }
    }
}

/// One bar segment: `x` stays a real date so the host renders a true
/// temporal axis, with gaps and ordering intact.
#[derive(Debug, Clone, Serialize)]
pub struct BarPoint {
    pub x: NaiveDate,
    pub y: usize,
    pub hover: String,
}

/// All bars of a single company, carrying its stable color token.
#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    pub company: String,
    pub color: &'static str,
    pub points: Vec<BarPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub style: ChartStyle,
    pub traces: Vec<BarTrace>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

fn hover_text(row: &AggregatedRow) -> String {
    format!(
        "Empresa: {} | Data de Aviso: {} | Apólices: {} | Fim Apólice: {}",
        row.company,
        format_br_date(row.outreach),
        row.count,
        format_br_date(row.expiry)
    )
}

/// Turns the aggregated table into a grouped bar series, one trace per
/// company. An empty input yields an empty series, never an error.
pub fn build(rows: &[AggregatedRow], colors: &ColorMap, style: ChartStyle) -> ChartSeries {
    let mut traces: Vec<BarTrace> = Vec::new();
    for row in rows {
        let point = BarPoint {
            x: row.outreach,
            y: row.count,
            hover: hover_text(row),
        };
        match traces.iter_mut().find(|t| t.company == row.company) {
            Some(trace) => trace.points.push(point),
            None => traces.push(BarTrace {
                company: row.company.clone(),
                color: colors.color_for(&row.company).unwrap_or(PALETTE[0]),
                points: vec![point],
            }),
        }
    }
    // input is sorted by date first, so per-trace points are already
    // chronological; order traces by company for a stable legend
    traces.sort_by(|a, b| a.company.cmp(&b.company));
    ChartSeries {
        title: CHART_TITLE,
        x_label: X_LABEL,
        y_label: Y_LABEL,
        style,
        traces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::dates::parse_br_date;

    fn agg(company: &str, outreach: &str, expiry: &str, count: usize) -> AggregatedRow {
        AggregatedRow {
            outreach: parse_br_date(outreach).unwrap(),
            company: company.to_string(),
            expiry: parse_br_date(expiry).unwrap(),
            count,
        }
    }

    #[test]
    fn one_trace_per_company_with_stable_colors() {
        let colors = ColorMap::assign(["Acme", "Beta"]);
        let rows = vec![
            agg("Acme", "01/01/2025", "01/12/2025", 2),
            agg("Beta", "01/01/2025", "01/12/2025", 1),
            agg("Acme", "15/01/2025", "01/12/2025", 3),
        ];
        let chart = build(&rows, &colors, ChartStyle::default());
        assert_eq!(chart.traces.len(), 2);
        let acme = &chart.traces[0];
        assert_eq!(acme.company, "Acme");
        assert_eq!(Some(acme.color), colors.color_for("Acme"));
        assert_eq!(acme.points.len(), 2);
        assert!(acme.points[0].x < acme.points[1].x);
    }

    #[test]
    fn hover_text_is_descriptive() {
        let colors = ColorMap::assign(["Acme"]);
        let rows = vec![agg("Acme", "01/01/2025", "01/12/2025", 2)];
        let chart = build(&rows, &colors, ChartStyle::default());
        let hover = &chart.traces[0].points[0].hover;
        assert!(hover.contains("Empresa: Acme"));
        assert!(hover.contains("01/01/2025"));
        assert!(hover.contains("Apólices: 2"));
        assert!(hover.contains("Fim Apólice: 01/12/2025"));
    }

    #[test]
    fn empty_aggregation_builds_an_empty_chart() {
        let colors = ColorMap::assign(Vec::<String>::new());
        let chart = build(&[], &colors, ChartStyle::default());
        assert!(chart.is_empty());
        assert_eq!(chart.title, CHART_TITLE);
    }
}
