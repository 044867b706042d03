use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Plotly's qualitative T10 palette, the one the dashboard charts with.
pub const PALETTE: [&str; 10] = [
    "#4C78A8", "#F58518", "#E45756", "#72B7B2", "#54A24B", "#EECA3B", "#B279A2", "#FF9DA6",
    "#9D755D", "#BAB0AC",
];

/// Company → color token. Built once per load over the *full* roster's
/// distinct companies so a company keeps its color no matter which subset
/// the current filter leaves visible.
#[derive(Debug, Clone, Serialize)]
pub struct ColorMap {
    map: BTreeMap<String, &'static str>,
}

impl ColorMap {
    /// Sorts and dedups `companies`, then assigns `PALETTE[i % len]` to the
    /// i-th name. Discovery order of the input is irrelevant.
    pub fn assign<I, S>(companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let distinct: BTreeSet<String> = companies.into_iter().map(Into::into).collect();
        let map = distinct
            .into_iter()
            .enumerate()
            .map(|(i, company)| (company, PALETTE[i % PALETTE.len()]))
            .collect();
        Self { map }
    }

    pub fn color_for(&self, company: &str) -> Option<&'static str> {
        self.map.get(company).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idempotent_and_order_independent() {
        let a = ColorMap::assign(["Beta", "Acme", "Gama"]);
        let b = ColorMap::assign(["Gama", "Beta", "Acme", "Acme"]);
        for company in ["Acme", "Beta", "Gama"] {
            assert_eq!(a.color_for(company), b.color_for(company));
        }
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn assigns_palette_in_sorted_order() {
        let map = ColorMap::assign(["Beta", "Acme"]);
        assert_eq!(map.color_for("Acme"), Some(PALETTE[0]));
        assert_eq!(map.color_for("Beta"), Some(PALETTE[1]));
    }

    #[test]
    fn cycles_past_the_palette_end() {
        let names: Vec<String> = (0..12).map(|i| format!("Empresa {:02}", i)).collect();
        let map = ColorMap::assign(names);
        assert_eq!(map.color_for("Empresa 10"), Some(PALETTE[0]));
        assert_eq!(map.color_for("Empresa 11"), Some(PALETTE[1]));
    }

    #[test]
    fn full_roster_scope_keeps_colors_stable_under_filtering() {
        // The map is always built from the full roster, so filtering down to
        // a subset of companies changes nothing for the survivors.
        let full = ColorMap::assign(["Acme", "Beta", "Gama", "Delta"]);
        let still_visible = ["Beta", "Delta"];
        let refiltered = ColorMap::assign(["Acme", "Beta", "Gama", "Delta"]);
        for company in still_visible {
            assert_eq!(full.color_for(company), refiltered.color_for(company));
        }
    }
}
