use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::roster::PolicyRecord;

/// One distinct (outreach date, company, expiry date) combination and how
/// many filtered policies share it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedRow {
    pub outreach: NaiveDate,
    pub company: String,
    pub expiry: NaiveDate,
    pub count: usize,
}

/// Groups the filtered rows and counts group sizes. Output comes back
/// sorted by (outreach, company, expiry); consumers that need a different
/// order sort for themselves.
pub fn aggregate(filtered: &[&PolicyRecord]) -> Vec<AggregatedRow> {
    let mut groups: BTreeMap<(NaiveDate, &str, NaiveDate), usize> = BTreeMap::new();
    for r in filtered {
        *groups
            .entry((r.outreach, r.company.as_str(), r.expiry))
            .or_default() += 1;
    }
    groups
        .into_iter()
        .map(|((outreach, company, expiry), count)| AggregatedRow {
            outreach,
            company: company.to_string(),
            expiry,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::dates::parse_br_date;

    fn record(company: &str, outreach: &str, expiry: &str) -> PolicyRecord {
        PolicyRecord {
            company: company.to_string(),
            category: "Vida".to_string(),
            policy_id: "P-1".to_string(),
            outreach: parse_br_date(outreach).unwrap(),
            expiry: parse_br_date(expiry).unwrap(),
            cells: Vec::new(),
        }
    }

    #[test]
    fn groups_identical_combinations() {
        let rows = vec![
            record("Acme", "01/01/2025", "01/12/2025"),
            record("Acme", "01/01/2025", "01/12/2025"),
            record("Acme", "01/01/2025", "30/06/2025"),
            record("Beta", "01/01/2025", "01/12/2025"),
        ];
        let refs: Vec<&PolicyRecord> = rows.iter().collect();
        let agg = aggregate(&refs);
        assert_eq!(agg.len(), 3);
        let doubled = agg
            .iter()
            .find(|a| a.company == "Acme" && a.expiry == parse_br_date("01/12/2025").unwrap())
            .unwrap();
        assert_eq!(doubled.count, 2);
    }

    #[test]
    fn counts_sum_to_filtered_row_count() {
        let rows = vec![
            record("Acme", "01/01/2025", "01/12/2025"),
            record("Acme", "01/01/2025", "01/12/2025"),
            record("Beta", "15/01/2025", "01/12/2025"),
            record("Gama", "20/01/2025", "30/06/2025"),
            record("Gama", "20/01/2025", "30/06/2025"),
        ];
        let refs: Vec<&PolicyRecord> = rows.iter().collect();
        let agg = aggregate(&refs);
        let total: usize = agg.iter().map(|a| a.count).sum();
        assert_eq!(total, refs.len());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn output_is_sorted_chronologically_first() {
        let rows = vec![
            record("Beta", "15/01/2025", "01/12/2025"),
            record("Acme", "01/01/2025", "01/12/2025"),
        ];
        let refs: Vec<&PolicyRecord> = rows.iter().collect();
        let agg = aggregate(&refs);
        assert_eq!(agg[0].company, "Acme");
        assert_eq!(agg[1].company, "Beta");
    }
}
