use serde::Serialize;
use tracing::debug;

use crate::pipeline::SheetTable;

/// The column the search runs against. Sheets without it are skipped; the
/// workbook's schemas are heterogeneous and that is expected.
pub const SEARCH_COL: &str = "Nome da Empresa";

pub const IDLE_PROMPT: &str =
    "Digite o nome de uma empresa na barra de pesquisa acima para visualizar os dados consolidados.";

pub fn no_match_notice(query: &str) -> String {
    format!(
        "Nenhum registro encontrado para '{}' em nenhuma das bases.",
        query
    )
}

/// Matches from one sheet, with all-empty columns already dropped.
#[derive(Debug, Clone, Serialize)]
pub struct SheetMatches {
    pub sheet: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Empty query: nothing was searched, the UI shows a prompt.
    Idle { prompt: &'static str },
    NoMatches { query: String, notice: String },
    Matches { query: String, sheets: Vec<SheetMatches> },
}

/// Case-insensitive substring search over every table's company column,
/// each table independently. Tables with no match are omitted.
#[tracing::instrument(level = "info", skip(tables))]
pub fn search(tables: &[SheetTable], query: &str) -> SearchOutcome {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::Idle {
            prompt: IDLE_PROMPT,
        };
    }
    let needle = query.to_lowercase();

    let mut sheets = Vec::new();
    for table in tables {
        let Some(col) = table.headers.iter().position(|h| h == SEARCH_COL) else {
            debug!(sheet = %table.name, "no company column; sheet skipped");
            continue;
        };

        let matched: Vec<&Vec<Option<String>>> = table
            .rows
            .iter()
            .filter(|row| {
                row.get(col)
                    .and_then(|cell| cell.as_deref())
                    .is_some_and(|cell| cell.to_lowercase().contains(&needle))
            })
            .collect();
        if matched.is_empty() {
            continue;
        }

        // display cleanup: drop columns empty across every matched row
        let keep: Vec<usize> = (0..table.headers.len())
            .filter(|&i| {
                matched
                    .iter()
                    .any(|row| row.get(i).is_some_and(|cell| cell.is_some()))
            })
            .collect();

        sheets.push(SheetMatches {
            sheet: table.name.clone(),
            columns: keep.iter().map(|&i| table.headers[i].clone()).collect(),
            rows: matched
                .iter()
                .map(|row| keep.iter().map(|&i| row.get(i).cloned().flatten()).collect())
                .collect(),
        });
    }

    if sheets.is_empty() {
        SearchOutcome::NoMatches {
            notice: no_match_notice(query),
            query: query.to_string(),
        }
    } else {
        SearchOutcome::Matches {
            query: query.to_string(),
            sheets,
        }
    }
}
