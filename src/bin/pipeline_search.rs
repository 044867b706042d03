use anyhow::{bail, Result};
use brokerdash::pipeline::{load_flat_csv, load_workbook, search::search};
use std::env;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let mut args = env::args().skip(1);
    let (Some(path), Some(query)) = (args.next(), args.next()) else {
        bail!("usage: pipeline_search <workbook.xlsx|table.csv> <query>");
    };

    let tables = if path.to_lowercase().ends_with(".csv") {
        let name = Path::new(&path)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "tabela".to_string());
        vec![load_flat_csv(&path, &name)?]
    } else {
        load_workbook(&path)?
    };
    info!(tables = tables.len(), %query, "searching");

    let outcome = search(&tables, &query);
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
