use anyhow::Result;
use brokerdash::{
    dashboard::{self, filter::FilterSelection},
    roster::load_roster,
};
use chrono::Local;
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load the roster ──────────────────────────────────────────
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "stratseg - clientes.csv".to_string());
    let roster = load_roster(&path)?;

    // ─── 3) render one session-default pass ──────────────────────────
    let today = Local::now().date_naive();
    let selection = FilterSelection::default_for(&roster, today);
    let view = dashboard::render(&roster, &selection);

    // ─── 4) emit the view model for the presentation layer ───────────
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
