use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use trade_review::config::Config;
use trade_review::review::TradeReviewer;
use trade_review::store::MemoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let store = MemoryStore::load(&cfg.snapshot_path, cfg.market_tz)?;
    let trade_id = cfg.default_trade_id;
    let reviewer = TradeReviewer::new(cfg.shared(), Box::new(store));

    let review = reviewer.load(Some(trade_id)).await?;

    info!("{}", "=".repeat(60));
    info!("{}", review.header);
    for panel in review.panels() {
        info!(
            "{}: {} bars, {} markers, overlays [{}]",
            panel.title,
            panel.bars.len(),
            panel.markers.len(),
            panel
                .overlays
                .iter()
                .map(|o| o.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    info!(
        "Trades table: {} rows over {} pages",
        review.table.len(),
        review.table.page_count()
    );
    info!("{}", "=".repeat(60));

    Ok(())
}
