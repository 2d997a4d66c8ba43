use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use std::collections::HashMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::ReviewError;
use crate::models::{BarSeries, Execution, Rating, Setup, Timeframe, TradeInfo, TradeSummary};
use crate::store::snapshot::{DailyStat, Snapshot};
use crate::store::TradeStore;

#[derive(Default)]
struct Tables {
    trades: HashMap<i64, TradeInfo>,
    bars: HashMap<(i64, Timeframe), BarSeries>,
    executions: Vec<Execution>,
    daily_stats: Vec<DailyStat>,
}

/// A `TradeStore` held entirely in memory, loaded from a [`Snapshot`].
///
/// Bar timestamps are localized to `tz` on load so time-of-day comparisons
/// happen on the market clock. Bars whose timestamp is missing are dropped.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn from_snapshot(snapshot: Snapshot, tz: Tz) -> Self {
        let mut tables = Tables::default();

        for trade in snapshot.trades {
            tables.trades.insert(trade.trade_id, trade);
        }

        for record in snapshot.bars {
            let key = (record.trade_id, record.timeframe);
            tables
                .bars
                .entry(key)
                .or_default()
                .push(record.into_bar(tz));
        }
        for ((trade_id, tf), series) in tables.bars.iter_mut() {
            let dropped = series.retain_timed();
            if dropped > 0 {
                warn!("Trade {} {}: dropped {} bars without timestamp", trade_id, tf, dropped);
            }
            series.sort();
        }

        tables.executions = snapshot.executions;
        tables.daily_stats = snapshot.daily_stats;

        info!(
            "Loaded {} trades, {} bar series, {} executions",
            tables.trades.len(),
            tables.bars.len(),
            tables.executions.len()
        );

        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Read a JSON snapshot from disk.
    pub fn load(path: impl AsRef<Path>, tz: Tz) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading snapshot from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .with_context(|| format!("parsing snapshot {}", path.display()))?;
        Ok(Self::from_snapshot(snapshot, tz))
    }
}

#[async_trait]
impl TradeStore for MemoryStore {
    async fn bars(&self, trade_id: i64, tf: Timeframe) -> Result<BarSeries> {
        let tables = self.tables.read().await;
        let series = tables
            .bars
            .get(&(trade_id, tf))
            .cloned()
            .unwrap_or_default();
        debug!("Trade {} {}: {} bars", trade_id, tf, series.len());
        Ok(series)
    }

    async fn trade_info(&self, trade_id: i64) -> Result<Option<TradeInfo>> {
        Ok(self.tables.read().await.trades.get(&trade_id).cloned())
    }

    async fn executions(&self, symbol: &str, date: NaiveDate) -> Result<Vec<Execution>> {
        let tables = self.tables.read().await;
        let mut execs: Vec<Execution> = tables
            .executions
            .iter()
            .filter(|e| e.symbol == symbol && e.date == date)
            .cloned()
            .collect();
        execs.sort_by_key(|e| (e.time.is_none(), e.time.map(|t| t.time_of_day())));
        Ok(execs)
    }

    async fn relative_volume(&self, trade_id: i64) -> Result<Option<f64>> {
        let tables = self.tables.read().await;
        let Some(trade) = tables.trades.get(&trade_id) else {
            return Ok(None);
        };
        Ok(tables
            .daily_stats
            .iter()
            .find(|s| s.symbol == trade.symbol && s.date == trade.date)
            .map(|s| s.relative_volume))
    }

    async fn trades_with_rvol(&self) -> Result<Vec<TradeSummary>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<(NaiveDate, TradeSummary)> = tables
            .trades
            .values()
            .filter_map(|trade| {
                let latest = tables
                    .daily_stats
                    .iter()
                    .filter(|s| s.trade_id == trade.trade_id)
                    .max_by_key(|s| s.date)?;
                (latest.relative_volume > 0.0).then(|| {
                    (
                        latest.date,
                        TradeSummary {
                            info: trade.clone(),
                            relative_volume: latest.relative_volume,
                        },
                    )
                })
            })
            .collect();
        // Newest first; trade id breaks ties so output does not depend on map order.
        rows.sort_by(|(da, a), (db, b)| db.cmp(da).then(a.info.trade_id.cmp(&b.info.trade_id)));
        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }

    async fn update_setup(&self, trade_id: i64, setup: Setup) -> Result<()> {
        let mut tables = self.tables.write().await;
        let trade = tables
            .trades
            .get_mut(&trade_id)
            .ok_or(ReviewError::TradeNotFound(trade_id))?;
        trade.setup = Some(setup);
        debug!("Trade {}: setup = {}", trade_id, setup);
        Ok(())
    }

    async fn update_rating(&self, trade_id: i64, rating: Rating) -> Result<()> {
        let mut tables = self.tables.write().await;
        let trade = tables
            .trades
            .get_mut(&trade_id)
            .ok_or(ReviewError::TradeNotFound(trade_id))?;
        trade.rating = Some(rating);
        debug!("Trade {}: rating = {}", trade_id, rating);
        Ok(())
    }
}
