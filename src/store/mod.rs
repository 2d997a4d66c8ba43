pub mod memory;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{BarSeries, Execution, Rating, Setup, Timeframe, TradeInfo, TradeSummary};

/// Source of bars, executions and trade metadata, and sink for review edits.
#[async_trait]
pub trait TradeStore: Send + Sync {
    /// Bars of one timeframe recorded for a trade, oldest first.
    async fn bars(&self, trade_id: i64, tf: Timeframe) -> Result<BarSeries>;
    async fn trade_info(&self, trade_id: i64) -> Result<Option<TradeInfo>>;
    /// Fills for a symbol on a day, ordered by time.
    async fn executions(&self, symbol: &str, date: NaiveDate) -> Result<Vec<Execution>>;
    /// Relative volume on the trade's own date.
    async fn relative_volume(&self, trade_id: i64) -> Result<Option<f64>>;
    /// Trades whose latest relative volume is positive, newest first.
    async fn trades_with_rvol(&self) -> Result<Vec<TradeSummary>>;
    async fn update_setup(&self, trade_id: i64, setup: Setup) -> Result<()>;
    async fn update_rating(&self, trade_id: i64, rating: Rating) -> Result<()>;
}
