use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::SharedConfig;
use crate::core::alignment::{align_to_fixed_interval, align_to_intraday};
use crate::core::indicators::{atr, ema, relative_atr, relative_volume, vwap};
use crate::error::ReviewError;
use crate::models::{BarSeries, Execution, Rating, Setup, Timeframe, TradeInfo};
use crate::review::panel::ChartPanel;
use crate::review::table::TradeTable;
use crate::store::TradeStore;

const INTRADAY_EMA_PERIOD: usize = 9;
const THIRTY_MINUTE_EMA_PERIOD: usize = 65;

/// Everything shown for one trade.
#[derive(Debug, Clone, Serialize)]
pub struct TradeReview {
    pub info: TradeInfo,
    pub header: String,
    pub relative_volume: Option<f64>,
    /// Fills as recorded, before any alignment.
    pub executions: Vec<Execution>,
    pub daily: ChartPanel,
    pub thirty_minute: ChartPanel,
    pub intraday: ChartPanel,
    pub table: TradeTable,
}

impl TradeReview {
    pub fn panels(&self) -> [&ChartPanel; 3] {
        [&self.daily, &self.thirty_minute, &self.intraday]
    }
}

pub fn header_text(info: &TradeInfo, rvol: Option<f64>) -> String {
    let setup = info
        .setup
        .map_or_else(|| "No Setup".to_string(), |s| s.to_string());
    let rvol = rvol.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v));
    let rating = info
        .rating
        .map_or_else(|| "N/A".to_string(), |r| r.to_string());
    format!(
        "TradeId: {} | {} | Date: {} | Setup: {} | RVOL: {} | Rating: {}",
        info.trade_id,
        info.symbol,
        info.date.format("%Y-%m-%d"),
        setup,
        rvol,
        rating
    )
}

pub struct TradeReviewer {
    config: SharedConfig,
    store: Box<dyn TradeStore>,
}

impl TradeReviewer {
    pub fn new(config: SharedConfig, store: Box<dyn TradeStore>) -> Self {
        Self { config, store }
    }

    /// Fetch a trade with its bars and fills and build the three chart panels.
    pub async fn load(&self, trade_id: Option<i64>) -> Result<TradeReview, ReviewError> {
        let trade_id = trade_id.ok_or(ReviewError::MissingTradeId)?;
        let (page_size, rvol_period, atr_period) = {
            let cfg = self.config.read().await;
            (cfg.table_page_size, cfg.rvol_period, cfg.atr_period)
        };

        let info = self
            .store
            .trade_info(trade_id)
            .await
            .map_err(ReviewError::from_store)?
            .ok_or(ReviewError::TradeNotFound(trade_id))?;

        let daily = self.bars(trade_id, Timeframe::Daily).await?;
        let thirty_minute = self.bars(trade_id, Timeframe::ThirtyMinute).await?;
        let intraday = self.bars(trade_id, Timeframe::Intraday).await?;

        let executions = self
            .store
            .executions(&info.symbol, info.date)
            .await
            .map_err(ReviewError::from_store)?;

        let stored_rvol = self
            .store
            .relative_volume(trade_id)
            .await
            .map_err(ReviewError::from_store)?;
        let trade_day = daily.index_on_or_before(info.date);
        let rvol = stored_rvol.or_else(|| {
            let computed = trade_day.and_then(|i| {
                relative_volume(&daily.volumes(), rvol_period)
                    .get(i)
                    .copied()
                    .flatten()
            });
            debug!("Trade {}: no stored RVOL, computed {:?}", trade_id, computed);
            computed
        });

        let trades = self
            .store
            .trades_with_rvol()
            .await
            .map_err(ReviewError::from_store)?;

        info!(
            "Trade {} ({} {}): {} daily, {} 30m, {} intraday bars, {} fills",
            trade_id,
            info.symbol,
            info.date,
            daily.len(),
            thirty_minute.len(),
            intraday.len(),
            executions.len()
        );

        let daily_atr = trade_day.and_then(|i| atr(daily.as_slice(), atr_period).get(i).copied());

        let intraday_aligned = align_to_intraday(&executions, intraday.as_slice());
        let thirty_aligned = align_to_fixed_interval(&executions, thirty_minute.as_slice());

        let intraday_panel = Self::intraday_panel(trade_id, intraday, &intraday_aligned, daily_atr);
        let thirty_closes = thirty_minute.closes();
        let thirty_panel = ChartPanel::build(Timeframe::ThirtyMinute, thirty_minute, &thirty_aligned)
            .with_overlay("EMA65", ema(&thirty_closes, THIRTY_MINUTE_EMA_PERIOD));
        let daily_panel = ChartPanel::build(Timeframe::Daily, daily, &executions);

        for panel in [&daily_panel, &thirty_panel, &intraday_panel] {
            let orphans = panel.orphan_markers().len();
            if orphans > 0 {
                warn!(
                    "Trade {} {}: {} markers off the bar axis",
                    trade_id, panel.timeframe, orphans
                );
            }
        }

        Ok(TradeReview {
            header: header_text(&info, rvol),
            relative_volume: rvol,
            info,
            executions,
            daily: daily_panel,
            thirty_minute: thirty_panel,
            intraday: intraday_panel,
            table: TradeTable::new(trades, page_size),
        })
    }

    /// Write the setup and/or rating for a trade and describe what was saved.
    pub async fn update_trade(
        &self,
        trade_id: Option<i64>,
        setup: Option<Setup>,
        rating: Option<Rating>,
    ) -> Result<String, ReviewError> {
        let trade_id = trade_id.ok_or(ReviewError::MissingTradeId)?;
        let mut messages = Vec::new();

        if let Some(setup) = setup {
            self.store
                .update_setup(trade_id, setup)
                .await
                .map_err(ReviewError::from_store)?;
            messages.push(format!("Setup='{}'", setup));
        }
        if let Some(rating) = rating {
            self.store
                .update_rating(trade_id, rating)
                .await
                .map_err(ReviewError::from_store)?;
            messages.push(format!("Rating={}", rating));
        }

        if messages.is_empty() {
            return Ok("Nothing to update.".to_string());
        }

        let summary = format!("Saved for Trade {}: {}", trade_id, messages.join("; "));
        info!("{}", summary);
        Ok(summary)
    }

    async fn bars(&self, trade_id: i64, tf: Timeframe) -> Result<BarSeries, ReviewError> {
        self.store
            .bars(trade_id, tf)
            .await
            .map_err(ReviewError::from_store)
    }

    fn intraday_panel(
        trade_id: i64,
        bars: BarSeries,
        aligned: &[Execution],
        daily_atr: Option<f64>,
    ) -> ChartPanel {
        let vwap_line = vwap(bars.as_slice());
        let closes = bars.closes();
        let ema_line = ema(&closes, INTRADAY_EMA_PERIOD);

        let relatr = daily_atr.and_then(|a| match relative_atr(&vwap_line, &closes, a) {
            Ok(values) => Some(values),
            Err(e) => {
                warn!("Trade {}: skipping Relatr: {}", trade_id, e);
                None
            }
        });

        let mut panel = ChartPanel::build(Timeframe::Intraday, bars, aligned)
            .with_overlay("VWAP", vwap_line)
            .with_overlay("EMA9", ema_line);
        if let Some(values) = relatr {
            panel = panel.with_overlay("Relatr", values);
        }
        panel
    }
}
