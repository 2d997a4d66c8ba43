use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::core::indicators::{DEFAULT_ATR_PERIOD, DEFAULT_RVOL_PERIOD};

pub type SharedConfig = Arc<RwLock<Config>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Review
    pub default_trade_id: i64,
    pub table_page_size: usize,

    // Market clock used to localize UTC bar instants
    pub market_tz: Tz,

    // Indicators
    pub rvol_period: usize,
    pub atr_period: usize,

    // Data
    pub snapshot_path: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            default_trade_id: env("DEFAULT_TRADE_ID", "6175").parse().unwrap_or(6175),
            table_page_size: env("TABLE_PAGE_SIZE", "15").parse().unwrap_or(15),
            market_tz: env("MARKET_TZ", "America/New_York")
                .parse()
                .unwrap_or(chrono_tz::America::New_York),
            rvol_period: env("RVOL_PERIOD", "5")
                .parse()
                .unwrap_or(DEFAULT_RVOL_PERIOD),
            atr_period: env("ATR_PERIOD", "14")
                .parse()
                .unwrap_or(DEFAULT_ATR_PERIOD),
            snapshot_path: env("SNAPSHOT_PATH", "trade_snapshot.json"),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }

    pub fn shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }
}
