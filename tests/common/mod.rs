use trade_review::config::Config;
use trade_review::review::TradeReviewer;
use trade_review::store::{MemoryStore, Snapshot};

/// Snapshot as an exporter would write it: intraday bars as UTC instants,
/// 30-minute and daily bars as local date-times, fills as bare times.
pub const SNAPSHOT_JSON: &str = r#"{
  "trades": [
    {"trade_id": 6175, "symbol": "NVDA", "date": "2024-01-10", "setup": "ORB"},
    {"trade_id": 6180, "symbol": "AAPL", "date": "2024-01-12", "rating": 2},
    {"trade_id": 7000, "symbol": "AMD", "date": "2024-01-19"}
  ],
  "bars": [
    {"trade_id": 6175, "timeframe": "1d", "timestamp": "2024-01-08T00:00:00", "open": 480.0, "high": 486.0, "low": 476.0, "close": 484.0, "volume": 40000},
    {"trade_id": 6175, "timeframe": "1d", "timestamp": "2024-01-09T00:00:00", "open": 484.0, "high": 495.0, "low": 482.0, "close": 492.0, "volume": 52000},
    {"trade_id": 6175, "timeframe": "1d", "timestamp": "2024-01-10T00:00:00", "open": 495.0, "high": 510.0, "low": 493.0, "close": 506.0, "volume": 90000},

    {"trade_id": 6175, "timeframe": "30m", "timestamp": "2024-01-10T09:30:00", "open": 495.0, "high": 502.0, "low": 494.0, "close": 501.0, "volume": 9000},
    {"trade_id": 6175, "timeframe": "30m", "timestamp": "2024-01-10T10:00:00", "open": 501.0, "high": 506.0, "low": 500.0, "close": 505.0, "volume": 7000},
    {"trade_id": 6175, "timeframe": "30m", "timestamp": "2024-01-10T10:30:00", "open": 505.0, "high": 507.0, "low": 503.0, "close": 504.0, "volume": 6000},

    {"trade_id": 6175, "timeframe": "intraday", "timestamp": "2024-01-10T14:30:00Z", "open": 495.0, "high": 499.0, "low": 494.0, "close": 498.0, "volume": 3000},
    {"trade_id": 6175, "timeframe": "intraday", "timestamp": "2024-01-10T14:32:00Z", "open": 498.0, "high": 501.0, "low": 497.0, "close": 500.0, "volume": 2500},
    {"trade_id": 6175, "timeframe": "intraday", "timestamp": "2024-01-10T14:34:00Z", "open": 500.0, "high": 502.0, "low": 499.0, "close": 501.5, "volume": 2000},
    {"trade_id": 6175, "timeframe": "intraday", "timestamp": null, "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0, "volume": 1},

    {"trade_id": 6180, "timeframe": "1d", "timestamp": "2024-01-12T00:00:00", "open": 185.0, "high": 187.0, "low": 184.0, "close": 186.0, "volume": 70000},

    {"trade_id": 7000, "timeframe": "1d", "timestamp": "2024-01-15T00:00:00", "open": 150.0, "high": 151.0, "low": 149.0, "close": 150.0, "volume": 100},
    {"trade_id": 7000, "timeframe": "1d", "timestamp": "2024-01-16T00:00:00", "open": 150.0, "high": 151.0, "low": 149.0, "close": 150.0, "volume": 100},
    {"trade_id": 7000, "timeframe": "1d", "timestamp": "2024-01-17T00:00:00", "open": 150.0, "high": 151.0, "low": 149.0, "close": 150.0, "volume": 100},
    {"trade_id": 7000, "timeframe": "1d", "timestamp": "2024-01-18T00:00:00", "open": 150.0, "high": 151.0, "low": 149.0, "close": 150.0, "volume": 100},
    {"trade_id": 7000, "timeframe": "1d", "timestamp": "2024-01-19T00:00:00", "open": 150.0, "high": 151.0, "low": 149.0, "close": 150.0, "volume": 600},
    {"trade_id": 7000, "timeframe": "1d", "timestamp": "2024-01-22T00:00:00", "open": 150.0, "high": 158.0, "low": 149.0, "close": 157.0, "volume": 100}
  ],
  "executions": [
    {"symbol": "NVDA", "date": "2024-01-10", "time": "10:05:00", "side": "SELLTOCLOSE", "price": 505.0, "quantity": 50},
    {"symbol": "NVDA", "date": "2024-01-10", "time": "09:31:50", "side": "BUYTOOPEN", "price": 500.5, "quantity": 50},
    {"symbol": "NVDA", "date": "2024-01-11", "time": "09:40:00", "side": "BUYTOOPEN", "price": 510.0, "quantity": 10},
    {"symbol": "AAPL", "date": "2024-01-12", "time": "11:00:00", "side": "SHORT", "price": 185.5, "quantity": 20}
  ],
  "daily_stats": [
    {"trade_id": 6175, "symbol": "NVDA", "date": "2024-01-10", "relative_volume": 2.5},
    {"trade_id": 6180, "symbol": "AAPL", "date": "2024-01-12", "relative_volume": 1.4}
  ]
}"#;

pub fn snapshot() -> Snapshot {
    serde_json::from_str(SNAPSHOT_JSON).unwrap()
}

pub fn test_config() -> Config {
    Config {
        default_trade_id: 6175,
        table_page_size: 15,
        market_tz: chrono_tz::America::New_York,
        rvol_period: 5,
        atr_period: 14,
        snapshot_path: String::new(),
        log_level: "ERROR".to_string(),
    }
}

pub fn reviewer() -> TradeReviewer {
    let store = MemoryStore::from_snapshot(snapshot(), chrono_tz::America::New_York);
    TradeReviewer::new(test_config().shared(), Box::new(store))
}
