use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::config::Config;
use crate::models::{Bar, Execution, Setup, Side, Stamp, Timeframe, TradeInfo};
use crate::store::snapshot::{BarRecord, DailyStat, RawStamp, Snapshot};

pub fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn flat_bar(timestamp: Option<Stamp>, price: f64) -> Bar {
    Bar {
        timestamp,
        open: price,
        high: price + 1.0,
        low: price - 1.0,
        close: price,
        volume: 100.0,
    }
}

/// Bar stamped with a bare time-of-day.
pub fn bar_at(t: NaiveTime) -> Bar {
    flat_bar(Some(Stamp::Time(t)), 100.0)
}

/// Bar stamped with a full local date-time.
pub fn bar_on(date: NaiveDate, t: NaiveTime) -> Bar {
    flat_bar(Some(Stamp::DateTime(date.and_time(t))), 100.0)
}

/// NVDA fill on 2024-01-10 at the given time.
pub fn execution_at(t: NaiveTime, side: Side, price: f64) -> Execution {
    Execution {
        symbol: "NVDA".to_string(),
        date: ymd(2024, 1, 10),
        time: Some(Stamp::Time(t)),
        side,
        price,
        quantity: 100.0,
    }
}

fn record(trade_id: i64, tf: Timeframe, timestamp: Option<RawStamp>, price: f64, volume: f64) -> BarRecord {
    BarRecord {
        trade_id,
        timeframe: tf,
        timestamp,
        open: price,
        high: price + 2.0,
        low: price - 2.0,
        close: price + 1.0,
        volume,
    }
}

/// Trade 6175 (NVDA, 2024-01-10) with daily, 30-minute and intraday bars and
/// two fills, plus two other trades for the table.
pub fn sample_snapshot() -> Snapshot {
    let day = ymd(2024, 1, 10);
    let local = |d: NaiveDate, t: NaiveTime| Some(RawStamp::Local(Stamp::DateTime(d.and_time(t))));
    // 14:30Z is 09:30 in New York in January
    let utc = |h: u32, m: u32| Some(RawStamp::Utc(Utc.with_ymd_and_hms(2024, 1, 10, h, m, 0).unwrap()));

    let mut bars = vec![
        record(6175, Timeframe::Daily, local(ymd(2024, 1, 8), hms(0, 0, 0)), 480.0, 40_000.0),
        record(6175, Timeframe::Daily, local(ymd(2024, 1, 9), hms(0, 0, 0)), 490.0, 50_000.0),
        record(6175, Timeframe::Daily, local(day, hms(0, 0, 0)), 500.0, 90_000.0),
        record(6175, Timeframe::ThirtyMinute, local(day, hms(10, 30, 0)), 504.0, 3_000.0),
        record(6175, Timeframe::ThirtyMinute, local(day, hms(9, 30, 0)), 500.0, 5_000.0),
        record(6175, Timeframe::ThirtyMinute, local(day, hms(10, 0, 0)), 502.0, 4_000.0),
        record(6175, Timeframe::Intraday, utc(14, 34), 503.0, 700.0),
        record(6175, Timeframe::Intraday, utc(14, 30), 500.0, 1_000.0),
        record(6175, Timeframe::Intraday, None, 501.0, 10.0),
        record(6175, Timeframe::Intraday, utc(14, 32), 501.0, 800.0),
    ];
    bars.push(record(6180, Timeframe::Daily, local(ymd(2024, 1, 12), hms(0, 0, 0)), 185.0, 70_000.0));

    let fill = |symbol: &str, t: NaiveTime, side: Side, price: f64| Execution {
        symbol: symbol.to_string(),
        date: day,
        time: Some(Stamp::Time(t)),
        side,
        price,
        quantity: 50.0,
    };

    Snapshot {
        trades: vec![
            TradeInfo {
                trade_id: 6175,
                symbol: "NVDA".to_string(),
                date: day,
                setup: Some(Setup::Orb),
                rating: None,
            },
            TradeInfo {
                trade_id: 6180,
                symbol: "AAPL".to_string(),
                date: ymd(2024, 1, 12),
                setup: None,
                rating: None,
            },
            TradeInfo {
                trade_id: 6200,
                symbol: "TSLA".to_string(),
                date: ymd(2024, 1, 15),
                setup: None,
                rating: None,
            },
        ],
        bars,
        executions: vec![
            fill("NVDA", hms(10, 5, 0), Side::SellToClose, 505.0),
            fill("NVDA", hms(9, 31, 50), Side::BuyToOpen, 500.5),
            fill("AAPL", hms(9, 45, 0), Side::BuyToOpen, 185.0),
        ],
        daily_stats: vec![
            DailyStat {
                trade_id: 6175,
                symbol: "NVDA".to_string(),
                date: ymd(2024, 1, 9),
                relative_volume: 1.1,
            },
            DailyStat {
                trade_id: 6175,
                symbol: "NVDA".to_string(),
                date: day,
                relative_volume: 2.5,
            },
            DailyStat {
                trade_id: 6180,
                symbol: "AAPL".to_string(),
                date: ymd(2024, 1, 12),
                relative_volume: 1.4,
            },
            DailyStat {
                trade_id: 6200,
                symbol: "TSLA".to_string(),
                date: ymd(2024, 1, 15),
                relative_volume: 0.0,
            },
        ],
    }
}

/// A Config suitable for testing.
pub fn default_test_config() -> Config {
    Config {
        default_trade_id: 6175,
        table_page_size: 15,
        market_tz: chrono_tz::America::New_York,
        rvol_period: 5,
        atr_period: 14,
        snapshot_path: std::env::temp_dir()
            .join("trade_review_test.json")
            .to_string_lossy()
            .to_string(),
        log_level: "ERROR".to_string(),
    }
}
