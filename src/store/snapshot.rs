use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::models::{Bar, Execution, Stamp, Timeframe, TradeInfo};

/// A bar timestamp as exported: either a UTC instant or a market-local stamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawStamp {
    Utc(DateTime<Utc>),
    Local(Stamp),
}

impl RawStamp {
    pub fn localize(self, tz: Tz) -> Stamp {
        match self {
            RawStamp::Utc(instant) => Stamp::from_utc(instant, tz),
            RawStamp::Local(stamp) => stamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarRecord {
    pub trade_id: i64,
    pub timeframe: Timeframe,
    #[serde(default)]
    pub timestamp: Option<RawStamp>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl BarRecord {
    pub fn into_bar(self, tz: Tz) -> Bar {
        Bar {
            timestamp: self.timestamp.map(|ts| ts.localize(tz)),
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
        }
    }
}

/// Daily statistics row keyed by trade and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStat {
    pub trade_id: i64,
    pub symbol: String,
    pub date: NaiveDate,
    pub relative_volume: f64,
}

/// Everything a review needs, as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub trades: Vec<TradeInfo>,
    #[serde(default)]
    pub bars: Vec<BarRecord>,
    #[serde(default)]
    pub executions: Vec<Execution>,
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
}
