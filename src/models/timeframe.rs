use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Stamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1d")]
    Daily,
    #[serde(rename = "30m")]
    ThirtyMinute,
    #[serde(rename = "intraday")]
    Intraday,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "1d",
            Timeframe::ThirtyMinute => "30m",
            Timeframe::Intraday => "intraday",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Timeframe> {
        match s {
            "1d" | "daily" => Some(Timeframe::Daily),
            "30m" | "30min" => Some(Timeframe::ThirtyMinute),
            "intraday" => Some(Timeframe::Intraday),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Timeframe::Daily => "Daily",
            Timeframe::ThirtyMinute => "30-Minutes",
            Timeframe::Intraday => "Intraday Price & Indicators",
        }
    }

    pub fn empty_title(&self) -> &'static str {
        match self {
            Timeframe::Daily => "No daily data available",
            Timeframe::ThirtyMinute => "No 30-minute data available",
            Timeframe::Intraday => "No intraday data available",
        }
    }

    /// Category label of a stamp on this timeframe's x-axis.
    ///
    /// Daily bars collapse to their date and 30-minute bars drop seconds.
    /// Intraday bars use the stamp text as-is, so an aligned execution yields
    /// exactly the label of the bar it was snapped to.
    pub fn category(&self, stamp: &Stamp) -> String {
        match (self, stamp) {
            (Timeframe::Daily, Stamp::DateTime(dt)) => dt.format("%Y-%m-%d").to_string(),
            (Timeframe::ThirtyMinute, Stamp::DateTime(dt)) => {
                dt.format("%Y-%m-%d %H:%M").to_string()
            }
            (Timeframe::ThirtyMinute, Stamp::Time(t)) => t.format("%H:%M").to_string(),
            _ => stamp.to_string(),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
