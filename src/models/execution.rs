use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Stamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Side {
    BuyToOpen,
    BuyToClose,
    SellToClose,
    SellToOpen,
    Unknown,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::BuyToOpen => "BUYTOOPEN",
            Side::BuyToClose => "BUYTOCLOSE",
            Side::SellToClose => "SELLTOCLOSE",
            Side::SellToOpen => "SELLTOOPEN",
            Side::Unknown => "UNKNOWN",
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, Side::BuyToOpen | Side::BuyToClose)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, Side::SellToClose | Side::SellToOpen)
    }
}

impl From<String> for Side {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUYTOOPEN" => Side::BuyToOpen,
            "BUYTOCLOSE" => Side::BuyToClose,
            "SELLTOCLOSE" => Side::SellToClose,
            "SELLTOOPEN" => Side::SellToOpen,
            _ => Side::Unknown,
        }
    }
}

impl From<Side> for String {
    fn from(side: Side) -> Self {
        side.as_str().to_string()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single fill. `date` and `time` are the only fields alignment touches;
/// the rest is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub symbol: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<Stamp>,
    pub side: Side,
    pub price: f64,
    #[serde(default)]
    pub quantity: f64,
}

impl Execution {
    /// The fill's own date joined with its time-of-day.
    pub fn moment(&self) -> Option<Stamp> {
        self.time
            .map(|t| Stamp::DateTime(self.date.and_time(t.time_of_day())))
    }
}
