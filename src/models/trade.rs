use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReviewError;

/// Setup classification a reviewer assigns to a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Setup {
    ExtremeReversal,
    NoSetup,
    Orb,
    SwingTradeExit,
    Reversal,
    ReversalShort,
    ParabolicShort,
    SwingTrade,
    VwapContinuation,
    Other,
}

impl Setup {
    pub const ALL: [Setup; 10] = [
        Setup::ExtremeReversal,
        Setup::NoSetup,
        Setup::Orb,
        Setup::SwingTradeExit,
        Setup::Reversal,
        Setup::ReversalShort,
        Setup::ParabolicShort,
        Setup::SwingTrade,
        Setup::VwapContinuation,
        Setup::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Setup::ExtremeReversal => "Extreme Reversal",
            Setup::NoSetup => "No setup",
            Setup::Orb => "ORB",
            Setup::SwingTradeExit => "Swing trade exit",
            Setup::Reversal => "Reversal",
            Setup::ReversalShort => "Reversal short",
            Setup::ParabolicShort => "Parabolic short",
            Setup::SwingTrade => "Swing trade",
            Setup::VwapContinuation => "VWAP continuation",
            Setup::Other => "Other",
        }
    }
}

impl FromStr for Setup {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Setup::ALL
            .into_iter()
            .find(|setup| setup.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReviewError::UnknownSetup(s.to_string()))
    }
}

impl TryFrom<String> for Setup {
    type Error = ReviewError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Setup> for String {
    fn from(setup: Setup) -> Self {
        setup.label().to_string()
    }
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reviewer's score for a trade, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ReviewError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(ReviewError::InvalidRating(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ReviewError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInfo {
    pub trade_id: i64,
    pub symbol: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub setup: Option<Setup>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// One row of the trades table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    #[serde(flatten)]
    pub info: TradeInfo,
    pub relative_volume: f64,
}
