use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Stamp;

/// One OHLCV bar. The timestamp may be missing when the upstream row could
/// not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: Option<Stamp>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn ohlc4(&self) -> f64 {
        (self.open + self.high + self.low + self.close) / 4.0
    }

    pub fn true_range(&self) -> f64 {
        (self.high - self.low)
            .max((self.high - self.close).abs())
            .max((self.low - self.close).abs())
    }
}

/// Ordered bars of one timeframe for one trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BarSeries {
    bars: Vec<Bar>,
}

impl BarSeries {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bar> {
        self.bars.iter()
    }

    pub fn as_slice(&self) -> &[Bar] {
        &self.bars
    }

    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Index of the bar dated `date`, or else of the last bar dated before it.
    /// Bars without a calendar date never match.
    pub fn index_on_or_before(&self, date: NaiveDate) -> Option<usize> {
        let dated = |b: &Bar| b.timestamp.and_then(|t| t.date());
        self.bars
            .iter()
            .rposition(|b| dated(b) == Some(date))
            .or_else(|| self.bars.iter().rposition(|b| dated(b).is_some_and(|d| d < date)))
    }

    /// Sort ascending by timestamp, bars without one last.
    pub fn sort(&mut self) {
        self.bars
            .sort_by_key(|b| (b.timestamp.is_none(), b.timestamp.map(|s| s.sort_key())));
    }

    /// Drop bars without a timestamp, returning how many were removed.
    pub fn retain_timed(&mut self) -> usize {
        let before = self.bars.len();
        self.bars.retain(|b| b.timestamp.is_some());
        before - self.bars.len()
    }
}

impl std::ops::Index<usize> for BarSeries {
    type Output = Bar;
    fn index(&self, index: usize) -> &Self::Output {
        &self.bars[index]
    }
}

impl FromIterator<Bar> for BarSeries {
    fn from_iter<I: IntoIterator<Item = Bar>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for BarSeries {
    type Item = Bar;
    type IntoIter = std::vec::IntoIter<Bar>;
    fn into_iter(self) -> Self::IntoIter {
        self.bars.into_iter()
    }
}

impl<'a> IntoIterator for &'a BarSeries {
    type Item = &'a Bar;
    type IntoIter = std::slice::Iter<'a, Bar>;
    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
