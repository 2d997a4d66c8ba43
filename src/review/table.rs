use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::models::TradeSummary;

pub const DEFAULT_PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    TradeId,
    Symbol,
    Date,
    Setup,
    Rating,
    RelativeVolume,
}

impl Column {
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::TradeId => "TradeId",
            Column::Symbol => "Symbol",
            Column::Date => "Date",
            Column::Setup => "Setup",
            Column::Rating => "Rating",
            Column::RelativeVolume => "RelativeVolume",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Column> {
        match s {
            "TradeId" | "trade_id" => Some(Column::TradeId),
            "Symbol" | "symbol" => Some(Column::Symbol),
            "Date" | "date" => Some(Column::Date),
            "Setup" | "setup" => Some(Column::Setup),
            "Rating" | "rating" => Some(Column::Rating),
            "RelativeVolume" | "relative_volume" | "rvol" => Some(Column::RelativeVolume),
            _ => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Compare optional values with missing ones last regardless of order.
fn cmp_missing_last<T: PartialOrd>(a: Option<T>, b: Option<T>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Paged, sortable view over trade summaries.
#[derive(Debug, Clone, Serialize)]
pub struct TradeTable {
    rows: Vec<TradeSummary>,
    page_size: usize,
    current_page: usize,
    sort: Option<(Column, SortOrder)>,
}

impl TradeTable {
    pub fn new(rows: Vec<TradeSummary>, page_size: usize) -> Self {
        Self {
            rows,
            page_size: page_size.max(1),
            current_page: 0,
            sort: None,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TradeSummary] {
        &self.rows
    }

    pub fn sorted_by(&self) -> Option<(Column, SortOrder)> {
        self.sort
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Jump to page `n` (zero-based), clamped to the last page.
    pub fn set_page(&mut self, n: usize) {
        self.current_page = n.min(self.page_count() - 1);
    }

    /// Rows on the current page.
    pub fn page(&self) -> &[TradeSummary] {
        let start = (self.current_page * self.page_size).min(self.rows.len());
        let end = (start + self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    /// Stable sort on one column. Rows missing the value go last.
    pub fn sort_by(&mut self, column: Column, order: SortOrder) {
        self.rows.sort_by(|a, b| {
            let (ai, bi) = (&a.info, &b.info);
            match column {
                Column::TradeId => cmp_missing_last(Some(ai.trade_id), Some(bi.trade_id), order),
                Column::Symbol => cmp_missing_last(Some(&ai.symbol), Some(&bi.symbol), order),
                Column::Date => cmp_missing_last(Some(ai.date), Some(bi.date), order),
                Column::Setup => cmp_missing_last(
                    ai.setup.map(|s| s.label()),
                    bi.setup.map(|s| s.label()),
                    order,
                ),
                Column::Rating => cmp_missing_last(ai.rating, bi.rating, order),
                Column::RelativeVolume => {
                    cmp_missing_last(Some(a.relative_volume), Some(b.relative_volume), order)
                }
            }
        });
        self.sort = Some((column, order));
        self.current_page = 0;
    }

    /// Trade id behind a clicked cell on the current page. Only cells in the
    /// `TradeId` column select a trade.
    pub fn trade_id_at(&self, row: usize, column: &str) -> Option<i64> {
        if Column::from_str_loose(column) != Some(Column::TradeId) {
            return None;
        }
        self.page().get(row).map(|r| r.info.trade_id)
    }
}
