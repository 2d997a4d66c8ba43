use serde::Serialize;

use crate::models::{BarSeries, Execution, Side, Timeframe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub symbol: &'static str,
}

impl MarkerStyle {
    pub fn for_side(side: Side) -> Self {
        if side.is_buy() {
            MarkerStyle {
                color: "blue",
                symbol: "triangle-up",
            }
        } else if side.is_sell() {
            MarkerStyle {
                color: "red",
                symbol: "triangle-down",
            }
        } else {
            MarkerStyle {
                color: "black",
                symbol: "circle",
            }
        }
    }
}

/// One execution placed on a panel's categorical x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionMarker {
    pub x: String,
    pub price: f64,
    pub side: Side,
    pub style: MarkerStyle,
}

/// A named line drawn over the bars, one value per bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub name: String,
    pub values: Vec<f64>,
}

/// Render-ready data for one chart panel.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPanel {
    pub timeframe: Timeframe,
    pub title: String,
    pub bars: BarSeries,
    /// x-axis category for each bar, `None` for an untimed bar.
    pub categories: Vec<Option<String>>,
    pub overlays: Vec<Overlay>,
    pub markers: Vec<ExecutionMarker>,
}

impl ChartPanel {
    /// Build a panel from bars and executions already aligned for `tf`.
    ///
    /// Daily markers sit on the fill's date, 30-minute markers on the fill's
    /// date joined with its aligned time, and intraday markers on the aligned
    /// timestamp itself. 30-minute bars stamped with bare times get bare-time
    /// markers. Executions without a usable time get no marker.
    pub fn build(tf: Timeframe, bars: BarSeries, executions: &[Execution]) -> Self {
        if bars.is_empty() {
            return Self::empty(tf);
        }
        let dated_bars = bars
            .iter()
            .find_map(|b| b.timestamp)
            .map_or(true, |ts| ts.date().is_some());

        let categories = bars
            .iter()
            .map(|b| b.timestamp.map(|ts| tf.category(&ts)))
            .collect();

        let markers = executions
            .iter()
            .filter_map(|exec| {
                let x = match tf {
                    Timeframe::Daily => Some(exec.date.format("%Y-%m-%d").to_string()),
                    Timeframe::ThirtyMinute if dated_bars => exec.moment().map(|m| tf.category(&m)),
                    Timeframe::ThirtyMinute => exec.time.map(|t| tf.category(&t)),
                    Timeframe::Intraday => exec.time.map(|t| tf.category(&t)),
                }?;
                Some(ExecutionMarker {
                    x,
                    price: exec.price,
                    side: exec.side,
                    style: MarkerStyle::for_side(exec.side),
                })
            })
            .collect();

        Self {
            timeframe: tf,
            title: tf.title().to_string(),
            bars,
            categories,
            overlays: Vec::new(),
            markers,
        }
    }

    pub fn empty(tf: Timeframe) -> Self {
        Self {
            timeframe: tf,
            title: tf.empty_title().to_string(),
            bars: BarSeries::default(),
            categories: Vec::new(),
            overlays: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn with_overlay(mut self, name: &str, values: Vec<f64>) -> Self {
        if !self.is_empty() {
            self.overlays.push(Overlay {
                name: name.to_string(),
                values,
            });
        }
        self
    }

    pub fn overlay(&self, name: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.name == name)
    }

    /// Markers whose x value matches no bar category.
    pub fn orphan_markers(&self) -> Vec<&ExecutionMarker> {
        self.markers
            .iter()
            .filter(|m| !self.categories.iter().flatten().any(|c| *c == m.x))
            .collect()
    }
}
