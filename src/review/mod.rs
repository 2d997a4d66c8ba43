pub mod panel;
pub mod reviewer;
pub mod table;

pub use panel::{ChartPanel, ExecutionMarker, MarkerStyle, Overlay};
pub use reviewer::{header_text, TradeReview, TradeReviewer};
pub use table::{Column, SortOrder, TradeTable};
