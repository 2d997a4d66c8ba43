pub mod bar;
pub mod execution;
pub mod stamp;
pub mod timeframe;
pub mod trade;

pub use bar::{Bar, BarSeries};
pub use execution::{Execution, Side};
pub use stamp::Stamp;
pub use timeframe::Timeframe;
pub use trade::{Rating, Setup, TradeInfo, TradeSummary};
