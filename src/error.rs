use thiserror::Error;

/// Error type for trade review operations.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("No Trade ID provided")]
    MissingTradeId,

    #[error("Trade {0} not found")]
    TradeNotFound(i64),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(i64),

    #[error("Unknown setup: {0}")]
    UnknownSetup(String),

    #[error("Invalid ATR value {0}: cannot divide by zero")]
    InvalidAtr(f64),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ReviewError {
    /// Recover a review error raised inside a store, wrapping anything else.
    pub fn from_store(err: anyhow::Error) -> Self {
        match err.downcast::<ReviewError>() {
            Ok(review) => review,
            Err(other) => ReviewError::Store(other),
        }
    }
}
