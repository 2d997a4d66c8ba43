use crate::error::ReviewError;
use crate::models::Bar;

pub const DEFAULT_ATR_PERIOD: usize = 14;
pub const DEFAULT_RVOL_PERIOD: usize = 5;

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Cumulative VWAP over OHLC4, rounded to cents. Zero until volume trades.
pub fn vwap(bars: &[Bar]) -> Vec<f64> {
    let mut cum_volume = 0.0;
    let mut cum_pv = 0.0;
    bars.iter()
        .map(|b| {
            cum_volume += b.volume;
            cum_pv += b.ohlc4() * b.volume;
            if cum_volume != 0.0 {
                round2(cum_pv / cum_volume)
            } else {
                0.0
            }
        })
        .collect()
}

/// Non-adjusted exponential weighting, alpha = 2 / (period + 1), seeded with
/// the first value.
fn ewm(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period.max(1) as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<f64> = None;
    for &v in values {
        let next = match prev {
            Some(p) => alpha * v + (1.0 - alpha) * p,
            None => v,
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// EMA rounded to cents.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    ewm(values, period).into_iter().map(round2).collect()
}

/// Average true range, exponentially weighted.
pub fn atr(bars: &[Bar], period: usize) -> Vec<f64> {
    let tr: Vec<f64> = bars.iter().map(Bar::true_range).collect();
    ewm(&tr, period)
}

/// Volume relative to its trailing `period`-bar mean. `None` until the window
/// fills, or when the window saw no volume.
pub fn relative_volume(volumes: &[f64], period: usize) -> Vec<Option<f64>> {
    let period = period.max(1);
    let mut window_sum = 0.0;
    volumes
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            window_sum += v;
            if i >= period {
                window_sum -= volumes[i - period];
            }
            if i + 1 < period {
                return None;
            }
            let mean = window_sum / period as f64;
            (mean != 0.0).then(|| v / mean)
        })
        .collect()
}

/// Distance of VWAP above close in ATR units, rounded to cents.
pub fn relative_atr(vwap: &[f64], closes: &[f64], atr: f64) -> Result<Vec<f64>, ReviewError> {
    if atr == 0.0 || !atr.is_finite() {
        return Err(ReviewError::InvalidAtr(atr));
    }
    Ok(vwap
        .iter()
        .zip(closes)
        .map(|(v, c)| round2((v - c) / atr))
        .collect())
}
