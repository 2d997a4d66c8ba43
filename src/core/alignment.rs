use crate::models::{Bar, Execution, Stamp};

/// Elapsed seconds of an optional stamp. A missing stamp stays missing.
pub fn elapsed_seconds(stamp: Option<&Stamp>) -> Option<u32> {
    stamp.map(Stamp::elapsed_seconds)
}

/// Absolute distance between two elapsed-second values. `None` when either
/// side is missing, and a `None` distance is never nearer than anything.
fn distance(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    Some(a?.abs_diff(b?))
}

/// Index of the bar closest to `target`. Ties resolve to the earliest bar in
/// scan order. Returns `None` when no pair has a defined distance.
pub fn nearest_bar(target: Option<u32>, bar_seconds: &[Option<u32>]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (idx, &secs) in bar_seconds.iter().enumerate() {
        let Some(d) = distance(target, secs) else {
            continue;
        };
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((idx, d));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Charts plot bars on a categorical x-axis, so a marker only lands on a tick
/// when its x value equals a bar timestamp exactly. Both sides are reduced to
/// elapsed seconds since midnight and each execution takes the `snap` of the
/// closest bar's timestamp.
fn align_with<F>(executions: &[Execution], bars: &[Bar], snap: F) -> Vec<Execution>
where
    F: Fn(&Stamp) -> Stamp,
{
    if executions.is_empty() || bars.is_empty() {
        return executions.to_vec();
    }

    let bar_seconds: Vec<Option<u32>> = bars
        .iter()
        .map(|b| elapsed_seconds(b.timestamp.as_ref()))
        .collect();

    executions
        .iter()
        .map(|exec| {
            let mut aligned = exec.clone();
            let matched = nearest_bar(elapsed_seconds(exec.time.as_ref()), &bar_seconds)
                .and_then(|idx| bars[idx].timestamp.as_ref());
            if let Some(ts) = matched {
                aligned.time = Some(snap(ts));
            }
            aligned
        })
        .collect()
}

/// Align executions to an intraday series. Each execution's `time` becomes
/// the matched bar's full timestamp: a date-time bar gives a date-time and a
/// bare-time bar gives a bare time.
///
/// Executions without a time, or with no timed bar to match, come back
/// unchanged. Empty inputs return a copy of `executions`.
pub fn align_to_intraday(executions: &[Execution], bars: &[Bar]) -> Vec<Execution> {
    align_with(executions, bars, |ts| *ts)
}

/// Align executions to a fixed-interval series (e.g. 30-minute bars).
///
/// Only the matched bar's time-of-day is adopted. The execution keeps its own
/// `date` even when the matched bar sits on another day.
pub fn align_to_fixed_interval(executions: &[Execution], bars: &[Bar]) -> Vec<Execution> {
    align_with(executions, bars, |ts| Stamp::Time(ts.time_of_day()))
}
