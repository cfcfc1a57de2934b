//! Activity chart scaling.

use crate::cosmos::MonthlyReading;

/// Bar heights for one month, as percentages of the chart's tallest value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPair {
    pub month: &'static str,
    pub activity_pct: f64,
    pub energy_pct: f64,
}

/// Largest activity or energy value in the series; zero for an empty series.
pub fn max_value(series: &[MonthlyReading]) -> u8 {
    series
        .iter()
        .map(|r| r.activity.max(r.energy))
        .max()
        .unwrap_or(0)
}

/// Scale every bar against the series maximum.
pub fn scale_bars(series: &[MonthlyReading]) -> Vec<BarPair> {
    let max = max_value(series);
    if max == 0 {
        return Vec::new();
    }
    let max = f64::from(max);

    series
        .iter()
        .map(|r| BarPair {
            month: r.month,
            activity_pct: f64::from(r.activity) / max * 100.0,
            energy_pct: f64::from(r.energy) / max * 100.0,
        })
        .collect()
}
