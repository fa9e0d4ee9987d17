//! ROI split across the three programme years.

use super::metrics::round_half_up;
use crate::core::RoiTimelinePoint;

/// Share of total ROI realised in each year.
pub const ANNUAL_WEIGHTS: [f64; 3] = [0.33, 0.45, 0.22];

/// Running share of total ROI at the end of years 1 and 2.
pub const CUMULATIVE_WEIGHTS: [f64; 2] = [0.33, 0.78];

const YEAR_LABELS: [&str; 3] = ["Year 1", "Year 2", "Year 3"];

fn weighted(roi_percent: i64, weight: f64) -> i64 {
    round_half_up(roi_percent as f64 * weight) as i64
}

/// Split `roi_percent` into annual and cumulative points.
///
/// Each year is rounded on its own, so annual values need not add up to the
/// total. The final cumulative value is pinned to `roi_percent` itself.
pub fn compute_roi_timeline(roi_percent: i64) -> Vec<RoiTimelinePoint> {
    (0..YEAR_LABELS.len())
        .map(|i| RoiTimelinePoint {
            year: YEAR_LABELS[i].to_string(),
            roi: weighted(roi_percent, ANNUAL_WEIGHTS[i]),
            cumulative: match CUMULATIVE_WEIGHTS.get(i) {
                Some(&w) => weighted(roi_percent, w),
                None => roi_percent,
            },
        })
        .collect()
}
