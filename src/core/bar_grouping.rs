use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Bar width the native widgets use when no style sets one.
pub const DEFAULT_BAR_WIDTH: f64 = 0.85;

/// Spacing inputs for side-by-side bar groups, all in x-axis units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGroupLayout {
    pub from_x: f64,
    pub group_space: f64,
    pub bar_space: f64,
    pub bar_width: f64,
}

impl BarGroupLayout {
    /// Width of one group holding `series_count` bars plus its outer spacing.
    #[must_use]
    pub fn group_width(self, series_count: usize) -> f64 {
        (self.bar_width + self.bar_space) * series_count as f64 + self.group_space
    }
}

/// Repositions entries so entry `i` of every series sits in group `i`.
///
/// Groups start at `from_x` and advance by exactly `group_width` each, with
/// bars centered inside their slot. Series shorter than the longest one simply
/// leave their slot empty in the trailing groups.
pub fn group_bars(series: &mut [Vec<DataPoint>], layout: BarGroupLayout) {
    let max_entry_count = series.iter().map(Vec::len).max().unwrap_or(0);
    let interval = layout.group_width(series.len());
    let group_space_half = layout.group_space * 0.5;
    let bar_space_half = layout.bar_space * 0.5;
    let bar_width_half = layout.bar_width * 0.5;

    let mut cursor = layout.from_x;
    for entry_index in 0..max_entry_count {
        let group_start = cursor;
        cursor += group_space_half;
        for entries in series.iter_mut() {
            cursor += bar_space_half + bar_width_half;
            if let Some(point) = entries.get_mut(entry_index) {
                point.x = cursor;
            }
            cursor += bar_width_half + bar_space_half;
        }
        cursor += group_space_half;

        // Keep accumulated float error from drifting groups off the interval grid.
        let drift = interval - (cursor - group_start);
        if drift != 0.0 {
            cursor += drift;
        }
    }
}
