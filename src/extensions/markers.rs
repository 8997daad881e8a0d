use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::api::{ChartDescription, DataSetDescription};
use crate::core::{Color, ContentRect, ScreenPoint, Size, format_trimmed};

/// Gap between the tapped point and the bottom of the marker box.
pub const MARKER_VERTICAL_GAP: f64 = 8.0;
/// Max x distance for a series point to count as "at" the tapped x.
pub const SERIES_MATCH_EPSILON: f64 = 0.001;
pub const MARKER_BULLET: char = '\u{25CF}';

/// One series row of a multi-series marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub bullet_color: Option<Color>,
    pub label: String,
    pub value: String,
}

impl MarkerLine {
    #[must_use]
    pub fn text(&self) -> String {
        if self.label.is_empty() {
            format!("{MARKER_BULLET} {}", self.value)
        } else {
            format!("{MARKER_BULLET} {}: {}", self.label, self.value)
        }
    }
}

/// Text shown in the marker box: a title row followed by one row per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerContent {
    pub title: String,
    pub lines: Vec<MarkerLine>,
}

impl MarkerContent {
    /// Newline-separated text, bullets included.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.text());
        }
        out
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len() + 1
    }
}

/// Marker numeral: whole numbers keep one decimal (`1.0`), others at most two.
#[must_use]
pub fn format_marker_numeral(value: f64) -> String {
    if !value.is_finite() {
        return crate::core::default_numeral(value);
    }
    if value == value.round() {
        return format!("{value:.1}");
    }
    format_trimmed(value, 2)
}

/// Multi-series marker for the tapped `x`.
///
/// The title is the x-axis label at `x` (raw numeral when the axis formatter
/// yields nothing); each data set with a point within `SERIES_MATCH_EPSILON`
/// contributes one row, in data set order.
#[must_use]
pub fn format_series_marker(description: &ChartDescription, x: f64) -> MarkerContent {
    let mut title = description.x_axis.format_label(x);
    if title.is_empty() {
        title = format_marker_numeral(x);
    }

    let lines = description
        .data_sets
        .iter()
        .filter_map(|set| {
            let point = nearest_point(set, x)?;
            Some(MarkerLine {
                bullet_color: set.primary_color(),
                label: set.label.clone(),
                value: format_marker_numeral(point.y),
            })
        })
        .collect();

    MarkerContent { title, lines }
}

fn nearest_point(set: &DataSetDescription, x: f64) -> Option<crate::core::DataPoint> {
    set.entries
        .iter()
        .copied()
        .filter(|point| (point.x - x).abs() <= SERIES_MATCH_EPSILON)
        .min_by_key(|point| OrderedFloat((point.x - x).abs()))
}

/// Marker content for a tap at data x `x`, or `None` when the marker is off.
///
/// The multi-series list is the only marker mode.
#[must_use]
pub fn marker_content(description: &ChartDescription, x: f64) -> Option<MarkerContent> {
    description
        .marker_enabled
        .then(|| format_series_marker(description, x))
}

/// Approximate text metrics used to size the marker box without a text engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerBoxMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub padding: f64,
    pub max_text_width: f64,
}

impl Default for MarkerBoxMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
            padding: 6.0,
            max_text_width: 220.0,
        }
    }
}

/// Box size for `content`: widest line (capped, wrapping the overflow) plus padding.
#[must_use]
pub fn estimate_marker_size(content: &MarkerContent, metrics: MarkerBoxMetrics) -> Size {
    let text = content.to_plain_text();
    let mut widest: f64 = 0.0;
    let mut rows = 0usize;
    for line in text.split('\n') {
        let natural = line.chars().count() as f64 * metrics.char_width;
        widest = widest.max(natural.min(metrics.max_text_width));
        let wrapped = (natural / metrics.max_text_width).ceil() as usize;
        rows += wrapped.max(1);
    }
    Size::new(
        widest + 2.0 * metrics.padding,
        rows as f64 * metrics.line_height + 2.0 * metrics.padding,
    )
}

/// Where the marker box lands relative to the tapped point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacement {
    /// Offset from the anchor to the box's top-left corner.
    pub offset: ScreenPoint,
    /// Absolute top-left corner.
    pub origin: ScreenPoint,
}

/// Centers the box above `anchor`, then shifts it back inside `content`.
///
/// An overflowing edge moves the box inward by exactly the overflow; the box
/// is never resized or flipped below the point.
#[must_use]
pub fn place_marker(anchor: ScreenPoint, size: Size, content: ContentRect) -> MarkerPlacement {
    let mut offset_x = -(size.width * 0.5);
    let mut offset_y = -(size.height + MARKER_VERTICAL_GAP);

    if anchor.x + offset_x < content.left {
        offset_x = content.left - anchor.x;
    } else if anchor.x + offset_x + size.width > content.right {
        offset_x = content.right - anchor.x - size.width;
    }

    if anchor.y + offset_y < content.top {
        offset_y = content.top - anchor.y;
    } else if anchor.y + offset_y + size.height > content.bottom {
        offset_y = content.bottom - anchor.y - size.height;
    }

    MarkerPlacement {
        offset: ScreenPoint::new(offset_x, offset_y),
        origin: ScreenPoint::new(anchor.x + offset_x, anchor.y + offset_y),
    }
}
