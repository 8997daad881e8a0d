//! Interaction-time helpers that run against an already applied description.

pub mod markers;

pub use markers::{
    MARKER_BULLET, MARKER_VERTICAL_GAP, MarkerBoxMetrics, MarkerContent, MarkerLine,
    MarkerPlacement, SERIES_MATCH_EPSILON, estimate_marker_size, format_marker_numeral,
    format_series_marker, marker_content, place_marker,
};
