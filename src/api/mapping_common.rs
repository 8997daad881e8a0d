//! Mapping steps shared by line and bar charts.

use crate::core::DataPoint;
use crate::interaction::InteractionFlags;

use super::chart_config::DEFAULT_ANIMATION_DURATION_MS;
use super::{
    AnimationConfig, AnimationDescription, AxisConfig, AxisDescription, AxisLabelFormatter,
    ChartConfig, ChartDescription, Easing, LegendConfig, LegendDescription,
    LegendHorizontalAlignment, LegendVerticalAlignment, MarkerConfig, PointConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AxisRole {
    X,
    Y,
}

/// Entries in host order.
pub(super) fn entries_from_points(points: &[PointConfig]) -> Vec<DataPoint> {
    points
        .iter()
        .map(|point| DataPoint::new(point.x, point.y))
        .collect()
}

pub(super) fn map_axis(config: Option<&AxisConfig>, role: AxisRole) -> AxisDescription {
    let Some(config) = config else {
        return AxisDescription::default();
    };

    AxisDescription {
        enabled: Some(config.enabled.unwrap_or(true)),
        draw_grid_lines: Some(config.draw_grid_lines.unwrap_or(true)),
        draw_axis_line: Some(config.draw_axis_line.unwrap_or(true)),
        min: config.min,
        max: config.max,
        label_count: config.label_count,
        labels_at_bottom: role == AxisRole::X,
        formatter: config.format_spec().map(AxisLabelFormatter::Value),
        granularity: None,
        center_axis_labels: None,
    }
}

/// Vertical/horizontal legend alignment for a `position` and optional `alignment`.
///
/// `alignment` wins over the horizontal value derived from `position`.
#[must_use]
pub fn resolve_legend_alignment(
    position: Option<&str>,
    alignment: Option<&str>,
) -> (LegendVerticalAlignment, LegendHorizontalAlignment) {
    let (vertical, horizontal) = match position {
        Some("bottom") => (
            LegendVerticalAlignment::Bottom,
            LegendHorizontalAlignment::Center,
        ),
        Some("left") => (LegendVerticalAlignment::Top, LegendHorizontalAlignment::Left),
        Some("right") => (
            LegendVerticalAlignment::Top,
            LegendHorizontalAlignment::Right,
        ),
        _ => (
            LegendVerticalAlignment::Top,
            LegendHorizontalAlignment::Center,
        ),
    };

    let horizontal = match alignment {
        None => horizontal,
        Some("start") => LegendHorizontalAlignment::Left,
        Some("end") => LegendHorizontalAlignment::Right,
        Some(_) => LegendHorizontalAlignment::Center,
    };

    (vertical, horizontal)
}

pub(super) fn map_legend(config: &LegendConfig) -> LegendDescription {
    let (vertical, horizontal) =
        resolve_legend_alignment(config.position.as_deref(), config.alignment.as_deref());
    LegendDescription {
        enabled: config.enabled.unwrap_or(true),
        vertical,
        horizontal,
    }
}

/// Marker is only built when explicitly enabled.
pub(super) fn map_marker(config: &MarkerConfig) -> bool {
    config.enabled.unwrap_or(false)
}

pub(super) fn map_animation(config: &AnimationConfig) -> Option<AnimationDescription> {
    if !config.enabled.unwrap_or(false) {
        return None;
    }
    let duration_ms = config
        .duration_ms
        .filter(|ms| ms.is_finite())
        .map_or(DEFAULT_ANIMATION_DURATION_MS, |ms| {
            ms.trunc().clamp(0.0, f64::from(u32::MAX)) as u32
        });
    let easing = match config.easing.as_deref() {
        Some("linear") => Easing::Linear,
        _ => Easing::EaseInOutQuad,
    };
    Some(AnimationDescription {
        duration_ms,
        easing,
    })
}

/// Axes, legend, interaction, marker and animation, common to both kinds.
pub(super) fn apply_chart_sections(description: &mut ChartDescription, config: &ChartConfig) {
    description.x_axis = map_axis(config.x_axis.as_ref(), AxisRole::X);
    description.left_axis = map_axis(config.left_axis.as_ref(), AxisRole::Y);
    description.right_axis = map_axis(config.right_axis.as_ref(), AxisRole::Y);
    description.legend = config.legend.as_ref().map(map_legend);
    description.interaction = config.interaction.as_ref().map(InteractionFlags::from_config);
    description.marker_enabled = config.marker.as_ref().is_some_and(map_marker);
    description.animation = config.animation.as_ref().and_then(map_animation);
    description.description_text_enabled = false;
}
