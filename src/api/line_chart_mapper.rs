use tracing::debug;

use crate::core::Color;

use super::mapping_common::{apply_chart_sections, entries_from_points};
use super::style_resolver::resolve_style;
use super::{
    ChartConfig, ChartDescription, ChartKind, ContentOffsets, DashPattern, DataSetDescription,
    FillDescription, FillMode, LineStyle, LineVisual, SeriesVisual, ViewportConfig,
    ViewportDescription,
};

/// Builds the full line chart description for `config`.
#[must_use]
pub fn map_line_chart(config: &ChartConfig) -> ChartDescription {
    let mut description = ChartDescription::empty(ChartKind::Line);

    description.data_sets = config
        .series
        .iter()
        .map(|series| {
            let style = resolve_style(
                series.id.as_deref(),
                Some(&config.per_series_style),
                config.default_line_style.as_ref(),
            );
            DataSetDescription {
                series_id: series.id.clone(),
                label: series.label.clone().unwrap_or_default(),
                entries: entries_from_points(&series.points),
                visual: SeriesVisual::Line(line_visual(style)),
            }
        })
        .collect();

    apply_chart_sections(&mut description, config);
    description.viewport = config.viewport.as_ref().map(map_viewport);

    debug!(
        data_sets = description.data_sets.len(),
        entries = description.entry_count(),
        "mapped line chart"
    );
    description
}

/// Resolves one line style into native data set settings.
#[must_use]
pub fn line_visual(style: Option<&LineStyle>) -> LineVisual {
    let Some(style) = style else {
        return LineVisual::default();
    };

    let mut visual = LineVisual {
        color: style.line_color,
        line_width: style.line_width,
        draw_circles: style.draw_circles,
        circle_color: style.circle_color.or(style.line_color),
        circle_radius: style.circle_radius,
        draw_values: style.draw_values,
        cubic: style.cubic == Some(true),
        dash: None,
        fill: None,
    };

    // Non-positive radius renders nothing, so circle drawing is switched off.
    if style.circle_radius.is_some_and(|radius| radius <= 0.0) {
        visual.draw_circles = Some(false);
    }

    visual.dash = style
        .line_dash
        .as_ref()
        .and_then(|dash| dash.effective())
        .map(|(lengths, phase)| DashPattern {
            lengths: lengths.to_vec(),
            phase,
        });

    visual.fill = match style.fill {
        Some(FillMode::Solid) => Some(FillDescription::Solid {
            color: style.fill_color.or_else(|| {
                style
                    .line_color
                    .map(|color| color.with_alpha_fraction(super::DERIVED_FILL_ALPHA))
            }),
        }),
        Some(FillMode::Gradient) => {
            let line_color = style.line_color.unwrap_or(Color::BLACK);
            Some(FillDescription::Gradient {
                top: style.fill_color_top.unwrap_or(line_color),
                bottom: style.fill_color_bottom.unwrap_or(Color::TRANSPARENT),
            })
        }
        Some(FillMode::None) | None => None,
    };

    visual
}

fn map_viewport(config: &ViewportConfig) -> ViewportDescription {
    ViewportDescription {
        visible_x_range_min: config.visible_x_range_min,
        visible_x_range_max: config.visible_x_range_max,
        initial_x: config.initial_x,
        offsets: config.view_port_offsets.map(|offsets| ContentOffsets {
            left: offsets.left.unwrap_or(0.0),
            top: offsets.top.unwrap_or(0.0),
            right: offsets.right.unwrap_or(0.0),
            bottom: offsets.bottom.unwrap_or(0.0),
        }),
    }
}
