use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::{BarGroupLayout, DEFAULT_BAR_WIDTH, DataPoint, group_bars};

use super::chart_config::{DEFAULT_BAR_SPACE, DEFAULT_GROUP_SPACE};
use super::mapping_common::{apply_chart_sections, entries_from_points};
use super::style_resolver::resolve_style;
use super::{
    AxisDescription, AxisLabelFormatter, BarGroupConfig, BarStyle, BarVisual, ChartConfig,
    ChartDescription, ChartKind, DataSetDescription, SeriesConfig, SeriesVisual,
};

/// Index labels beyond this are ignored to bound the dense label array.
pub const MAX_INDEX_LABELS: usize = 65_536;

/// Builds the full bar chart description for `config`.
#[must_use]
pub fn map_bar_chart(config: &ChartConfig) -> ChartDescription {
    let mut description = ChartDescription::empty(ChartKind::Bar);
    let group_enabled = config
        .bar_group
        .as_ref()
        .is_some_and(BarGroupConfig::is_enabled);

    let styles: Vec<Option<&BarStyle>> = config
        .series
        .iter()
        .map(|series| {
            resolve_style(
                series.id.as_deref(),
                Some(&config.per_series_style),
                config.default_bar_style.as_ref(),
            )
        })
        .collect();
    description.bar_width = resolve_bar_width(styles.iter().copied());
    description.data_sets = config
        .series
        .iter()
        .zip(&styles)
        .map(|(series, style)| DataSetDescription {
            series_id: series.id.clone(),
            label: series.label.clone().unwrap_or_default(),
            entries: entries_from_points(&series.points),
            visual: SeriesVisual::Bar(bar_visual(*style)),
        })
        .collect();

    apply_chart_sections(&mut description, config);

    match config.bar_group.as_ref() {
        Some(bar_group) if group_enabled => apply_grouped_bars(&mut description, bar_group),
        _ => {
            if let Some(labels) = config.series.first().and_then(index_labels) {
                install_index_labels(&mut description.x_axis, labels);
            }
        }
    }

    debug!(
        data_sets = description.data_sets.len(),
        entries = description.entry_count(),
        grouped = group_enabled,
        "mapped bar chart"
    );
    description
}

#[must_use]
pub fn bar_visual(style: Option<&BarStyle>) -> BarVisual {
    style.map_or_else(BarVisual::default, |style| BarVisual {
        color: style.bar_color,
        draw_values: style.draw_values,
    })
}

/// Chart-wide bar width: the first `barWidth` found in series order.
#[must_use]
pub fn resolve_bar_width<'a, I>(styles: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<&'a BarStyle>>,
{
    styles
        .into_iter()
        .find_map(|style| style.and_then(|style| style.bar_width))
}

/// Dense x-axis labels built from the labeled points of `series`.
///
/// Point `x` is truncated to an index; holes are filled with the index itself.
/// Returns `None` when no usable labels exist.
#[must_use]
pub fn index_labels(series: &SeriesConfig) -> Option<Vec<String>> {
    let mut by_index = BTreeMap::new();
    for point in &series.points {
        let Some(label) = &point.label else {
            continue;
        };
        let index = point.x.trunc();
        if !(0.0..MAX_INDEX_LABELS as f64).contains(&index) {
            if index >= MAX_INDEX_LABELS as f64 {
                warn!(x = point.x, "bar label index out of range; ignoring");
            }
            continue;
        }
        by_index.insert(index as usize, label.clone());
    }

    let max_index = *by_index.keys().next_back()?;
    let mut labels: Vec<String> = (0..=max_index).map(|index| index.to_string()).collect();
    for (index, label) in by_index {
        labels[index] = label;
    }
    Some(labels)
}

fn install_index_labels(axis: &mut AxisDescription, labels: Vec<String>) {
    axis.formatter = Some(AxisLabelFormatter::Index(labels));
    axis.granularity = Some(1.0);
}

/// Shifts bars into side-by-side groups and fits the x axis around them.
///
/// Needs at least two data sets; otherwise the chart is left ungrouped.
fn apply_grouped_bars(description: &mut ChartDescription, config: &BarGroupConfig) {
    if description.data_sets.len() < 2 {
        return;
    }

    let layout = BarGroupLayout {
        from_x: config.from_x.unwrap_or(0.0),
        group_space: config.group_space.unwrap_or(DEFAULT_GROUP_SPACE),
        bar_space: config.bar_space.unwrap_or(DEFAULT_BAR_SPACE),
        bar_width: description.bar_width.unwrap_or(DEFAULT_BAR_WIDTH),
    };

    let mut entries: Vec<Vec<DataPoint>> = description
        .data_sets
        .iter_mut()
        .map(|set| std::mem::take(&mut set.entries))
        .collect();
    group_bars(&mut entries, layout);
    for (set, grouped) in description.data_sets.iter_mut().zip(entries) {
        set.entries = grouped;
    }

    let group_count = description.data_sets[0].entries.len();
    let group_width = layout.group_width(description.data_sets.len());
    let axis = &mut description.x_axis;
    axis.center_axis_labels = Some(config.center_axis_labels.unwrap_or(true));
    axis.granularity = Some(1.0);
    axis.min = Some(layout.from_x);
    axis.max = Some(layout.from_x + group_width * group_count as f64);
}
