pub(crate) mod lenient;

pub mod axis_config;
pub mod bar_chart_mapper;
pub mod chart_config;
pub mod chart_description;
pub mod chart_host;
mod date_pattern;
pub mod json_contract;
pub mod line_chart_mapper;
pub mod mapping_common;
pub mod style_config;
pub mod style_resolver;
pub mod value_formatter;
pub mod view_registry;

pub use axis_config::{
    AxisConfig, AxisTimeZone, DEFAULT_DATE_PATTERN, DEFAULT_FORMAT_DECIMALS, FormatSpec,
    FormatType,
};
pub use bar_chart_mapper::{
    MAX_INDEX_LABELS, bar_visual, index_labels, map_bar_chart, resolve_bar_width,
};
pub use chart_config::{
    AnimationConfig, BarGroupConfig, ChartConfig, DEFAULT_ANIMATION_DURATION_MS,
    DEFAULT_BAR_SPACE, DEFAULT_GROUP_SPACE, InteractionConfig, LegendConfig, MarkerConfig,
    PointConfig, SeriesConfig, ViewportConfig, ViewportOffsets,
};
pub use chart_description::{
    AnimationDescription, AxisDescription, AxisLabelFormatter, BarVisual, ChartDescription,
    ChartKind, ContentOffsets, DERIVED_FILL_ALPHA, DashPattern, DataSetDescription, Easing,
    FillDescription, LegendDescription, LegendHorizontalAlignment, LegendVerticalAlignment,
    LineVisual, SeriesVisual, ViewportDescription,
};
pub use chart_host::{ChartHost, ChartInstance, platform_version};
pub use line_chart_mapper::{line_visual, map_line_chart};
pub use mapping_common::resolve_legend_alignment;
pub use style_config::{BarStyle, FillMode, LineDash, LineStyle, StyleEntry};
pub use style_resolver::resolve_style;
pub use value_formatter::{format_axis_value, format_compact};
pub use view_registry::{ChartViewRegistry, ViewHandle};

/// Maps `config` with the mapper for `kind`.
#[must_use]
pub fn map_chart(kind: ChartKind, config: &ChartConfig) -> ChartDescription {
    match kind {
        ChartKind::Line => map_line_chart(config),
        ChartKind::Bar => map_bar_chart(config),
    }
}
