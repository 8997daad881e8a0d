use serde::{Deserialize, Serialize};

use crate::core::{Color, DataPoint, default_numeral};
use crate::interaction::InteractionFlags;

use super::FormatSpec;
use super::value_formatter::format_axis_value;

/// Alpha used when a solid fill derives its color from the series color.
pub const DERIVED_FILL_ALPHA: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// Label formatter installed on an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisLabelFormatter {
    /// Numeric/date formatting of the raw axis value.
    Value(FormatSpec),
    /// One label per integer tick; values off the integer grid render empty.
    Index(Vec<String>),
}

impl AxisLabelFormatter {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Value(spec) => format_axis_value(value, spec),
            Self::Index(labels) => index_label(labels, value).unwrap_or_default(),
        }
    }
}

fn index_label(labels: &[String], value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded != value.trunc() || rounded < 0.0 {
        return None;
    }
    labels.get(rounded as usize).cloned()
}

/// Settings pushed to one axis. `None` leaves the widget default untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisDescription {
    pub enabled: Option<bool>,
    pub draw_grid_lines: Option<bool>,
    pub draw_axis_line: Option<bool>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Applied with "force" semantics: exactly this many labels.
    pub label_count: Option<u32>,
    pub labels_at_bottom: bool,
    pub formatter: Option<AxisLabelFormatter>,
    pub granularity: Option<f64>,
    pub center_axis_labels: Option<bool>,
}

impl AxisDescription {
    /// Label text for `value`, falling back to the default numeral without a formatter.
    #[must_use]
    pub fn format_label(&self, value: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter.format(value),
            None => default_numeral(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FillDescription {
    /// `color: None` means the series' widget color at `DERIVED_FILL_ALPHA`.
    Solid { color: Option<Color> },
    /// Vertical gradient, drawn bottom to top.
    Gradient { top: Color, bottom: Color },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    pub lengths: Vec<f64>,
    pub phase: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineVisual {
    pub color: Option<Color>,
    pub line_width: Option<f64>,
    pub draw_circles: Option<bool>,
    pub circle_color: Option<Color>,
    pub circle_radius: Option<f64>,
    pub draw_values: Option<bool>,
    pub cubic: bool,
    pub dash: Option<DashPattern>,
    pub fill: Option<FillDescription>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarVisual {
    pub color: Option<Color>,
    pub draw_values: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeriesVisual {
    Line(LineVisual),
    Bar(BarVisual),
}

/// One native data set: entries in host order plus resolved visuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetDescription {
    pub series_id: Option<String>,
    pub label: String,
    pub entries: Vec<DataPoint>,
    pub visual: SeriesVisual,
}

impl DataSetDescription {
    /// Explicitly configured series color, if any.
    #[must_use]
    pub fn primary_color(&self) -> Option<Color> {
        match &self.visual {
            SeriesVisual::Line(line) => line.color,
            SeriesVisual::Bar(bar) => bar.color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendVerticalAlignment {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendHorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Legend placement. Orientation is always horizontal, drawn outside the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendDescription {
    pub enabled: bool,
    pub vertical: LegendVerticalAlignment,
    pub horizontal: LegendHorizontalAlignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentOffsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportDescription {
    pub visible_x_range_min: Option<f64>,
    pub visible_x_range_max: Option<f64>,
    pub initial_x: Option<f64>,
    pub offsets: Option<ContentOffsets>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseInOutQuad,
}

/// X-axis reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationDescription {
    pub duration_ms: u32,
    pub easing: Easing,
}

/// Everything a toolkit adapter needs to configure one native chart.
///
/// Built from scratch on every apply, so two applies of the same config
/// produce equal descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub kind: ChartKind,
    pub data_sets: Vec<DataSetDescription>,
    /// Chart-wide bar width; bar charts only.
    pub bar_width: Option<f64>,
    pub x_axis: AxisDescription,
    pub left_axis: AxisDescription,
    pub right_axis: AxisDescription,
    pub legend: Option<LegendDescription>,
    pub interaction: Option<InteractionFlags>,
    pub viewport: Option<ViewportDescription>,
    /// Taps show the multi-series marker (`extensions::markers`).
    pub marker_enabled: bool,
    pub animation: Option<AnimationDescription>,
    pub description_text_enabled: bool,
}

impl ChartDescription {
    #[must_use]
    pub fn empty(kind: ChartKind) -> Self {
        Self {
            kind,
            data_sets: Vec::new(),
            bar_width: None,
            x_axis: AxisDescription::default(),
            left_axis: AxisDescription::default(),
            right_axis: AxisDescription::default(),
            legend: None,
            interaction: None,
            viewport: None,
            marker_enabled: false,
            animation: None,
            description_text_enabled: false,
        }
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.data_sets.iter().map(|set| set.entries.len()).sum()
    }
}
