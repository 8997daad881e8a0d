use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::core::Color;

use super::lenient;

/// Area fill drawn under a line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    None,
    Solid,
    Gradient,
}

/// Dash pattern for a line stroke. Fewer than two lengths means "solid".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDash {
    #[serde(default, deserialize_with = "dash_lengths")]
    pub lengths: SmallVec<[f64; 4]>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub phase: Option<f64>,
}

impl LineDash {
    /// Dash pattern to apply, or `None` when too few usable lengths were supplied.
    #[must_use]
    pub fn effective(&self) -> Option<(&[f64], f64)> {
        (self.lengths.len() >= 2).then(|| (self.lengths.as_slice(), self.phase.unwrap_or(0.0)))
    }
}

fn dash_lengths<'de, D>(deserializer: D) -> Result<SmallVec<[f64; 4]>, D::Error>
where
    D: Deserializer<'de>,
{
    let lengths: Vec<f64> = lenient::list(deserializer)?;
    Ok(SmallVec::from_vec(lengths))
}

/// Per-series visual overrides for line charts. Unset fields keep widget defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(
        default,
        deserialize_with = "lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_color: Option<Color>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_width: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub draw_circles: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub circle_color: Option<Color>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub circle_radius: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub draw_values: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub cubic: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_dash: Option<LineDash>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill: Option<FillMode>,
    #[serde(
        default,
        deserialize_with = "lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill_color: Option<Color>,
    #[serde(
        default,
        deserialize_with = "lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill_color_top: Option<Color>,
    #[serde(
        default,
        deserialize_with = "lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub fill_color_bottom: Option<Color>,
}

impl LineStyle {
    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = Some(fill);
        self
    }
}

impl AsRef<LineStyle> for LineStyle {
    fn as_ref(&self) -> &LineStyle {
        self
    }
}

/// Per-series visual overrides for bar charts. Unset fields keep widget defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarStyle {
    #[serde(
        default,
        deserialize_with = "lenient::color",
        skip_serializing_if = "Option::is_none"
    )]
    pub bar_color: Option<Color>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub draw_values: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub bar_width: Option<f64>,
}

impl BarStyle {
    #[must_use]
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, width: f64) -> Self {
        self.bar_width = Some(width);
        self
    }
}

impl AsRef<BarStyle> for BarStyle {
    fn as_ref(&self) -> &BarStyle {
        self
    }
}

/// One `perSeriesStyle` entry.
///
/// The wire map does not say which chart kind it targets, so the same object
/// is read both as a line and as a bar style; each mapper sees its own view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleEntry {
    pub line: LineStyle,
    pub bar: BarStyle,
}

impl StyleEntry {
    #[must_use]
    pub fn from_line(line: LineStyle) -> Self {
        Self {
            line,
            bar: BarStyle::default(),
        }
    }

    #[must_use]
    pub fn from_bar(bar: BarStyle) -> Self {
        Self {
            line: LineStyle::default(),
            bar,
        }
    }
}

impl AsRef<LineStyle> for StyleEntry {
    fn as_ref(&self) -> &LineStyle {
        &self.line
    }
}

impl AsRef<BarStyle> for StyleEntry {
    fn as_ref(&self) -> &BarStyle {
        &self.bar
    }
}

impl<'de> Deserialize<'de> for StyleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("style entry must be an object"));
        }
        let line = LineStyle::deserialize(&value).map_err(serde::de::Error::custom)?;
        let bar = BarStyle::deserialize(&value).map_err(serde::de::Error::custom)?;
        Ok(Self { line, bar })
    }
}

impl Serialize for StyleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut merged = serde_json::to_value(&self.line).map_err(S::Error::custom)?;
        let bar = serde_json::to_value(&self.bar).map_err(S::Error::custom)?;
        if let (Value::Object(target), Value::Object(source)) = (&mut merged, bar) {
            for (key, value) in source {
                target.entry(key).or_insert(value);
            }
        }
        merged.serialize(serializer)
    }
}
