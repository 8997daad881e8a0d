use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use super::lenient;

pub const DEFAULT_FORMAT_DECIMALS: u32 = 1;
pub const DEFAULT_DATE_PATTERN: &str = "MMM d";

/// Built-in axis label formatting modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    None,
    Compact,
    Decimal,
    Percent,
    Date,
    /// Unrecognized mode: a formatter is installed but renders the default numeral.
    #[serde(other)]
    Other,
}

/// Timezone used to render `date` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisTimeZone {
    /// The process' current local timezone.
    #[default]
    Local,
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl AxisTimeZone {
    /// Offset for non-local zones; `None` means "ask the system".
    #[must_use]
    pub(crate) fn fixed_offset(self) -> Option<FixedOffset> {
        match self {
            Self::Local => None,
            Self::Utc => FixedOffset::east_opt(0),
            Self::FixedOffsetMinutes { minutes } => FixedOffset::east_opt(i32::from(minutes) * 60),
        }
    }
}

/// Resolved formatter settings for one axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatSpec {
    pub format_type: FormatType,
    pub decimals: u32,
    pub date_pattern: String,
    pub time_zone: AxisTimeZone,
}

impl FormatSpec {
    #[must_use]
    pub fn new(format_type: FormatType) -> Self {
        Self {
            format_type,
            decimals: DEFAULT_FORMAT_DECIMALS,
            date_pattern: DEFAULT_DATE_PATTERN.to_owned(),
            time_zone: AxisTimeZone::Local,
        }
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_date_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.date_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: AxisTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }
}

/// Host configuration for one axis (`xAxis`, `leftAxis` or `rightAxis`).
///
/// Format keys are flat on the axis map to stay wire compatible.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub draw_grid_lines: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub draw_axis_line: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub min: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub label_count: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_type: Option<FormatType>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_type_decimals: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_pattern: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_utc_offset_minutes: Option<i16>,
}

impl AxisConfig {
    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_format(mut self, spec: &FormatSpec) -> Self {
        self.format_type = Some(spec.format_type);
        self.format_type_decimals = Some(spec.decimals);
        self.format_pattern = Some(spec.date_pattern.clone());
        self.format_utc_offset_minutes = match spec.time_zone {
            AxisTimeZone::Local => None,
            AxisTimeZone::Utc => Some(0),
            AxisTimeZone::FixedOffsetMinutes { minutes } => Some(minutes),
        };
        self
    }

    /// Formatter to install, or `None` when the widget default stringification applies.
    #[must_use]
    pub fn format_spec(&self) -> Option<FormatSpec> {
        let format_type = self.format_type?;
        if format_type == FormatType::None {
            return None;
        }
        let time_zone = match self.format_utc_offset_minutes {
            None => AxisTimeZone::Local,
            Some(0) => AxisTimeZone::Utc,
            Some(minutes) => AxisTimeZone::FixedOffsetMinutes { minutes },
        };
        Some(FormatSpec {
            format_type,
            decimals: self
                .format_type_decimals
                .unwrap_or(DEFAULT_FORMAT_DECIMALS),
            date_pattern: self
                .format_pattern
                .clone()
                .unwrap_or_else(|| DEFAULT_DATE_PATTERN.to_owned()),
            time_zone,
        })
    }
}
