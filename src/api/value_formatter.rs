use std::fmt::Write as _;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::core::primitives::epoch_millis_to_utc;
use crate::core::{default_numeral, format_fixed};

use super::date_pattern::icu_to_strftime;
use super::{FormatSpec, FormatType};

const COMPACT_LADDER: [(f64, &str); 4] = [
    (1_000_000_000_000.0, "T"),
    (1_000_000_000.0, "B"),
    (1_000_000.0, "M"),
    (1_000.0, "K"),
];

/// Formats one axis value according to `spec`.
///
/// Never fails: non-finite input and unrecognized modes fall back to the
/// default numeral.
#[must_use]
pub fn format_axis_value(value: f64, spec: &FormatSpec) -> String {
    if !value.is_finite() {
        return default_numeral(value);
    }

    match spec.format_type {
        FormatType::Compact => format_compact(value),
        FormatType::Decimal => format_fixed(value, spec.decimals),
        FormatType::Percent => {
            let mut text = format_fixed(value, spec.decimals);
            text.push('%');
            text
        }
        FormatType::Date => format_date(value, spec),
        FormatType::None | FormatType::Other => default_numeral(value),
    }
}

/// Magnitude-scaled label: `1.2K`, `-2.5M`, `999`, `0.00`.
#[must_use]
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    for (threshold, suffix) in COMPACT_LADDER {
        if abs_value >= threshold {
            return format!("{sign}{}{suffix}", format_fixed(abs_value / threshold, 1));
        }
    }

    if abs_value >= 1.0 || abs_value == 0.0 {
        format_fixed(value, 0)
    } else {
        format_fixed(value, 2)
    }
}

fn format_date(value: f64, spec: &FormatSpec) -> String {
    let Some(instant) = epoch_millis_to_utc(value) else {
        return default_numeral(value);
    };
    let pattern = icu_to_strftime(&spec.date_pattern);

    let rendered = match spec.time_zone.fixed_offset() {
        Some(offset) => render_in_zone(instant, &offset, &pattern),
        None => render_in_zone(instant, &Local, &pattern),
    };
    rendered.unwrap_or_else(|| default_numeral(value))
}

fn render_in_zone<Tz>(instant: DateTime<Utc>, zone: &Tz, pattern: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let local = instant.with_timezone(zone);
    let mut out = String::new();
    write!(out, "{}", local.format(pattern)).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::format_compact;

    #[test]
    fn compact_picks_most_significant_suffix() {
        assert_eq!(format_compact(1_500_000_000_000.0), "1.5T");
        assert_eq!(format_compact(2_000_000_000.0), "2.0B");
        assert_eq!(format_compact(1_000.0), "1.0K");
    }

    #[test]
    fn compact_rounds_small_whole_values() {
        assert_eq!(format_compact(999.4), "999");
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(-12.0), "-12");
    }
}
