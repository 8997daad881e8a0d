use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale `rust_decimal` can represent.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Rounding is half-away-from-zero on the exact binary value, `.` is the
/// separator and no grouping is applied. Values whose scaled mantissa does not
/// fit a `Decimal` fall back to the standard formatter. Digits past the largest
/// `Decimal` scale are zero padded.
#[must_use]
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let scale = decimals.min(MAX_DECIMAL_SCALE);
    let precision = decimals as usize;
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return format!("{value:.precision$}");
    };

    let mut rounded = exact.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    // `rescale` keeps a smaller scale when the mantissa would overflow.
    if rounded.scale() != scale {
        return format!("{value:.precision$}");
    }

    let mut text = rounded.to_string();
    if decimals > scale {
        text.extend(std::iter::repeat_n('0', (decimals - scale) as usize));
    }

    if rounded.is_zero() && value.is_sign_negative() && !text.starts_with('-') {
        format!("-{text}")
    } else {
        text
    }
}

/// Same as `format_fixed` but drops trailing fractional zeros and a dangling separator.
#[must_use]
pub fn format_trimmed(value: f64, max_decimals: u32) -> String {
    let mut text = format_fixed(value, max_decimals);
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }
    if text == "-0" { "0".to_owned() } else { text }
}

/// Converts a floating epoch-millisecond value with integer truncation.
#[must_use]
pub fn epoch_millis_to_utc(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = i64::from_f64(value.trunc())?;
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// Stringification used when no formatter is configured.
///
/// Rust `Debug` float text: shortest round-trip digits and whole numbers keep
/// a `.0` suffix. Infinities print as `inf` and large magnitudes switch to
/// exponent form (`1e16`).
#[must_use]
pub fn default_numeral(value: f64) -> String {
    format!("{value:?}")
}
