use indexmap::IndexMap;

/// Picks the style applied to one series.
///
/// A per-series entry keyed by `series_id` wins outright; otherwise the shared
/// default is used, which may itself be absent (keep widget defaults). The two
/// are never merged.
#[must_use]
pub fn resolve_style<'a, S, E>(
    series_id: Option<&str>,
    per_series: Option<&'a IndexMap<String, E>>,
    default: Option<&'a S>,
) -> Option<&'a S>
where
    E: AsRef<S>,
{
    series_id
        .and_then(|id| per_series?.get(id))
        .map(AsRef::as_ref)
        .or(default)
}
