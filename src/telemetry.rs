//! Telemetry helpers for hosts embedding `archarts`.
//!
//! Mapping and registry code only emits `tracing` events. Subscribers stay the
//! host's business: call `init_default_tracing` for a quick compact console
//! subscriber, or install your own.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "archarts=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` wins over `DEFAULT_TRACING_FILTER` when present.
/// Returns `false` when the feature is disabled or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_default_tracing;

    #[test]
    fn second_initialization_is_rejected() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
