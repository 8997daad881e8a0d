use serde::{Deserialize, Serialize};

use crate::api::InteractionConfig;

/// Gesture switches pushed to the native chart.
///
/// The host exposes three toggles; each fans out to every widget switch that
/// belongs to the same gesture family on both platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionFlags {
    pub scale_x_enabled: bool,
    pub scale_y_enabled: bool,
    pub pinch_zoom_enabled: bool,
    pub double_tap_zoom_enabled: bool,
    pub drag_enabled: bool,
    pub highlight_per_tap_enabled: bool,
    pub highlight_per_drag_enabled: bool,
}

impl Default for InteractionFlags {
    fn default() -> Self {
        Self::from_toggles(true, true, true)
    }
}

impl InteractionFlags {
    #[must_use]
    pub fn from_toggles(zoom: bool, drag: bool, highlight: bool) -> Self {
        Self {
            scale_x_enabled: zoom,
            scale_y_enabled: zoom,
            pinch_zoom_enabled: zoom,
            double_tap_zoom_enabled: zoom,
            drag_enabled: drag,
            highlight_per_tap_enabled: highlight,
            highlight_per_drag_enabled: highlight,
        }
    }

    /// Unset toggles default to enabled.
    #[must_use]
    pub fn from_config(config: &InteractionConfig) -> Self {
        Self::from_toggles(
            config.zoom_enabled.unwrap_or(true),
            config.drag_enabled.unwrap_or(true),
            config.highlight_enabled.unwrap_or(true),
        )
    }

    #[must_use]
    pub fn zoom_enabled(self) -> bool {
        self.scale_x_enabled || self.scale_y_enabled
    }
}
