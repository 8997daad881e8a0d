use crate::api::ChartDescription;
use crate::error::{ChartError, ChartResult};
use crate::render::ChartRenderer;

/// Headless renderer used by tests and by hosts without a native widget.
///
/// It still checks the description so tests catch values a native widget
/// would reject.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub apply_count: usize,
    pub last_description: Option<ChartDescription>,
}

impl ChartRenderer for NullRenderer {
    fn apply(&mut self, description: &ChartDescription) -> ChartResult<()> {
        if let Some(width) = description.bar_width {
            if !width.is_finite() {
                return Err(ChartError::Renderer(format!(
                    "bar width must be finite, got {width}"
                )));
            }
        }
        self.apply_count += 1;
        self.last_description = Some(description.clone());
        Ok(())
    }
}
