mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::api::ChartDescription;
use crate::error::ChartResult;

/// Contract implemented by each native toolkit adapter.
///
/// Adapters receive a complete, deterministic `ChartDescription` on every
/// apply and translate it into widget calls; they hold no mapping rules.
pub trait ChartRenderer {
    fn apply(&mut self, description: &ChartDescription) -> ChartResult<()>;
}
