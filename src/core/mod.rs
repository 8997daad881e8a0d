pub mod bar_grouping;
pub mod color;
pub mod primitives;
pub mod types;

pub use bar_grouping::{BarGroupLayout, DEFAULT_BAR_WIDTH, group_bars};
pub use color::Color;
pub use primitives::{default_numeral, format_fixed, format_trimmed};
pub use types::{ContentRect, DataPoint, ScreenPoint, Size};
