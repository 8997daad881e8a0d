//! archarts: platform-agnostic core for line and bar chart views.
//!
//! Host configs are mapped into a `ChartDescription` that a thin per-toolkit
//! `ChartRenderer` translates into native widget calls. Formatting, style
//! resolution, bar grouping and marker layout all live here so every target
//! renders the same chart from the same config.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartDescription, ChartHost, ChartKind, ViewHandle, map_chart};
pub use error::{ChartError, ChartResult};
