//! linear-tick: hierarchical tick layout for rulers, axes and grid overlays.
//!
//! The pure selection math lives in `core`; `api` wraps it in a callback
//! driven engine that draws onto any `render::TickSurface`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{DrawCall, DrawFlow, DrawState, TickEngine, TickLevel, WhenResized};
pub use core::{LayoutParams, TickGrid};
pub use error::{TickError, TickResult};
