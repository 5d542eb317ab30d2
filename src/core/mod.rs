pub mod grid;
pub mod layout;
pub mod mapping;
pub mod params;
pub mod window;

pub use grid::TickGrid;
pub use layout::{LevelTicks, MAX_TICKS_PER_LEVEL, TickLayout, compute_layout};
pub use mapping::{map_point_to_value, map_value_to_point};
pub use params::{LayoutOverrides, LayoutParams, ShyResolution};
pub use window::{VisibleWindow, visible_window};
