mod frame;
pub mod marks;
mod primitives;
mod surface;

pub use frame::TickFrame;
pub use marks::{TickLabelStyle, TickMarkStyle, tick_labels, tick_lines};
pub use primitives::{Color, LinePrimitive, TextHAlign, TextPrimitive};
pub use surface::{FrameSurface, SurfaceSize, TickSurface};

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{
    CairoContextSurface, CairoPaintStats, CairoSurface, cairo_tick_lines, paint_frame,
};
