mod draw_call;
mod draw_pass;
mod engine;
mod frame_controller;
mod host;
mod resize_controller;

pub use draw_call::{DrawCall, DrawFlow, DrawState, EachFn, InitFn, TickLevel};
pub use draw_pass::DrawStats;
pub use engine::{TickEngine, TickStore, WhenResized};
pub use host::{ElementSize, FrameRequestId, HeadlessHost, TickHost};
