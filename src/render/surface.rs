use serde::{Deserialize, Serialize};

use crate::error::TickResult;
use crate::render::TickFrame;

/// Backing-store size in device pixels plus the logical size it is shown at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
    pub css_width: f64,
    pub css_height: f64,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: f64, height: f64, css_width: f64, css_height: f64) -> Self {
        Self {
            width,
            height,
            css_width,
            css_height,
        }
    }
}

/// Drawing surface that hands out a 2D context for one draw pass.
///
/// Every tick callback receives the same context, unmodified by the engine.
pub trait TickSurface {
    type Context;

    /// Runs `draw` with the surface context.
    ///
    /// Fails with `TickError::SurfaceUnavailable` when no context can be
    /// produced; the engine surfaces that error without retrying.
    fn with_context<R>(&mut self, draw: impl FnOnce(&mut Self::Context) -> R) -> TickResult<R>;

    /// Resizes the backing store to follow the observed element.
    fn resize(&mut self, _size: SurfaceSize) -> TickResult<()> {
        Ok(())
    }
}

/// Headless surface recording primitives into a `TickFrame`.
///
/// The frame is cleared each time a context is handed out, so after a draw it
/// holds exactly that pass's output.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSurface {
    frame: TickFrame,
    size: SurfaceSize,
    passes: usize,
}

impl FrameSurface {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            frame: TickFrame::new(width, height),
            size: SurfaceSize::new(width, height, width, height),
            passes: 0,
        }
    }

    #[must_use]
    pub fn frame(&self) -> &TickFrame {
        &self.frame
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Number of contexts handed out so far.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl TickSurface for FrameSurface {
    type Context = TickFrame;

    fn with_context<R>(&mut self, draw: impl FnOnce(&mut TickFrame) -> R) -> TickResult<R> {
        self.frame.clear();
        self.passes += 1;
        Ok(draw(&mut self.frame))
    }

    fn resize(&mut self, size: SurfaceSize) -> TickResult<()> {
        self.size = size;
        self.frame.width = size.width;
        self.frame.height = size.height;
        Ok(())
    }
}
