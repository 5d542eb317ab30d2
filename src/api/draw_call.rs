use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::{LayoutParams, TickGrid};

/// Control signal returned by `init` style hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawFlow {
    #[default]
    Continue,
    /// From `init_draw`: abort the whole draw. From a bundle `init`: skip that
    /// bundle's `each`/`finish` only.
    Stop,
}

/// Per-tick state shared with every callback of a draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrawState {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub first_value: f64,
    pub last_value: f64,
}

impl DrawState {
    #[must_use]
    pub fn new(first_value: f64, last_value: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            value: 0.0,
            first_value,
            last_value,
        }
    }

    /// Position of the current value inside the draw window, in `0..=1`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let span = self.last_value - self.first_value;
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.first_value) / span).clamp(0.0, 1.0)
    }
}

pub type InitFn<C, S> = dyn FnMut(&mut C, &mut S, &DrawState, &LayoutParams) -> DrawFlow;
pub type EachFn<C, S> = dyn FnMut(&mut C, &mut S, &DrawState, &LayoutParams);

/// One callback bundle run for every accepted value of a level.
pub struct DrawCall<C, S> {
    pub(crate) init: Option<Box<InitFn<C, S>>>,
    pub(crate) each: Box<EachFn<C, S>>,
    pub(crate) finish: Option<Box<EachFn<C, S>>>,
}

impl<C, S> DrawCall<C, S> {
    #[must_use]
    pub fn new(each: impl FnMut(&mut C, &mut S, &DrawState, &LayoutParams) + 'static) -> Self {
        Self {
            init: None,
            each: Box::new(each),
            finish: None,
        }
    }

    /// Hook run before the first value; `DrawFlow::Stop` skips this bundle.
    #[must_use]
    pub fn with_init(
        mut self,
        init: impl FnMut(&mut C, &mut S, &DrawState, &LayoutParams) -> DrawFlow + 'static,
    ) -> Self {
        self.init = Some(Box::new(init));
        self
    }

    /// Hook run once after the last value.
    #[must_use]
    pub fn with_finish(
        mut self,
        finish: impl FnMut(&mut C, &mut S, &DrawState, &LayoutParams) + 'static,
    ) -> Self {
        self.finish = Some(Box::new(finish));
        self
    }
}

impl<C, S> std::fmt::Debug for DrawCall<C, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawCall")
            .field("init", &self.init.is_some())
            .field("finish", &self.finish.is_some())
            .finish_non_exhaustive()
    }
}

/// A tick level: its grid plus the ordered draw-call bundles that render it.
#[derive(Debug)]
pub struct TickLevel<C, S> {
    pub grid: TickGrid,
    pub draw_calls: SmallVec<[DrawCall<C, S>; 1]>,
}

impl<C, S> TickLevel<C, S> {
    #[must_use]
    pub fn new(grid: TickGrid, draw_call: DrawCall<C, S>) -> Self {
        Self {
            grid,
            draw_calls: smallvec![draw_call],
        }
    }

    /// A level with no bundles yet; ticks are selected but nothing is drawn.
    #[must_use]
    pub fn bare(grid: TickGrid) -> Self {
        Self {
            grid,
            draw_calls: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_draw_call(mut self, draw_call: DrawCall<C, S>) -> Self {
        self.draw_calls.push(draw_call);
        self
    }
}
