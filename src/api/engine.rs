use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LayoutParams, TickGrid, TickLayout, compute_layout};
use crate::error::TickResult;

use super::{DrawFlow, DrawState, FrameRequestId, HeadlessHost, TickHost, TickLevel};

/// Default store threaded through callbacks when the caller brings none.
pub type TickStore = serde_json::Map<String, serde_json::Value>;

/// Reaction to a resize notification from the tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WhenResized {
    #[default]
    DoNothing,
    DrawImmediately,
    DrawOnNextFrame,
}

pub(super) type StoreFactory<S> = dyn Fn() -> S;
pub(super) type DrawHook<C, S> = dyn FnMut(&mut C, &mut S, &DrawState, &LayoutParams) -> DrawFlow;
pub(super) type FinalHook<C, S> = dyn FnMut(&mut C, &mut S, &DrawState, &LayoutParams);

/// Tick layout engine for one ruler/axis.
///
/// `C` is the drawing context handed to callbacks, `S` the per-draw store and
/// `H` the platform host providing frame scheduling and size observation.
pub struct TickEngine<C, S = TickStore, H: TickHost = HeadlessHost> {
    pub(super) params: LayoutParams,
    pub(super) levels: Vec<TickLevel<C, S>>,
    pub(super) store_factory: Option<Box<StoreFactory<S>>>,
    pub(super) init_draw: Option<Box<DrawHook<C, S>>>,
    pub(super) final_draw: Option<Box<FinalHook<C, S>>>,
    pub(super) when_resized: WhenResized,
    pub(super) host: H,
    pub(super) pending_frame: Option<FrameRequestId>,
    pub(super) observed: Option<H::Element>,
}

impl<C, S, H> TickEngine<C, S, H>
where
    S: Default,
    H: TickHost + Default,
{
    pub fn new(levels: Vec<TickLevel<C, S>>, params: LayoutParams) -> TickResult<Self> {
        Self::with_host(H::default(), levels, params)
    }
}

impl<C, S, H> TickEngine<C, S, H>
where
    S: Default,
    H: TickHost,
{
    pub fn with_host(
        host: H,
        levels: Vec<TickLevel<C, S>>,
        params: LayoutParams,
    ) -> TickResult<Self> {
        params.validate()?;
        validate_levels(&levels)?;
        debug!(levels = levels.len(), density = params.density, "create tick engine");

        Ok(Self {
            params,
            levels,
            store_factory: None,
            init_draw: None,
            final_draw: None,
            when_resized: WhenResized::DoNothing,
            host,
            pending_frame: None,
            observed: None,
        })
    }

    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Direct mutable access; values are re-validated at the next draw.
    pub fn params_mut(&mut self) -> &mut LayoutParams {
        &mut self.params
    }

    pub fn set_params(&mut self, params: LayoutParams) -> TickResult<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    #[must_use]
    pub fn levels(&self) -> &[TickLevel<C, S>] {
        &self.levels
    }

    /// Direct mutable access; invalid grids are skipped at draw time.
    pub fn levels_mut(&mut self) -> &mut Vec<TickLevel<C, S>> {
        &mut self.levels
    }

    pub fn set_levels(&mut self, levels: Vec<TickLevel<C, S>>) -> TickResult<()> {
        validate_levels(&levels)?;
        self.levels = levels;
        Ok(())
    }

    pub fn push_level(&mut self, level: TickLevel<C, S>) -> TickResult<()> {
        level.grid.validate(self.levels.len())?;
        self.levels.push(level);
        Ok(())
    }

    #[must_use]
    pub fn grids(&self) -> Vec<TickGrid> {
        self.levels.iter().map(|level| level.grid).collect()
    }

    pub fn set_store_factory(&mut self, factory: impl Fn() -> S + 'static) {
        self.store_factory = Some(Box::new(factory));
    }

    /// Hook run once before any level; `DrawFlow::Stop` aborts the draw.
    pub fn set_init_draw(
        &mut self,
        hook: impl FnMut(&mut C, &mut S, &DrawState, &LayoutParams) -> DrawFlow + 'static,
    ) {
        self.init_draw = Some(Box::new(hook));
    }

    /// Hook run once after every level was drawn.
    pub fn set_final_draw(
        &mut self,
        hook: impl FnMut(&mut C, &mut S, &DrawState, &LayoutParams) + 'static,
    ) {
        self.final_draw = Some(Box::new(hook));
    }

    #[must_use]
    pub fn when_resized(&self) -> WhenResized {
        self.when_resized
    }

    pub fn set_when_resized(&mut self, policy: WhenResized) {
        self.when_resized = policy;
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Clamps density and selects ticks without drawing anything.
    pub fn layout(&mut self) -> TickResult<TickLayout> {
        self.params.validate()?;
        self.params.clamp_density();
        Ok(compute_layout(&self.params, &self.grids()))
    }

    pub(super) fn new_store(&self) -> S {
        self.store_factory
            .as_ref()
            .map_or_else(S::default, |factory| factory())
    }
}

fn validate_levels<C, S>(levels: &[TickLevel<C, S>]) -> TickResult<()> {
    for (index, level) in levels.iter().enumerate() {
        level.grid.validate(index)?;
    }
    Ok(())
}
