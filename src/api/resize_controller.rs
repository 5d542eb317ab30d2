use tracing::debug;

use crate::error::{TickError, TickResult};
use crate::render::{SurfaceSize, TickSurface};

use super::{ElementSize, TickEngine, TickHost, WhenResized};

impl<C, S, H> TickEngine<C, S, H>
where
    S: Default,
    H: TickHost,
{
    /// Element whose size the engine currently follows.
    #[must_use]
    pub fn keep_same_size_with(&self) -> Option<&H::Element> {
        self.observed.as_ref()
    }

    /// Starts following `element` (or stops following with `None`).
    ///
    /// The previous element, if any, is unobserved first; setting the same
    /// element again is a no-op.
    pub fn set_keep_same_size_with(&mut self, element: Option<H::Element>) {
        if self.observed == element {
            return;
        }
        if let Some(previous) = self.observed.take() {
            self.host.unobserve(&previous);
        }
        if let Some(next) = element.as_ref() {
            self.host.observe(next);
        }
        debug!(tracking = element.is_some(), "tracked element changed");
        self.observed = element;
    }

    /// Scales a logical element size into device pixels and stores it in the
    /// params, using `pixel_ratio` or else the host's device pixel ratio.
    pub fn apply_element_size(&mut self, size: ElementSize) -> TickResult<SurfaceSize> {
        let surface_size = self.surface_size_for(size)?;
        self.commit_surface_size(surface_size);
        Ok(surface_size)
    }

    /// Device-pixel backing size for `size`, without touching the params.
    ///
    /// A zero size is valid: a collapsed element simply has nothing to draw.
    pub fn surface_size_for(&self, size: ElementSize) -> TickResult<SurfaceSize> {
        if !size.width.is_finite() || !size.height.is_finite() || size.width < 0.0 || size.height < 0.0
        {
            return Err(TickError::InvalidData(format!(
                "element size must be finite and >= 0: width={}, height={}",
                size.width, size.height
            )));
        }

        let ratio = self
            .params
            .pixel_ratio
            .unwrap_or_else(|| self.host.device_pixel_ratio());
        Ok(SurfaceSize::new(
            size.width * ratio,
            size.height * ratio,
            size.width,
            size.height,
        ))
    }

    fn commit_surface_size(&mut self, size: SurfaceSize) {
        self.params.width = size.width;
        self.params.height = size.height;
        debug!(
            width = size.width,
            height = size.height,
            css_width = size.css_width,
            css_height = size.css_height,
            "element resized"
        );
    }

    /// Handles a size notification for the tracked element.
    ///
    /// Resizes the surface backing store first and only then stores the new
    /// size in the params, so a rejected resize leaves both untouched. Runs
    /// the `WhenResized` policy afterwards. Returns `false` when no element
    /// is tracked.
    pub fn on_resize<Sf>(&mut self, size: ElementSize, surface: &mut Sf) -> TickResult<bool>
    where
        Sf: TickSurface<Context = C>,
    {
        if self.observed.is_none() {
            return Ok(false);
        }

        let surface_size = self.surface_size_for(size)?;
        surface.resize(surface_size)?;
        self.commit_surface_size(surface_size);

        match self.when_resized {
            WhenResized::DoNothing => {}
            WhenResized::DrawImmediately => {
                self.draw(surface)?;
            }
            WhenResized::DrawOnNextFrame => self.set_draw_next_frame(true),
        }
        Ok(true)
    }
}
