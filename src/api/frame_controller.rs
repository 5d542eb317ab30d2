use tracing::{debug, trace};

use crate::error::TickResult;
use crate::render::TickSurface;

use super::{FrameRequestId, TickEngine, TickHost};

impl<C, S, H> TickEngine<C, S, H>
where
    S: Default,
    H: TickHost,
{
    /// Whether a redraw is scheduled for the next frame.
    #[must_use]
    pub fn draw_next_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Schedules (`true`) or cancels (`false`) a redraw on the next frame.
    ///
    /// Both directions are idempotent: at most one request is pending.
    pub fn set_draw_next_frame(&mut self, draw: bool) {
        if draw == self.draw_next_frame() {
            return;
        }

        match self.pending_frame.take() {
            Some(id) => {
                self.host.cancel_frame(id);
                debug!(frame = id.0, "cancelled next-frame draw");
            }
            None => {
                let id = self.host.request_frame();
                self.pending_frame = Some(id);
                debug!(frame = id.0, "scheduled next-frame draw");
            }
        }
    }

    /// Forwards a fired frame request from the host.
    ///
    /// Draws and returns `true` only when `id` is the pending request; stale
    /// or cancelled ids are ignored.
    pub fn on_animation_frame<Sf>(&mut self, id: FrameRequestId, surface: &mut Sf) -> TickResult<bool>
    where
        Sf: TickSurface<Context = C>,
    {
        if self.pending_frame != Some(id) {
            trace!(frame = id.0, "ignoring stale frame");
            return Ok(false);
        }

        // Already fired on the host side; nothing left to cancel.
        self.pending_frame = None;
        self.draw(surface)?;
        Ok(true)
    }
}
