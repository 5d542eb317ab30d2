use tracing::{debug, trace};

use crate::core::{TickLayout, compute_layout, mapping::PointMapper};
use crate::error::TickResult;
use crate::render::TickSurface;

use super::{DrawFlow, DrawState, TickEngine, TickHost};

/// Summary of one completed draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStats {
    pub levels_drawn: usize,
    pub bundles_run: usize,
    pub bundles_skipped: usize,
    pub ticks_visited: usize,
    /// `init_draw` asked to stop before any level ran.
    pub aborted: bool,
}

impl<C, S, H> TickEngine<C, S, H>
where
    S: Default,
    H: TickHost,
{
    /// Draws every visible tick level onto `surface`.
    ///
    /// Density is clamped into `[min_density, max_density]` first; the clamped
    /// value stays in the params. A pending next-frame draw is cancelled since
    /// this pass supersedes it.
    pub fn draw<Sf>(&mut self, surface: &mut Sf) -> TickResult<DrawStats>
    where
        Sf: TickSurface<Context = C>,
    {
        self.set_draw_next_frame(false);
        self.params.validate()?;
        if self.params.clamp_density() {
            debug!(density = self.params.density, "density clamped into bounds");
        }

        let layout = compute_layout(&self.params, &self.grids());
        debug!(
            density = layout.density,
            first_value = layout.window.first_value,
            last_value = layout.window.last_value,
            levels = layout.levels.len(),
            ticks = layout.tick_count(),
            "draw ticks"
        );

        surface.with_context(|context| self.run_callbacks(context, &layout))
    }

    fn run_callbacks(&mut self, context: &mut C, layout: &TickLayout) -> DrawStats {
        let mut stats = DrawStats::default();
        let mut store = self.new_store();
        let mut state = DrawState::new(layout.window.first_value, layout.window.last_value);

        let Self {
            params,
            levels,
            init_draw,
            final_draw,
            ..
        } = self;
        let params = &*params;

        if let Some(init_draw) = init_draw.as_mut() {
            if init_draw(context, &mut store, &state, params) == DrawFlow::Stop {
                debug!("init_draw stopped the draw");
                stats.aborted = true;
                return stats;
            }
        }

        let mapper = PointMapper::new(params);
        for ticks in &layout.levels {
            let Some(level) = levels.get_mut(ticks.level) else {
                continue;
            };
            stats.levels_drawn += 1;

            for draw_call in &mut level.draw_calls {
                if let Some(init) = draw_call.init.as_mut() {
                    if init(context, &mut store, &state, params) == DrawFlow::Stop {
                        trace!(level = ticks.level, "draw call skipped by init");
                        stats.bundles_skipped += 1;
                        continue;
                    }
                }

                for &value in &ticks.values {
                    let (x, y) = mapper.map(value);
                    state.value = value;
                    state.x = x;
                    state.y = y;
                    (draw_call.each)(context, &mut store, &state, params);
                    stats.ticks_visited += 1;
                }

                if let Some(finish) = draw_call.finish.as_mut() {
                    finish(context, &mut store, &state, params);
                }
                stats.bundles_run += 1;
            }
        }

        if let Some(final_draw) = final_draw.as_mut() {
            final_draw(context, &mut store, &state, params);
        }

        stats
    }
}
