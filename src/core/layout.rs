use std::collections::BTreeSet;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{LayoutParams, ShyResolution, TickGrid, VisibleWindow, visible_window};

/// Upper bound on candidates generated for a single level in one draw.
pub const MAX_TICKS_PER_LEVEL: usize = 100_000;

/// Relative distance, in machine epsilons, under which two grid values are
/// the same tick position.
const CLAIM_TOLERANCE_ULPS: f64 = 16.0;

/// Accepted values of one level that survived the density and range gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTicks {
    /// Index of the level in the caller's definition list.
    pub level: usize,
    /// Accepted values in ascending order.
    pub values: Vec<f64>,
}

/// Result of tick selection for one draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLayout {
    pub window: VisibleWindow,
    pub density: f64,
    /// Surviving levels, in ascending definition order.
    pub levels: Vec<LevelTicks>,
}

impl TickLayout {
    /// Accepted values of the level defined at `level`, if it survived.
    #[must_use]
    pub fn values_of(&self, level: usize) -> Option<&[f64]> {
        self.levels
            .iter()
            .find(|ticks| ticks.level == level)
            .map(|ticks| ticks.values.as_slice())
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.levels.iter().map(|ticks| ticks.values.len()).sum()
    }
}

/// Candidate range of a level: `count` grid points from integer index `first_index`.
#[derive(Debug, Clone, Copy)]
struct Candidates {
    level: usize,
    grid: TickGrid,
    first_index: f64,
    count: usize,
}

impl Candidates {
    fn values(self) -> impl Iterator<Item = f64> {
        (0..self.count).map(move |n| self.grid.value_at(self.first_index + n as f64))
    }
}

/// Selects the tick values of every level for the given params.
///
/// Expects `params.density` to be already clamped; the engine does that
/// before calling in.
#[must_use]
pub fn compute_layout(params: &LayoutParams, grids: &[TickGrid]) -> TickLayout {
    let window = visible_window(params);
    let density = params.density;

    if !window.is_finite() {
        warn!(
            first_value = window.first_value,
            last_value = window.last_value,
            "visible window is unbounded; no ticks selected"
        );
        return TickLayout {
            window,
            density,
            levels: Vec::new(),
        };
    }

    let candidates: Vec<Candidates> = grids
        .iter()
        .enumerate()
        .filter(|(_, grid)| grid.shows_at(density))
        .filter_map(|(level, grid)| level_candidates(level, *grid, window))
        .collect();

    let levels = match params.shy_resolution {
        ShyResolution::CoarseFirst => resolve_coarse_first(&candidates),
        ShyResolution::FineFirst => resolve_fine_first(&candidates),
    };

    TickLayout {
        window,
        density,
        levels,
    }
}

fn level_candidates(level: usize, grid: TickGrid, window: VisibleWindow) -> Option<Candidates> {
    if grid.validate(level).is_err() {
        warn!(level, multiply = grid.multiply, "skipping invalid tick level");
        return None;
    }

    let first_index = grid.first_index_at_or_above(window.first_value);
    let first_tick = grid.value_at(first_index);
    if first_tick > window.last_value {
        trace!(level, "tick level has no candidate in the visible window");
        return None;
    }

    let steps = ((window.last_value - first_tick) / grid.multiply).floor();
    if steps >= MAX_TICKS_PER_LEVEL as f64 {
        warn!(
            level,
            steps,
            limit = MAX_TICKS_PER_LEVEL,
            "skipping tick level with too many candidates"
        );
        return None;
    }

    let count = steps as usize + 1;
    trace!(level, first_tick, count, "tick level candidates");
    Some(Candidates {
        level,
        grid,
        first_index,
        count,
    })
}

/// Values already taken by a level, compared with a tolerance so that
/// `3 * 0.1` and `15 * 0.02` count as one position.
#[derive(Debug)]
struct ClaimedValues {
    values: BTreeSet<OrderedFloat<f64>>,
    /// Magnitude below which the tolerance stops shrinking: the largest
    /// grid offset or the finest spacing, whichever is larger.
    scale_floor: f64,
}

impl ClaimedValues {
    fn new(candidates: &[Candidates]) -> Self {
        let finest = candidates
            .iter()
            .map(|level| level.grid.multiply)
            .fold(f64::INFINITY, f64::min);
        let widest_offset = candidates
            .iter()
            .map(|level| level.grid.zero_offset.abs())
            .fold(0.0, f64::max);
        Self {
            values: BTreeSet::new(),
            scale_floor: if finest.is_finite() {
                finest.max(widest_offset)
            } else {
                widest_offset
            },
        }
    }

    fn tolerance(&self, value: f64) -> f64 {
        CLAIM_TOLERANCE_ULPS * f64::EPSILON * value.abs().max(self.scale_floor)
    }

    fn contains(&self, value: f64) -> bool {
        let tolerance = self.tolerance(value);
        self.values
            .range(OrderedFloat(value - tolerance)..=OrderedFloat(value + tolerance))
            .next()
            .is_some()
    }

    fn insert(&mut self, value: f64) {
        self.values.insert(OrderedFloat(value));
    }
}

/// Level 0 claims first and is never suppressed; shy levels above it drop
/// values claimed by any lower-indexed level.
fn resolve_coarse_first(candidates: &[Candidates]) -> Vec<LevelTicks> {
    let mut claimed = ClaimedValues::new(candidates);
    let mut levels = Vec::with_capacity(candidates.len());

    for (position, level) in candidates.iter().enumerate() {
        let shy = level.grid.shy && position > 0;
        let mut values = Vec::with_capacity(level.count);
        for value in level.values() {
            if shy && claimed.contains(value) {
                continue;
            }
            values.push(value);
            claimed.insert(value);
        }
        levels.push(LevelTicks {
            level: level.level,
            values,
        });
    }

    levels
}

/// Highest level claims first. Levels above 0 always record what they accept;
/// level 0 only tests against the record.
fn resolve_fine_first(candidates: &[Candidates]) -> Vec<LevelTicks> {
    let mut claimed = ClaimedValues::new(candidates);
    let mut levels: Vec<LevelTicks> = Vec::with_capacity(candidates.len());

    for (position, level) in candidates.iter().enumerate().rev() {
        let shy = level.grid.shy;
        let mut values = Vec::with_capacity(level.count);
        for value in level.values() {
            if shy && claimed.contains(value) {
                continue;
            }
            values.push(value);
            if position > 0 {
                claimed.insert(value);
            }
        }
        levels.push(LevelTicks {
            level: level.level,
            values,
        });
    }

    levels.reverse();
    levels
}
