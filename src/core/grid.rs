use serde::{Deserialize, Serialize};

use crate::error::{TickError, TickResult};

/// Spacing rules of one tick level, independent of how its ticks are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGrid {
    /// Distance between consecutive ticks, in value units. Must be > 0.
    pub multiply: f64,
    /// Phase of the grid: ticks sit on `zero_offset + n * multiply`.
    #[serde(default)]
    pub zero_offset: f64,
    /// The level is hidden while the density is above this threshold.
    #[serde(default)]
    pub max_density_to_show: Option<f64>,
    /// Shy ticks give way to values already claimed by other levels.
    #[serde(default)]
    pub shy: bool,
}

impl TickGrid {
    #[must_use]
    pub const fn new(multiply: f64) -> Self {
        Self {
            multiply,
            zero_offset: 0.0,
            max_density_to_show: None,
            shy: false,
        }
    }

    #[must_use]
    pub const fn with_zero_offset(mut self, zero_offset: f64) -> Self {
        self.zero_offset = zero_offset;
        self
    }

    #[must_use]
    pub const fn with_max_density_to_show(mut self, max_density: f64) -> Self {
        self.max_density_to_show = Some(max_density);
        self
    }

    #[must_use]
    pub const fn shy(mut self) -> Self {
        self.shy = true;
        self
    }

    /// Whether the level is shown at the given density.
    #[must_use]
    pub fn shows_at(&self, density: f64) -> bool {
        self.max_density_to_show
            .is_none_or(|max_density| max_density >= density)
    }

    /// Integer grid index of the smallest grid value at or above `value`.
    #[must_use]
    pub fn first_index_at_or_above(&self, value: f64) -> f64 {
        ((value - self.zero_offset) / self.multiply).ceil()
    }

    /// Grid value at integer index `index`.
    #[must_use]
    pub fn value_at(&self, index: f64) -> f64 {
        index * self.multiply + self.zero_offset
    }

    /// Smallest grid value at or above `value`.
    #[must_use]
    pub fn first_tick_value(&self, value: f64) -> f64 {
        self.value_at(self.first_index_at_or_above(value))
    }

    pub fn validate(&self, index: usize) -> TickResult<()> {
        let invalid = |reason: &str| TickError::InvalidLevel {
            index,
            reason: reason.to_owned(),
        };

        if !self.multiply.is_finite() || self.multiply <= 0.0 {
            return Err(invalid("`multiply` must be finite and > 0"));
        }
        if !self.zero_offset.is_finite() {
            return Err(invalid("`zero_offset` must be finite"));
        }
        if self
            .max_density_to_show
            .is_some_and(|max_density| !max_density.is_finite())
        {
            return Err(invalid("`max_density_to_show` must be finite when set"));
        }
        Ok(())
    }
}
