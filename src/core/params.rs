use serde::{Deserialize, Serialize};

use crate::error::{TickError, TickResult};

/// Order in which tick levels claim values when resolving shy overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShyResolution {
    /// Level 0 claims first; shy levels drop values already claimed by a
    /// lower-indexed level. Level 0 itself is never suppressed.
    ///
    /// Code ported from the top-down filter where level 0 only tests and
    /// never records should pick `FineFirst` instead.
    #[default]
    CoarseFirst,
    /// Highest level claims first; every level above 0 records its values and
    /// a shy lower level drops values recorded by the levels above it.
    /// Level 0 never records.
    FineFirst,
}

/// Layout of one axis inside a 2D drawing surface.
///
/// `density` is expressed in value units per pixel: lower density means more
/// pixels per unit (zoomed in).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Value mapped onto the anchor point.
    pub value: f64,
    /// Hard lower clamp on the visible window.
    pub min: Option<f64>,
    /// Hard upper clamp on the visible window.
    pub max: Option<f64>,
    /// Extra value units generated past each viewport edge.
    pub redundancy: f64,
    /// Normalized (0..1) horizontal position of the anchor.
    pub anchor_x: f64,
    /// Normalized (0..1) vertical position of the anchor.
    pub anchor_y: f64,
    pub direction_x: f64,
    pub direction_y: f64,
    pub density: f64,
    pub min_density: f64,
    pub max_density: f64,
    pub width: f64,
    pub height: f64,
    /// Overrides the host device pixel ratio when scaling resize notifications.
    pub pixel_ratio: Option<f64>,
    pub shy_resolution: ShyResolution,
}

impl LayoutParams {
    pub const DEFAULT: Self = Self {
        value: 0.0,
        min: None,
        max: None,
        redundancy: 1.0,
        anchor_x: 0.0,
        anchor_y: 0.0,
        direction_x: 1.0,
        direction_y: 0.0,
        density: 0.1,
        min_density: 0.02,
        max_density: 100.0,
        width: 100.0,
        height: 20.0,
        pixel_ratio: None,
        shy_resolution: ShyResolution::CoarseFirst,
    };

    /// Merges caller-supplied overrides onto the default configuration.
    #[must_use]
    pub fn with_overrides(overrides: LayoutOverrides) -> Self {
        Self::DEFAULT.merged(overrides)
    }

    /// Loads a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json_str(input: &str) -> TickResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TickError::InvalidData(format!("failed to parse layout params: {e}")))
    }

    pub fn to_json_pretty(&self) -> TickResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TickError::InvalidData(format!("failed to serialize layout params: {e}")))
    }

    #[must_use]
    pub fn merged(mut self, overrides: LayoutOverrides) -> Self {
        let LayoutOverrides {
            value,
            min,
            max,
            redundancy,
            anchor_x,
            anchor_y,
            direction_x,
            direction_y,
            density,
            min_density,
            max_density,
            width,
            height,
            pixel_ratio,
            shy_resolution,
        } = overrides;

        self.value = value.unwrap_or(self.value);
        self.min = min.or(self.min);
        self.max = max.or(self.max);
        self.redundancy = redundancy.unwrap_or(self.redundancy);
        self.anchor_x = anchor_x.unwrap_or(self.anchor_x);
        self.anchor_y = anchor_y.unwrap_or(self.anchor_y);
        self.direction_x = direction_x.unwrap_or(self.direction_x);
        self.direction_y = direction_y.unwrap_or(self.direction_y);
        self.density = density.unwrap_or(self.density);
        self.min_density = min_density.unwrap_or(self.min_density);
        self.max_density = max_density.unwrap_or(self.max_density);
        self.width = width.unwrap_or(self.width);
        self.height = height.unwrap_or(self.height);
        self.pixel_ratio = pixel_ratio.or(self.pixel_ratio);
        self.shy_resolution = shy_resolution.unwrap_or(self.shy_resolution);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_redundancy(mut self, redundancy: f64) -> Self {
        self.redundancy = redundancy;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor_x: f64, anchor_y: f64) -> Self {
        self.anchor_x = anchor_x;
        self.anchor_y = anchor_y;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction_x: f64, direction_y: f64) -> Self {
        self.direction_x = direction_x;
        self.direction_y = direction_y;
        self
    }

    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn with_density_bounds(mut self, min_density: f64, max_density: f64) -> Self {
        self.min_density = min_density;
        self.max_density = max_density;
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: Option<f64>) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    #[must_use]
    pub fn with_shy_resolution(mut self, shy_resolution: ShyResolution) -> Self {
        self.shy_resolution = shy_resolution;
        self
    }

    /// Pixel position of the anchor value.
    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.anchor_x * self.width, self.anchor_y * self.height)
    }

    /// Forces `density` into `[min_density, max_density]`.
    ///
    /// Returns `true` when the density had to be corrected.
    pub fn clamp_density(&mut self) -> bool {
        if self.density < self.min_density {
            self.density = self.min_density;
            true
        } else if self.density > self.max_density {
            self.density = self.max_density;
            true
        } else {
            false
        }
    }

    pub fn validate(&self) -> TickResult<()> {
        for (name, value) in [
            ("value", self.value),
            ("redundancy", self.redundancy),
            ("anchor_x", self.anchor_x),
            ("anchor_y", self.anchor_y),
            ("direction_x", self.direction_x),
            ("direction_y", self.direction_y),
            ("density", self.density),
            ("min_density", self.min_density),
            ("max_density", self.max_density),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(TickError::InvalidParams(format!(
                    "`{name}` must be finite"
                )));
            }
        }

        if self.min_density <= 0.0 {
            return Err(TickError::InvalidParams(
                "`min_density` must be > 0".to_owned(),
            ));
        }
        if self.min_density > self.max_density {
            return Err(TickError::InvalidParams(format!(
                "`min_density` ({}) must not exceed `max_density` ({})",
                self.min_density, self.max_density
            )));
        }
        if self.redundancy < 0.0 {
            return Err(TickError::InvalidParams(
                "`redundancy` must be >= 0".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(TickError::InvalidParams(
                "surface size must be >= 0".to_owned(),
            ));
        }

        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(TickError::InvalidParams(format!(
                    "`{name}` must be finite when set"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(TickError::InvalidParams(format!(
                    "`min` ({min}) must not exceed `max` ({max})"
                )));
            }
        }

        if let Some(ratio) = self.pixel_ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(TickError::InvalidParams(
                    "`pixel_ratio` must be finite and > 0".to_owned(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sparse set of `LayoutParams` fields; `None` keeps the default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOverrides {
    pub value: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub redundancy: Option<f64>,
    pub anchor_x: Option<f64>,
    pub anchor_y: Option<f64>,
    pub direction_x: Option<f64>,
    pub direction_y: Option<f64>,
    pub density: Option<f64>,
    pub min_density: Option<f64>,
    pub max_density: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub pixel_ratio: Option<f64>,
    pub shy_resolution: Option<ShyResolution>,
}
