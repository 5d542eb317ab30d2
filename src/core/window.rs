use serde::{Deserialize, Serialize};

use crate::core::LayoutParams;

/// Value range covered by one draw, including redundancy margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleWindow {
    /// Signed distance (in pixels along the direction) to the start edge, minus redundancy.
    pub start_unit: f64,
    /// Distance to the end edge, plus redundancy.
    pub end_unit: f64,
    pub first_value: f64,
    pub last_value: f64,
}

impl VisibleWindow {
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.first_value.is_finite() && self.last_value.is_finite()
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.first_value && value <= self.last_value
    }
}

/// Computes the visible value window for the current params.
///
/// Expects `params.density` to be already clamped.
#[must_use]
pub fn visible_window(params: &LayoutParams) -> VisibleWindow {
    let (origin_x, origin_y) = params.origin();
    let (dx, dy) = (params.direction_x, params.direction_y);
    let (width, height) = (params.width, params.height);

    let start_unit =
        -unit_to_edge(origin_x, origin_y, -dx, -dy, width, height) - params.redundancy;
    let end_unit = unit_to_edge(origin_x, origin_y, dx, dy, width, height) + params.redundancy;

    let first_value = params.value + start_unit * params.density;
    let first_value = params.min.map_or(first_value, |min| min.max(first_value));
    let last_value = params.value + end_unit * params.density;
    let last_value = params.max.map_or(last_value, |max| max.min(last_value));

    VisibleWindow {
        start_unit,
        end_unit,
        first_value,
        last_value,
    }
}

fn is_infinitesimal(n: f64) -> bool {
    n.abs() <= f64::EPSILON
}

/// Steps along `(dx, dy)` from the origin until the tightest surface edge.
fn unit_to_edge(origin_x: f64, origin_y: f64, dx: f64, dy: f64, width: f64, height: f64) -> f64 {
    let along_x = if is_infinitesimal(dx) {
        f64::INFINITY
    } else if dx > 0.0 {
        (width - origin_x) / dx
    } else {
        -origin_x / dx
    };
    let along_y = if is_infinitesimal(dy) {
        f64::INFINITY
    } else if dy > 0.0 {
        (height - origin_y) / dy
    } else {
        -origin_y / dy
    };
    along_x.min(along_y)
}
