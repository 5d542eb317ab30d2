//! Pan and zoom helpers acting directly on `LayoutParams`.

use crate::core::{LayoutParams, map_point_to_value};
use crate::error::{TickError, TickResult};

/// Moves the content by a pixel delta, as when dragging the ruler.
///
/// Only the component along the direction vector has an effect; the value
/// under the pointer follows the pointer.
pub fn pan_by_pixels(params: &mut LayoutParams, delta_x: f64, delta_y: f64) -> TickResult<()> {
    if !delta_x.is_finite() || !delta_y.is_finite() {
        return Err(TickError::InvalidData(
            "pan delta must be finite".to_owned(),
        ));
    }

    let (dx, dy) = (params.direction_x, params.direction_y);
    let norm_sq = dx * dx + dy * dy;
    if norm_sq <= f64::EPSILON {
        return Ok(());
    }

    let along = delta_x * dx + delta_y * dy;
    params.value -= along * params.density / norm_sq;
    Ok(())
}

/// Zooms by `factor` keeping the value under pixel `(x, y)` fixed.
///
/// A factor above 1 zooms in. The resulting density is clamped, so the fixed
/// point only holds while the bounds allow the full factor.
pub fn zoom_around_point(params: &mut LayoutParams, x: f64, y: f64, factor: f64) -> TickResult<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(TickError::InvalidData(
            "zoom factor must be finite and > 0".to_owned(),
        ));
    }
    let Some(pinned) = map_point_to_value(x, y, params) else {
        return Ok(());
    };

    let old_density = params.density;
    params.density /= factor;
    params.clamp_density();

    // The pinned value keeps its pixel offset from the anchor.
    let scale = params.density / old_density;
    params.value = pinned - (pinned - params.value) * scale;
    Ok(())
}
