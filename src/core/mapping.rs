use crate::core::LayoutParams;

/// Maps an axis value to its pixel position.
///
/// The anchor value always lands exactly on the anchor pixel.
#[must_use]
pub fn map_value_to_point(value: f64, params: &LayoutParams) -> (f64, f64) {
    let delta = value - params.value;
    let (origin_x, origin_y) = params.origin();
    (
        delta * params.direction_x / params.density + origin_x,
        delta * params.direction_y / params.density + origin_y,
    )
}

/// Projects a pixel position onto the axis line and returns its value.
///
/// Returns `None` for a zero direction vector.
#[must_use]
pub fn map_point_to_value(x: f64, y: f64, params: &LayoutParams) -> Option<f64> {
    let (dx, dy) = (params.direction_x, params.direction_y);
    let norm_sq = dx * dx + dy * dy;
    if norm_sq <= f64::EPSILON {
        return None;
    }

    let (origin_x, origin_y) = params.origin();
    let along = (x - origin_x) * dx + (y - origin_y) * dy;
    Some(params.value + along * params.density / norm_sq)
}

/// Per-value pixel step along each axis, precomputed once per draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointMapper {
    anchor_value: f64,
    origin_x: f64,
    origin_y: f64,
    step_x: f64,
    step_y: f64,
}

impl PointMapper {
    pub(crate) fn new(params: &LayoutParams) -> Self {
        let (origin_x, origin_y) = params.origin();
        Self {
            anchor_value: params.value,
            origin_x,
            origin_y,
            step_x: params.direction_x / params.density,
            step_y: params.direction_y / params.density,
        }
    }

    pub(crate) fn map(self, value: f64) -> (f64, f64) {
        let delta = value - self.anchor_value;
        (
            delta * self.step_x + self.origin_x,
            delta * self.step_y + self.origin_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputed_mapper_matches_free_function() {
        let params = LayoutParams::DEFAULT
            .with_value(12.5)
            .with_anchor(0.25, 0.5)
            .with_direction(0.6, -0.8)
            .with_density(0.4)
            .with_size(320.0, 240.0);
        let mapper = PointMapper::new(&params);

        for value in [-40.0, 0.0, 12.5, 13.0, 99.75] {
            let (ax, ay) = map_value_to_point(value, &params);
            let (bx, by) = mapper.map(value);
            assert!((ax - bx).abs() <= 1e-9);
            assert!((ay - by).abs() <= 1e-9);
        }
    }
}
