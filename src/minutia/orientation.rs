//! Local ridge orientation from a least-squares fit of the windowed component.
//!
//! Coordinates are re-centred on the minutia with `x` to the right and `y`
//! upward. The fitted slope gives the ridge line; which side of the
//! perpendicular holds most of the component decides the direction along it.

use crate::image::BinaryImage;
use crate::minutia::connectivity::WindowComponent;
use crate::util::math::rad_to_positive_deg;
use std::f64::consts::{FRAC_PI_2, PI};

/// A component pixel relative to the minutia (`x` right, `y` up).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RidgePoint {
    pub x: i32,
    pub y: i32,
}

impl RidgePoint {
    fn from_pixel(row: usize, col: usize, center_row: usize, center_col: usize) -> Self {
        Self {
            x: col as i32 - center_col as i32,
            y: center_row as i32 - row as i32,
        }
    }
}

/// Collects the ridge pixels of `mask` relative to `(row, col)`, in row-major order.
pub fn ridge_points(mask: &BinaryImage, row: usize, col: usize) -> Vec<RidgePoint> {
    let mut points = Vec::new();
    for r in 0..mask.rows() {
        let Some(pixels) = mask.row(r) else {
            continue;
        };
        for (c, _) in pixels.iter().enumerate().filter(|&(_, &on)| on) {
            points.push(RidgePoint::from_pixel(r, c, row, col));
        }
    }
    points
}

/// Least-squares slope of the ridge through the origin.
///
/// Returns `+inf` when every point has `x = 0`. When the points spread more
/// vertically than horizontally the result is `Syy / Sxy`, which is `+inf`
/// for `Sxy = 0`; the angle estimation treats that as a vertical ridge.
pub fn compute_slope(points: &[RidgePoint]) -> f64 {
    let mut sum_xx = 0.0f64;
    let mut sum_yy = 0.0f64;
    let mut sum_xy = 0.0f64;
    for p in points {
        let x = f64::from(p.x);
        let y = f64::from(p.y);
        sum_xx += x * x;
        sum_yy += y * y;
        sum_xy += x * y;
    }

    if sum_xx == 0.0 {
        f64::INFINITY
    } else if sum_xx >= sum_yy {
        sum_xy / sum_xx
    } else {
        sum_yy / sum_xy
    }
}

/// Direction of the ridge in radians, in `[-pi/2, 3pi/2)`.
///
/// Points are split by the line through the origin perpendicular to the
/// ridge; the ridge points towards the side holding strictly more of them.
pub fn compute_angle(points: &[RidgePoint], slope: f64) -> f64 {
    let mut up = 0usize;
    let mut down = 0usize;
    for p in points {
        let x = f64::from(p.x);
        let y = f64::from(p.y);
        let is_up = if slope == 0.0 {
            x > 0.0
        } else if slope == f64::INFINITY {
            y > 0.0
        } else {
            y >= (-1.0 / slope) * x
        };
        if is_up {
            up += 1;
        } else {
            down += 1;
        }
    }

    if slope == f64::INFINITY {
        return if up > down { FRAC_PI_2 } else { -FRAC_PI_2 };
    }

    let angle = slope.atan();
    if (up > down && angle < 0.0) || (down >= up && angle >= 0.0) {
        angle + PI
    } else {
        angle
    }
}

/// Orientation of the ridge at `(row, col)` in integer degrees, in `[0, 360)`.
///
/// Uses the component of ridge pixels connected to the minutia inside a
/// window of half-size `distance`. Returns `None` if `(row, col)` is out of
/// bounds.
pub fn compute_orientation(
    image: &BinaryImage,
    row: usize,
    col: usize,
    distance: usize,
) -> Option<i32> {
    let component = WindowComponent::grow(image, row, col, distance)?;
    let points: Vec<RidgePoint> = component
        .pixels()
        .map(|(r, c)| RidgePoint::from_pixel(r, c, row, col))
        .collect();
    let slope = compute_slope(&points);
    let angle = compute_angle(&points, slope);
    Some(rad_to_positive_deg(angle))
}

#[cfg(test)]
mod tests {
    use super::{compute_angle, compute_slope, RidgePoint};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn pts(coords: &[(i32, i32)]) -> Vec<RidgePoint> {
        coords.iter().map(|&(x, y)| RidgePoint { x, y }).collect()
    }

    #[test]
    fn empty_component_is_vertical() {
        assert_eq!(compute_slope(&[]), f64::INFINITY);
        assert_eq!(compute_angle(&[], f64::INFINITY), -FRAC_PI_2);
    }

    #[test]
    fn uncorrelated_tall_component_is_vertical() {
        // Sxx = 2, Syy = 8, Sxy = 0.
        let points = pts(&[(1, 2), (-1, 2), (0, 0)]);
        assert_eq!(compute_slope(&points), f64::INFINITY);
        assert_eq!(compute_angle(&points, f64::INFINITY), FRAC_PI_2);
    }

    #[test]
    fn horizontal_ridge_points_towards_majority() {
        let left = pts(&[(0, 0), (-1, 0), (-2, 0), (-3, 0)]);
        let slope = compute_slope(&left);
        assert_eq!(slope, 0.0);
        assert!((compute_angle(&left, slope) - PI).abs() < 1e-12);

        let right = pts(&[(0, 0), (1, 0), (2, 0)]);
        assert_eq!(compute_angle(&right, 0.0), 0.0);
    }
}
