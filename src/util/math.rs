//! Rounding and angle helpers shared by orientation and transforms.

/// Rounds to the nearest integer with ties going towards positive infinity.
///
/// `-2.5` rounds to `-2`, unlike `f64::round` which gives `-3`.
pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Converts integer degrees to radians.
pub(crate) fn deg_to_rad(angle_deg: i32) -> f64 {
    f64::from(angle_deg) * (std::f64::consts::PI / 180.0)
}

/// Converts radians to integer degrees in `[0, 360)`.
///
/// Inputs are expected in `(-pi, 3pi/2]`, the range `compute_angle` produces.
pub(crate) fn rad_to_positive_deg(angle_rad: f64) -> i32 {
    let degrees = round_half_up(angle_rad.to_degrees());
    if degrees < 0 {
        degrees + 360
    } else {
        degrees
    }
}
