//! Rigid transformations of minutiae.
//!
//! Rotation works in a frame centred on `(center_row, center_col)` with `y`
//! pointing up, so a positive angle turns counter-clockwise on screen.
//! Results are rounded back to integer pixels.

use crate::minutia::Minutia;
use crate::util::math::{deg_to_rad, round_half_up};

/// Rotation about a centre followed by a translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RigidTransform {
    pub center_row: i32,
    pub center_col: i32,
    /// Subtracted from the row after rotation.
    pub row_shift: i32,
    /// Subtracted from the column after rotation.
    pub col_shift: i32,
    pub rotation_deg: i32,
}

impl RigidTransform {
    /// Applies the transform to one minutia.
    pub fn apply(&self, minutia: &Minutia) -> Minutia {
        apply_transformation(
            minutia,
            self.center_row,
            self.center_col,
            self.row_shift,
            self.col_shift,
            self.rotation_deg,
        )
    }

    /// Transforms `src` into `dst`, reusing its allocation.
    pub fn apply_all_into(&self, src: &[Minutia], dst: &mut Vec<Minutia>) {
        dst.clear();
        dst.reserve(src.len());
        dst.extend(src.iter().map(|m| self.apply(m)));
    }
}

/// Rotates `minutia` by `rotation_deg` about `(center_row, center_col)`.
///
/// The orientation becomes `(orientation + rotation_deg) % 360` with the
/// remainder taking the sign of the dividend, so it can be negative.
pub fn apply_rotation(
    minutia: &Minutia,
    center_row: i32,
    center_col: i32,
    rotation_deg: i32,
) -> Minutia {
    let theta = deg_to_rad(rotation_deg);
    let (sin, cos) = theta.sin_cos();
    let x = f64::from(minutia.col - center_col);
    let y = f64::from(center_row - minutia.row);
    let rx = x * cos - y * sin;
    let ry = x * sin + y * cos;
    Minutia {
        row: round_half_up(f64::from(center_row) - ry),
        col: round_half_up(rx + f64::from(center_col)),
        orientation: (minutia.orientation + rotation_deg) % 360,
    }
}

/// Shifts `minutia` by `(-row_shift, -col_shift)`.
pub fn apply_translation(minutia: &Minutia, row_shift: i32, col_shift: i32) -> Minutia {
    Minutia {
        row: minutia.row - row_shift,
        col: minutia.col - col_shift,
        orientation: minutia.orientation,
    }
}

/// Rotation about `(center_row, center_col)` then translation.
pub fn apply_transformation(
    minutia: &Minutia,
    center_row: i32,
    center_col: i32,
    row_shift: i32,
    col_shift: i32,
    rotation_deg: i32,
) -> Minutia {
    let rotated = apply_rotation(minutia, center_row, center_col, rotation_deg);
    apply_translation(&rotated, row_shift, col_shift)
}

/// Applies [`apply_transformation`] to every minutia, preserving order.
pub fn apply_transformation_all(
    minutiae: &[Minutia],
    center_row: i32,
    center_col: i32,
    row_shift: i32,
    col_shift: i32,
    rotation_deg: i32,
) -> Vec<Minutia> {
    let transform = RigidTransform {
        center_row,
        center_col,
        row_shift,
        col_shift,
        rotation_deg,
    };
    let mut out = Vec::with_capacity(minutiae.len());
    transform.apply_all_into(minutiae, &mut out);
    out
}
