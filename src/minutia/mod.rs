//! Minutiae: ridge endings and bifurcations on a skeleton.
//!
//! Extraction scans the interior of a skeleton for pixels whose
//! neighbourhood has one or three background-to-ridge transitions, then
//! estimates a local ridge direction from the windowed connected component
//! around each one.

mod connectivity;
mod extract;
mod orientation;

pub use connectivity::connected_pixels;
pub use extract::{extract, extract_with, minutia_kind};
pub use orientation::{compute_angle, compute_orientation, compute_slope, ridge_points, RidgePoint};

use crate::skeleton::Neighbourhood;

/// Half-size of the window used to estimate a minutia's orientation.
pub const ORIENTATION_DISTANCE: usize = 16;

/// A ridge ending or bifurcation.
///
/// `row` and `col` follow image convention (row grows downward). Extracted
/// minutiae have `orientation` in `[0, 360)` degrees; rigidly transformed
/// copies may carry coordinates outside the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Minutia {
    /// Pixel row.
    pub row: i32,
    /// Pixel column.
    pub col: i32,
    /// Ridge direction in degrees, counter-clockwise from the +column axis.
    pub orientation: i32,
}

impl Minutia {
    /// Creates a minutia.
    pub const fn new(row: i32, col: i32, orientation: i32) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Euclidean distance between the two positions.
    pub fn distance_to(&self, other: &Minutia) -> f64 {
        let dr = f64::from(self.row) - f64::from(other.row);
        let dc = f64::from(self.col) - f64::from(other.col);
        (dr * dr + dc * dc).sqrt()
    }

    /// Absolute orientation difference, without wrap-around.
    pub fn orientation_gap(&self, other: &Minutia) -> i32 {
        (self.orientation - other.orientation).abs()
    }
}

/// Role of a skeleton pixel in the ridge network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinutiaKind {
    /// One transition: the ridge stops here.
    Ending,
    /// Three transitions: the ridge splits here.
    Bifurcation,
}

/// Classifies a ridge pixel from its neighbourhood.
pub fn classify(neighbours: &Neighbourhood) -> Option<MinutiaKind> {
    match neighbours.transitions() {
        1 => Some(MinutiaKind::Ending),
        3 => Some(MinutiaKind::Bifurcation),
        _ => None,
    }
}

/// Configuration for minutia extraction.
#[derive(Clone, Debug)]
pub struct ExtractConfig {
    /// Half-size of the square window used for orientation estimation.
    pub orientation_distance: usize,
    /// Thin with row-parallel passes (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            orientation_distance: ORIENTATION_DISTANCE,
            parallel: false,
        }
    }
}
