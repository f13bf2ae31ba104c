//! Minutia extraction from skeletons.

use crate::image::BinaryImage;
use crate::minutia::orientation::compute_orientation;
use crate::minutia::{classify, ExtractConfig, Minutia, MinutiaKind};
use crate::skeleton::{get_neighbours, neighbourhood_at};
use crate::trace::{trace_event, trace_span};

/// Extracts minutiae with the default orientation window.
pub fn extract(skeleton: &BinaryImage) -> Vec<Minutia> {
    extract_with(skeleton, &ExtractConfig::default())
}

/// Extracts ridge endings and bifurcations from a skeleton.
///
/// Scans interior pixels in row-major order, skipping the one-pixel border,
/// and appends every ridge pixel with one or three transitions together with
/// its orientation.
pub fn extract_with(skeleton: &BinaryImage, cfg: &ExtractConfig) -> Vec<Minutia> {
    let _span = trace_span!(
        "extract",
        rows = skeleton.rows(),
        cols = skeleton.cols(),
        distance = cfg.orientation_distance
    )
    .entered();

    let mut out = Vec::new();
    let rows = skeleton.rows();
    let cols = skeleton.cols();
    for row in 1..rows.saturating_sub(1) {
        for col in 1..cols.saturating_sub(1) {
            if skeleton.get(row, col) != Some(true) {
                continue;
            }
            if classify(&neighbourhood_at(skeleton, row, col)).is_none() {
                continue;
            }
            let Some(orientation) =
                compute_orientation(skeleton, row, col, cfg.orientation_distance)
            else {
                continue;
            };
            out.push(Minutia::new(row as i32, col as i32, orientation));
        }
    }

    trace_event!("minutiae_extracted", count = out.len());
    out
}

/// Kind of `minutia` on `skeleton`, or `None` if it is not a ridge ending or bifurcation there.
pub fn minutia_kind(skeleton: &BinaryImage, minutia: &Minutia) -> Option<MinutiaKind> {
    let row = usize::try_from(minutia.row).ok()?;
    let col = usize::try_from(minutia.col).ok()?;
    if skeleton.get(row, col) != Some(true) {
        return None;
    }
    classify(&get_neighbours(skeleton, row, col)?)
}
