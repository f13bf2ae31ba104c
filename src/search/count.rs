//! Coincidence counting between two minutia sets.

use crate::minutia::Minutia;

/// Counts probe minutiae that have at least one coincident gallery minutia.
///
/// Two minutiae coincide when their Euclidean distance is at most
/// `max_distance` and their orientations differ by at most
/// `max_orientation` degrees (no wrap-around). The same gallery minutia may
/// be counted for several probe minutiae.
pub fn matching_minutiae_count(
    probe: &[Minutia],
    gallery: &[Minutia],
    max_distance: i32,
    max_orientation: i32,
) -> usize {
    let max_distance = f64::from(max_distance);
    probe
        .iter()
        .filter(|a| {
            gallery.iter().any(|b| {
                a.distance_to(b) <= max_distance && a.orientation_gap(b) <= max_orientation
            })
        })
        .count()
}
