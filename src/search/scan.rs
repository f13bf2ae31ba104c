//! Exhaustive anchor scans.

use crate::minutia::Minutia;
use crate::search::count::matching_minutiae_count;
use crate::search::transform::RigidTransform;
use crate::search::{Alignment, MatchConfig};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Tries every gallery minutia and rotation against probe minutia `probe_index`.
fn scan_anchor(
    probe: &[Minutia],
    gallery: &[Minutia],
    probe_index: usize,
    cfg: &MatchConfig,
    scratch: &mut Vec<Minutia>,
) -> Option<Alignment> {
    let a = probe[probe_index];
    for (gallery_index, b) in gallery.iter().enumerate() {
        let gap = (b.orientation - a.orientation).abs();
        for rotation_deg in (gap - cfg.angle_offset)..=(gap + cfg.angle_offset) {
            let transform = RigidTransform {
                center_row: a.row,
                center_col: a.col,
                row_shift: b.row - a.row,
                col_shift: b.col - a.col,
                rotation_deg,
            };
            transform.apply_all_into(gallery, scratch);
            let matched = matching_minutiae_count(
                probe,
                scratch,
                cfg.distance_threshold,
                cfg.orientation_threshold,
            );
            if matched >= cfg.found_threshold {
                return Some(Alignment {
                    probe_index,
                    gallery_index,
                    transform,
                    matched,
                });
            }
        }
    }
    None
}

pub(crate) fn find_alignment_seq(
    probe: &[Minutia],
    gallery: &[Minutia],
    cfg: &MatchConfig,
) -> Option<Alignment> {
    let mut scratch = Vec::with_capacity(gallery.len());
    (0..probe.len()).find_map(|idx| scan_anchor(probe, gallery, idx, cfg, &mut scratch))
}

/// Parallel over probe anchors; `find_first` keeps the sequential witness.
#[cfg(feature = "rayon")]
pub(crate) fn find_alignment_par(
    probe: &[Minutia],
    gallery: &[Minutia],
    cfg: &MatchConfig,
) -> Option<Alignment> {
    (0..probe.len())
        .into_par_iter()
        .map_init(
            || Vec::with_capacity(gallery.len()),
            |scratch, idx| scan_anchor(probe, gallery, idx, cfg, scratch),
        )
        .find_first(Option::is_some)
        .flatten()
}
