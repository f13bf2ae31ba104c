//! Alignment search between two minutia sets.
//!
//! For every probe/gallery pair the gallery set is rotated about the probe
//! minutia and translated so the pair coincides, for a handful of rotations
//! around their orientation gap. The sets match as soon as one alignment
//! brings enough gallery minutiae close to probe minutiae.

mod count;
pub(crate) mod scan;
mod transform;

pub use count::matching_minutiae_count;
pub use transform::{
    apply_rotation, apply_transformation, apply_transformation_all, apply_translation,
    RigidTransform,
};

use crate::minutia::Minutia;
use crate::trace::{trace_event, trace_span};
use crate::util::{RidgeMatchError, RidgeMatchResult};

/// Maximum distance in pixels between two minutiae counted as coincident.
pub const DISTANCE_THRESHOLD: i32 = 5;

/// Number of coincident minutiae needed to declare a match.
pub const FOUND_THRESHOLD: usize = 20;

/// Maximum orientation difference in degrees between coincident minutiae.
pub const ORIENTATION_THRESHOLD: i32 = 20;

/// Rotations tried on each side of a pair's orientation gap, in degrees.
pub const MATCH_ANGLE_OFFSET: i32 = 2;

/// Configuration for alignment search.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Maximum Euclidean distance in pixels for two minutiae to coincide.
    pub distance_threshold: i32,
    /// Maximum absolute orientation difference in degrees.
    pub orientation_threshold: i32,
    /// Coincidences required for a match.
    pub found_threshold: usize,
    /// Rotations tried are `gap - angle_offset ..= gap + angle_offset`.
    pub angle_offset: i32,
    /// Scan probe anchors in parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DISTANCE_THRESHOLD,
            orientation_threshold: ORIENTATION_THRESHOLD,
            found_threshold: FOUND_THRESHOLD,
            angle_offset: MATCH_ANGLE_OFFSET,
            parallel: false,
        }
    }
}

impl MatchConfig {
    /// Checks that every threshold is in its domain.
    pub fn validate(&self) -> RidgeMatchResult<()> {
        if self.distance_threshold < 0 {
            return Err(RidgeMatchError::InvalidConfig {
                reason: "distance_threshold must be >= 0",
            });
        }
        if !(0..=360).contains(&self.orientation_threshold) {
            return Err(RidgeMatchError::InvalidConfig {
                reason: "orientation_threshold must be in [0, 360]",
            });
        }
        if self.found_threshold == 0 {
            return Err(RidgeMatchError::InvalidConfig {
                reason: "found_threshold must be >= 1",
            });
        }
        if !(0..=180).contains(&self.angle_offset) {
            return Err(RidgeMatchError::InvalidConfig {
                reason: "angle_offset must be in [0, 180]",
            });
        }
        Ok(())
    }
}

/// The first alignment, in scan order, that made two sets match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Index of the anchoring probe minutia.
    pub probe_index: usize,
    /// Index of the anchoring gallery minutia.
    pub gallery_index: usize,
    /// Transform applied to the gallery set.
    pub transform: RigidTransform,
    /// Number of probe minutiae with a coincident transformed gallery minutia.
    pub matched: usize,
}

/// Minutia set matcher.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns true if some alignment of `gallery` onto `probe` reaches the found threshold.
    pub fn matches(&self, probe: &[Minutia], gallery: &[Minutia]) -> bool {
        self.find_alignment(probe, gallery).is_some()
    }

    /// Searches for the first alignment that reaches the found threshold.
    ///
    /// Probe minutiae are the outer loop and gallery minutiae the inner one,
    /// both in slice order, then rotations in increasing order. The parallel
    /// scan returns the same alignment as the sequential one.
    pub fn find_alignment(&self, probe: &[Minutia], gallery: &[Minutia]) -> Option<Alignment> {
        let _span = trace_span!(
            "match_minutiae",
            probe = probe.len(),
            gallery = gallery.len(),
            parallel = self.cfg.parallel
        )
        .entered();

        #[cfg(feature = "rayon")]
        let found = if self.cfg.parallel {
            scan::find_alignment_par(probe, gallery, &self.cfg)
        } else {
            scan::find_alignment_seq(probe, gallery, &self.cfg)
        };
        #[cfg(not(feature = "rayon"))]
        let found = scan::find_alignment_seq(probe, gallery, &self.cfg);

        if let Some(alignment) = found {
            trace_event!(
                "alignment_found",
                probe_index = alignment.probe_index,
                gallery_index = alignment.gallery_index,
                rotation_deg = alignment.transform.rotation_deg,
                matched = alignment.matched
            );
        }
        found
    }
}

/// Returns true if the two sets match under the default thresholds.
///
/// The rotation search is centred on the absolute orientation gap of each
/// pair, so only one rotational direction is tried per pair.
pub fn match_minutiae(probe: &[Minutia], gallery: &[Minutia]) -> bool {
    Matcher::new().matches(probe, gallery)
}
