//! RidgeMatch compares fingerprints by their minutiae.
//!
//! A binarized fingerprint is thinned to a one-pixel skeleton (Zhang-Suen),
//! ridge endings and bifurcations are extracted with a local orientation,
//! and two minutia sets match when a rigid alignment brings enough of them
//! into coincidence. Optional features add parallel thinning and search
//! (`rayon`), image file I/O (`image-io`) and spans (`tracing`).

pub mod fingerprint;
pub mod image;
pub mod lowlevel;
pub mod minutia;
pub mod search;
pub mod skeleton;
mod trace;
pub mod util;

pub use fingerprint::Fingerprint;
pub use image::{identical, BinaryImage};
pub use minutia::{extract, extract_with, ExtractConfig, Minutia, MinutiaKind, ORIENTATION_DISTANCE};
pub use search::{
    match_minutiae, Alignment, MatchConfig, Matcher, RigidTransform, DISTANCE_THRESHOLD,
    FOUND_THRESHOLD, MATCH_ANGLE_OFFSET, ORIENTATION_THRESHOLD,
};
pub use skeleton::thin;
pub use util::{RidgeMatchError, RidgeMatchResult};

#[cfg(feature = "image-io")]
pub use image::io;
