//! Low-level building blocks for custom pipelines.
//!
//! These expose the per-pixel primitives, the orientation estimator and the
//! transform/count helpers behind `Fingerprint` and `Matcher`. Most users
//! should prefer the top-level types.

pub use crate::minutia::{
    classify, compute_angle, compute_orientation, compute_slope, connected_pixels, ridge_points,
    RidgePoint,
};
pub use crate::search::{
    apply_rotation, apply_transformation, apply_transformation_all, apply_translation,
    matching_minutiae_count,
};
pub use crate::skeleton::{
    black_neighbours, get_neighbours, thinning_step, transitions, Neighbourhood, ThinningStep,
    OFFSETS,
};
