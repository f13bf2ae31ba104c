//! Skeletonization of binary ridge images.
//!
//! The neighbourhood primitives classify a pixel from its 8 neighbours; the
//! thinner applies Zhang-Suen deletion passes until the image stops changing.

mod neighbourhood;
mod thin;

pub use neighbourhood::{black_neighbours, get_neighbours, transitions, Neighbourhood, OFFSETS};
pub use thin::{thin, thinning_step, ThinningStep};

#[cfg(feature = "rayon")]
pub use thin::thin_par;

pub(crate) use neighbourhood::neighbourhood_at;
