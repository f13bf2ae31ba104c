//! Fingerprints compiled once for repeated matching.

use crate::image::BinaryImage;
use crate::minutia::{extract_with, ExtractConfig, Minutia};
use crate::search::{Alignment, Matcher};
use crate::skeleton::thin;

/// A skeletonized fingerprint and its minutiae.
#[derive(Clone, Debug)]
pub struct Fingerprint {
    skeleton: BinaryImage,
    minutiae: Vec<Minutia>,
}

impl Fingerprint {
    /// Thins a binarized fingerprint and extracts its minutiae.
    pub fn from_image(image: &BinaryImage, cfg: &ExtractConfig) -> Self {
        #[cfg(feature = "rayon")]
        let skeleton = if cfg.parallel {
            crate::skeleton::thin_par(image)
        } else {
            thin(image)
        };
        #[cfg(not(feature = "rayon"))]
        let skeleton = thin(image);

        Self::from_skeleton(skeleton, cfg)
    }

    /// Extracts minutiae from an already thinned image.
    pub fn from_skeleton(skeleton: BinaryImage, cfg: &ExtractConfig) -> Self {
        let minutiae = extract_with(&skeleton, cfg);
        Self { skeleton, minutiae }
    }

    /// Returns the skeleton.
    pub fn skeleton(&self) -> &BinaryImage {
        &self.skeleton
    }

    /// Returns the minutiae in row-major scan order.
    pub fn minutiae(&self) -> &[Minutia] {
        &self.minutiae
    }

    /// Returns true if `other` aligns onto this fingerprint.
    pub fn matches(&self, other: &Fingerprint, matcher: &Matcher) -> bool {
        matcher.matches(&self.minutiae, &other.minutiae)
    }

    /// Returns the alignment of `other` onto this fingerprint, if any.
    pub fn find_alignment(&self, other: &Fingerprint, matcher: &Matcher) -> Option<Alignment> {
        matcher.find_alignment(&self.minutiae, &other.minutiae)
    }
}
