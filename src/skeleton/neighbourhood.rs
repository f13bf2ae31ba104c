//! 8-neighbourhood sampling and counting.

use crate::image::BinaryImage;
use std::ops::Index;

/// `(row, col)` offsets of the 8 neighbours, clockwise from north.
///
/// ```text
/// | 7 | 0 | 1 |
/// | 6 | _ | 2 |
/// | 5 | 4 | 3 |
/// ```
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// The 8 neighbours of a pixel in `OFFSETS` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Neighbourhood([bool; 8]);

impl Neighbourhood {
    /// Wraps neighbour values given in `OFFSETS` order.
    pub const fn new(values: [bool; 8]) -> Self {
        Self(values)
    }

    /// Returns the neighbour values in `OFFSETS` order.
    pub fn as_array(&self) -> &[bool; 8] {
        &self.0
    }

    /// Number of ridge neighbours, in `[0, 8]`.
    pub fn black_count(&self) -> usize {
        self.0.iter().filter(|&&px| px).count()
    }

    /// Number of background-to-ridge flips walking the ring clockwise, in `[0, 4]`.
    pub fn transitions(&self) -> usize {
        (0..8)
            .filter(|&i| !self.0[i] && self.0[(i + 1) % 8])
            .count()
    }

    /// True if at least one of the listed neighbours is background.
    pub(crate) fn any_white(&self, indices: [usize; 3]) -> bool {
        indices.iter().any(|&i| !self.0[i])
    }
}

impl Index<usize> for Neighbourhood {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

impl From<[bool; 8]> for Neighbourhood {
    fn from(values: [bool; 8]) -> Self {
        Self(values)
    }
}

/// Samples the neighbourhood of an in-bounds pixel.
#[inline]
pub(crate) fn neighbourhood_at(image: &BinaryImage, row: usize, col: usize) -> Neighbourhood {
    let mut values = [false; 8];
    for (value, (dr, dc)) in values.iter_mut().zip(OFFSETS) {
        *value = image.is_ridge(row as isize + dr, col as isize + dc);
    }
    Neighbourhood(values)
}

/// Returns the neighbourhood of `(row, col)`, or `None` if the pixel is out of bounds.
///
/// Neighbours that fall outside the image read as background.
pub fn get_neighbours(image: &BinaryImage, row: usize, col: usize) -> Option<Neighbourhood> {
    if row >= image.rows() || col >= image.cols() {
        return None;
    }
    Some(neighbourhood_at(image, row, col))
}

/// Population count of ridge pixels in `neighbours`.
pub fn black_neighbours(neighbours: &Neighbourhood) -> usize {
    neighbours.black_count()
}

/// Count of background-to-ridge transitions around `neighbours`.
pub fn transitions(neighbours: &Neighbourhood) -> usize {
    neighbours.transitions()
}
