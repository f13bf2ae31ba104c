//! Owned binary images.
//!
//! `BinaryImage` stores a `rows x cols` boolean matrix in one row-major
//! buffer. `true` marks a ridge (black) pixel, `false` background. Lookups
//! outside the matrix read as background, which is what every neighbourhood
//! query in the crate relies on.

use crate::util::{RidgeMatchError, RidgeMatchResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Owned rectangular boolean matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryImage {
    data: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl BinaryImage {
    /// Creates an all-background image.
    pub fn new(rows: usize, cols: usize) -> RidgeMatchResult<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            data: vec![false; len],
            rows,
            cols,
        })
    }

    /// Creates an image from a row-major buffer of exactly `rows * cols` pixels.
    pub fn from_vec(data: Vec<bool>, rows: usize, cols: usize) -> RidgeMatchResult<Self> {
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(RidgeMatchError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an image from nested rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> RidgeMatchResult<Self> {
        let cols = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let len = checked_len(rows.len(), cols)?;
        let mut data = Vec::with_capacity(len);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(RidgeMatchError::RaggedRows {
                    row: idx,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row-major pixel buffer.
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Returns the pixels of row `row`.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.data.get(start..start + self.cols)
    }

    /// Returns the pixel at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }

    /// Returns a mutable reference to the pixel at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut bool> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get_mut(row * self.cols + col)
    }

    /// Returns true if `(row, col)` is a ridge pixel; out-of-bounds reads as background.
    #[inline]
    pub fn is_ridge(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        self.get(row as usize, col as usize).unwrap_or(false)
    }

    /// Returns true if both images have the same dimensions.
    pub fn same_shape(&self, other: &BinaryImage) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Counts ridge pixels.
    pub fn ridge_count(&self) -> usize {
        self.data.iter().filter(|&&px| px).count()
    }

    /// Copies the image into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.data.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    /// Returns an all-background image with the same shape.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            data: vec![false; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.data
    }
}

/// Returns true iff both images have the same shape and identical pixels.
pub fn identical(a: &BinaryImage, b: &BinaryImage) -> bool {
    a.same_shape(b) && a.data == b.data
}

fn checked_len(rows: usize, cols: usize) -> RidgeMatchResult<usize> {
    if rows == 0 || cols == 0 {
        return Err(RidgeMatchError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(RidgeMatchError::InvalidDimensions { rows, cols })
}
