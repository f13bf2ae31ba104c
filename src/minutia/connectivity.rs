//! Windowed 8-connected components.

use crate::image::BinaryImage;
use crate::skeleton::OFFSETS;

/// Ridge pixels 8-connected to a seed inside a square window.
///
/// The mask is local to the window; `row0`/`col0` locate its top-left
/// corner in the source image.
pub(crate) struct WindowComponent {
    row0: usize,
    col0: usize,
    rows: usize,
    cols: usize,
    mask: Vec<bool>,
}

impl WindowComponent {
    /// Grows the component seeded by the ridge pixels in the 3x3 block around
    /// `(row, col)`, restricted to `[row - d, row + d] x [col - d, col + d]`.
    pub(crate) fn grow(image: &BinaryImage, row: usize, col: usize, distance: usize) -> Option<Self> {
        if row >= image.rows() || col >= image.cols() {
            return None;
        }
        let row0 = row.saturating_sub(distance);
        let col0 = col.saturating_sub(distance);
        let row1 = row.saturating_add(distance).min(image.rows() - 1);
        let col1 = col.saturating_add(distance).min(image.cols() - 1);
        let rows = row1 - row0 + 1;
        let cols = col1 - col0 + 1;

        let mut component = Self {
            row0,
            col0,
            rows,
            cols,
            mask: vec![false; rows * cols],
        };

        let mut stack = Vec::new();
        let seeds = std::iter::once((0, 0)).chain(OFFSETS);
        for (dr, dc) in seeds {
            if let Some(idx) = component.unvisited_ridge(image, row as isize + dr, col as isize + dc) {
                component.mask[idx] = true;
                stack.push((row as isize + dr, col as isize + dc));
            }
        }

        while let Some((r, c)) = stack.pop() {
            for (dr, dc) in OFFSETS {
                let (nr, nc) = (r + dr, c + dc);
                if let Some(idx) = component.unvisited_ridge(image, nr, nc) {
                    component.mask[idx] = true;
                    stack.push((nr, nc));
                }
            }
        }

        Some(component)
    }

    /// Local index of `(r, c)` if it is an unvisited ridge pixel inside the window.
    fn unvisited_ridge(&self, image: &BinaryImage, r: isize, c: isize) -> Option<usize> {
        if r < self.row0 as isize || c < self.col0 as isize {
            return None;
        }
        let (lr, lc) = (r as usize - self.row0, c as usize - self.col0);
        if lr >= self.rows || lc >= self.cols {
            return None;
        }
        let idx = lr * self.cols + lc;
        if self.mask[idx] || !image.is_ridge(r, c) {
            return None;
        }
        Some(idx)
    }

    /// Image coordinates of the component pixels in row-major order.
    pub(crate) fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(idx, _)| (self.row0 + idx / self.cols, self.col0 + idx % self.cols))
    }
}

/// Returns the ridge pixels 8-connected to `(row, col)` within a square window.
///
/// The result has the shape of `image` and is `true` only at ridge pixels
/// inside `[row - distance, row + distance] x [col - distance, col + distance]`
/// that are reachable from the 3x3 block around `(row, col)` through ridge
/// pixels that also lie in the window. Returns `None` if `(row, col)` is out
/// of bounds.
pub fn connected_pixels(
    image: &BinaryImage,
    row: usize,
    col: usize,
    distance: usize,
) -> Option<BinaryImage> {
    let component = WindowComponent::grow(image, row, col, distance)?;
    let mut out = image.blank_like();
    for (r, c) in component.pixels() {
        if let Some(px) = out.get_mut(r, c) {
            *px = true;
        }
    }
    Some(out)
}
