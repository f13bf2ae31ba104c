//! Zhang-Suen thinning.
//!
//! Each sub-step reads a snapshot and writes deletions into a separate
//! buffer, so the decision for one pixel never sees deletions made earlier in
//! the same pass. Only ridge pixels are ever cleared; the image never grows.

use crate::image::BinaryImage;
use crate::skeleton::neighbourhood::{neighbourhood_at, Neighbourhood};
use crate::trace::{trace_event, trace_span};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The two alternating Zhang-Suen sub-iterations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThinningStep {
    /// Removes south-east boundary and north-west corner pixels.
    First,
    /// Removes north-west boundary and south-east corner pixels.
    Second,
}

impl ThinningStep {
    fn removes(self, n: &Neighbourhood) -> bool {
        let black = n.black_count();
        if !(2..=6).contains(&black) || n.transitions() != 1 {
            return false;
        }
        match self {
            ThinningStep::First => n.any_white([0, 2, 4]) && n.any_white([2, 4, 6]),
            ThinningStep::Second => n.any_white([0, 2, 6]) && n.any_white([0, 4, 6]),
        }
    }
}

/// Applies one sub-iteration and returns a fresh image.
pub fn thinning_step(image: &BinaryImage, step: ThinningStep) -> BinaryImage {
    let mut out = image.blank_like();
    step_into(image, &mut out, step);
    out
}

/// Thins `image` to a one-pixel-wide skeleton.
///
/// Runs the first and second sub-iterations alternately until a full pair
/// removes nothing. Thinning a skeleton returns it unchanged.
pub fn thin(image: &BinaryImage) -> BinaryImage {
    thin_with(image, step_into)
}

/// Row-parallel variant of [`thin`]; the output is identical.
#[cfg(feature = "rayon")]
pub fn thin_par(image: &BinaryImage) -> BinaryImage {
    thin_with(image, step_into_par)
}

fn thin_with(
    image: &BinaryImage,
    step: fn(&BinaryImage, &mut BinaryImage, ThinningStep) -> usize,
) -> BinaryImage {
    let _span = trace_span!("thin", rows = image.rows(), cols = image.cols()).entered();

    // Two buffers swapped between sub-steps; `current` holds the result of each full pair.
    let mut current = image.clone();
    let mut scratch = image.blank_like();
    let mut iterations = 0usize;
    let mut removed_total = 0usize;
    loop {
        iterations += 1;
        let removed = step(&current, &mut scratch, ThinningStep::First)
            + step(&scratch, &mut current, ThinningStep::Second);
        removed_total += removed;
        if removed == 0 {
            break;
        }
    }

    trace_event!(
        "thin_done",
        iterations = iterations,
        removed = removed_total,
        remaining = current.ridge_count()
    );
    current
}

/// Copies `src` into `dst` minus the pixels `step` deletes; returns the deletion count.
fn step_into(src: &BinaryImage, dst: &mut BinaryImage, step: ThinningStep) -> usize {
    debug_assert!(src.same_shape(dst));
    let cols = src.cols();
    let mut removed = 0usize;
    for (row, out_row) in dst.as_mut_slice().chunks_mut(cols).enumerate() {
        removed += step_row(src, row, out_row, step);
    }
    removed
}

#[cfg(feature = "rayon")]
fn step_into_par(src: &BinaryImage, dst: &mut BinaryImage, step: ThinningStep) -> usize {
    debug_assert!(src.same_shape(dst));
    let cols = src.cols();
    dst.as_mut_slice()
        .par_chunks_mut(cols)
        .enumerate()
        .map(|(row, out_row)| step_row(src, row, out_row, step))
        .sum()
}

fn step_row(src: &BinaryImage, row: usize, out_row: &mut [bool], step: ThinningStep) -> usize {
    let Some(src_row) = src.row(row) else {
        return 0;
    };
    out_row.copy_from_slice(src_row);
    let mut removed = 0usize;
    for (col, out) in out_row.iter_mut().enumerate() {
        if !*out {
            continue;
        }
        if step.removes(&neighbourhood_at(src, row, col)) {
            *out = false;
            removed += 1;
        }
    }
    removed
}
