use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ridgematch::lowlevel::{
    compute_angle, compute_orientation, compute_slope, connected_pixels, ridge_points, RidgePoint,
};
use ridgematch::{thin, BinaryImage};
use std::f64::consts::PI;

const T: bool = true;
const F: bool = false;

fn sample() -> BinaryImage {
    BinaryImage::from_rows(&[
        [T, F, F, T],
        [F, F, T, T],
        [F, T, T, F],
        [F, F, F, F],
    ])
    .unwrap()
}

fn ridge_set(img: &BinaryImage) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for r in 0..img.rows() {
        for c in 0..img.cols() {
            if img.get(r, c) == Some(true) {
                out.push((r, c));
            }
        }
    }
    out
}

#[test]
fn connected_pixels_clips_to_window() {
    let mask = connected_pixels(&sample(), 2, 1, 1).unwrap();
    assert_eq!(ridge_set(&mask), vec![(1, 2), (2, 1), (2, 2)]);
}

#[test]
fn connected_pixels_skips_disconnected_ridge() {
    let mask = connected_pixels(&sample(), 2, 1, 10).unwrap();
    assert_eq!(ridge_set(&mask), vec![(0, 3), (1, 2), (1, 3), (2, 1), (2, 2)]);
}

#[test]
fn connected_pixels_requires_path_inside_window() {
    let img = BinaryImage::from_rows(&[
        [T, F, F, T, T],
        [T, F, T, T, F],
        [T, T, F, F, F],
        [F, T, F, T, F],
    ])
    .unwrap();
    let expected = BinaryImage::from_rows(&[
        [T, F, F, T, F],
        [T, F, T, T, F],
        [T, T, F, F, F],
        [F, T, F, F, F],
    ])
    .unwrap();
    assert_eq!(connected_pixels(&img, 2, 1, 2).unwrap(), expected);
}

#[test]
fn connected_pixels_out_of_bounds_is_none() {
    assert!(connected_pixels(&sample(), 4, 0, 3).is_none());
    assert!(compute_orientation(&sample(), 0, 4, 3).is_none());
}

#[test]
fn slope_of_vertical_component_is_infinite() {
    let mask = BinaryImage::from_rows(&[
        [T, F, F, F, F],
        [T, F, F, F, F],
        [T, F, F, F, F],
        [T, F, F, F, F],
    ])
    .unwrap();
    assert_eq!(compute_slope(&ridge_points(&mask, 1, 0)), f64::INFINITY);
}

#[test]
fn slope_uses_x_regression_for_wide_components() {
    let mask = BinaryImage::from_rows(&[
        [F, F, F, T, F],
        [F, F, T, T, F],
        [F, T, T, F, F],
        [F, F, F, F, F],
    ])
    .unwrap();
    let slope = compute_slope(&ridge_points(&mask, 2, 1));
    assert!((slope - 0.7).abs() < 1e-12);
}

#[test]
fn slope_uses_y_ratio_for_tall_components() {
    let mask = BinaryImage::from_rows(&[
        [F, F, F, F],
        [F, F, T, F],
        [F, T, T, F],
        [T, T, F, F],
        [F, F, F, F],
    ])
    .unwrap();
    let slope = compute_slope(&ridge_points(&mask, 1, 2));
    assert!((slope - 10.0 / 7.0).abs() < 1e-12);
}

#[test]
fn angle_points_towards_component_bulk() {
    let mask = connected_pixels(&sample(), 2, 1, 3).unwrap();
    let points = ridge_points(&mask, 2, 1);
    let slope = compute_slope(&points);
    let angle = compute_angle(&points, slope);
    assert!((angle - 0.7f64.atan()).abs() < 1e-12);

    // The same line seen from the far end points back the other way.
    let flipped: Vec<_> = points
        .iter()
        .map(|p| RidgePoint { x: -p.x, y: -p.y })
        .collect();
    let flipped_angle = compute_angle(&flipped, compute_slope(&flipped));
    assert!((flipped_angle - (0.7f64.atan() + PI)).abs() < 1e-12);
}

#[test]
fn orientation_of_small_component() {
    assert_eq!(compute_orientation(&sample(), 2, 1, 3), Some(35));
}

#[test]
fn orientation_stays_in_degree_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let data = (0..40 * 40).map(|_| rng.random_bool(0.5)).collect();
    let img = thin(&BinaryImage::from_vec(data, 40, 40).unwrap());
    for r in 0..img.rows() {
        for c in 0..img.cols() {
            if img.get(r, c) != Some(true) {
                continue;
            }
            let deg = compute_orientation(&img, r, c, 16).unwrap();
            assert!((0..360).contains(&deg), "({r}, {c}) gave {deg}");
        }
    }
}
