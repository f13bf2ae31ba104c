use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ridgematch::lowlevel::{thinning_step, ThinningStep};
use ridgematch::{thin, BinaryImage};

fn from_ascii(rows: &[&str]) -> BinaryImage {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|ch| ch == '#').collect())
        .collect();
    BinaryImage::from_rows(&rows).unwrap()
}

fn random_image(seed: u64, rows: usize, cols: usize, density: f64) -> BinaryImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..rows * cols).map(|_| rng.random_bool(density)).collect();
    BinaryImage::from_vec(data, rows, cols).unwrap()
}

fn thick_bar() -> BinaryImage {
    from_ascii(&[
        "..............",
        "..............",
        "..##########..",
        "..##########..",
        "..##########..",
        "..............",
        "..............",
    ])
}

#[test]
fn first_step_peels_south_east_boundary() {
    let expected = from_ascii(&[
        "..............",
        "..............",
        "...########...",
        "..#########...",
        "..............",
        "..............",
        "..............",
    ]);
    assert_eq!(thinning_step(&thick_bar(), ThinningStep::First), expected);
}

#[test]
fn second_step_peels_north_west_boundary() {
    let expected = from_ascii(&[
        "..............",
        "..............",
        "..............",
        "...#########..",
        "...########...",
        "..............",
        "..............",
    ]);
    assert_eq!(thinning_step(&thick_bar(), ThinningStep::Second), expected);
}

#[test]
fn thick_bar_thins_to_centre_line() {
    let expected = from_ascii(&[
        "..............",
        "..............",
        "..............",
        "...#######....",
        "..............",
        "..............",
        "..............",
    ]);
    let bar = thick_bar();
    let skeleton = thin(&bar);
    assert_eq!(skeleton, expected);
    assert_eq!(skeleton.rows(), bar.rows());
    assert_eq!(skeleton.cols(), bar.cols());
}

#[test]
fn thinning_step_does_not_mutate_input() {
    let bar = thick_bar();
    let before = bar.clone();
    let _ = thinning_step(&bar, ThinningStep::First);
    let _ = thin(&bar);
    assert_eq!(bar, before);
}

#[test]
fn one_pixel_lines_are_fixed_points() {
    let line = from_ascii(&[".........", ".........", "..#####..", ".........", "........."]);
    assert_eq!(thin(&line), line);
}

#[test]
fn thinning_never_adds_ridge() {
    for seed in 0..8 {
        let img = random_image(seed, 24, 31, 0.55);
        let skeleton = thin(&img);
        for (src, out) in img.as_slice().iter().zip(skeleton.as_slice()) {
            assert!(*src || !*out, "seed {seed} added a ridge pixel");
        }
    }
}

#[test]
fn thinning_is_idempotent() {
    for seed in 0..8 {
        let img = random_image(100 + seed, 27, 22, 0.6);
        let once = thin(&img);
        assert_eq!(thin(&once), once, "seed {}", 100 + seed);
    }
}
