use ridgematch::lowlevel::apply_translation;
use ridgematch::{extract, thin, BinaryImage, Fingerprint, Matcher, Minutia};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Wavy ridges about four pixels thick with a period of nine rows.
fn make_ridges(rows: usize, cols: usize) -> BinaryImage {
    let mut img = BinaryImage::new(rows, cols).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            let phase = row + (col / 7) % 3 + (col * col / 97) % 2;
            if phase % 9 < 4 {
                *img.get_mut(row, col).unwrap() = true;
            }
        }
    }
    img
}

fn make_minutiae(count: i32) -> Vec<Minutia> {
    (0..count)
        .map(|i| Minutia::new(20 + (i / 8) * 13, 20 + (i % 8) * 17, (i * 37) % 360))
        .collect()
}

fn bench_thinning(c: &mut Criterion) {
    let image = make_ridges(256, 256);

    c.bench_function("thin_256", |b| {
        b.iter(|| black_box(thin(black_box(&image))));
    });

    #[cfg(feature = "rayon")]
    c.bench_function("thin_par_256", |b| {
        b.iter(|| black_box(ridgematch::skeleton::thin_par(black_box(&image))));
    });
}

fn bench_extraction(c: &mut Criterion) {
    let skeleton = thin(&make_ridges(256, 256));

    c.bench_function("extract_256", |b| {
        b.iter(|| black_box(extract(black_box(&skeleton))));
    });
}

fn bench_matching(c: &mut Criterion) {
    let probe = make_minutiae(48);
    let shifted: Vec<_> = probe.iter().map(|m| apply_translation(m, -3, 2)).collect();
    let unrelated: Vec<_> = make_minutiae(48)
        .iter()
        .map(|m| Minutia::new(m.col, m.row, (m.orientation + 90) % 360))
        .collect();
    let matcher = Matcher::new();

    c.bench_function("match_shifted_48", |b| {
        b.iter(|| black_box(matcher.find_alignment(&probe, &shifted)));
    });

    c.bench_function("match_unrelated_48", |b| {
        b.iter(|| black_box(matcher.find_alignment(&probe, &unrelated)));
    });

    #[cfg(feature = "rayon")]
    {
        let matcher_par = Matcher::new().with_config(ridgematch::MatchConfig {
            parallel: true,
            ..ridgematch::MatchConfig::default()
        });
        c.bench_function("match_unrelated_48_par", |b| {
            b.iter(|| black_box(matcher_par.find_alignment(&probe, &unrelated)));
        });
    }

    let fingerprint = Fingerprint::from_skeleton(thin(&make_ridges(128, 128)), &Default::default());
    c.bench_function("fingerprint_self_match_128", |b| {
        b.iter(|| black_box(fingerprint.matches(&fingerprint, &matcher)));
    });
}

criterion_group!(benches, bench_thinning, bench_extraction, bench_matching);
criterion_main!(benches);
