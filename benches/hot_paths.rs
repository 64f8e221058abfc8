use citemap::map::{robinson, Viewport};
use citemap::{parse_counts, ColorTier};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec2;

fn bench_classify(c: &mut Criterion) {
    c.bench_function("tier_from_count", |b| {
        b.iter(|| {
            for count in -10..200 {
                black_box(ColorTier::from_count(black_box(count)));
            }
        })
    });
}

fn bench_project(c: &mut Criterion) {
    let vp = Viewport::fit(DVec2::ZERO, DVec2::new(960.0, 480.0));
    c.bench_function("robinson", |b| {
        b.iter(|| black_box(robinson(black_box(12.5), black_box(-47.3))))
    });
    c.bench_function("viewport_project_ring", |b| {
        b.iter(|| {
            for lat in -90..=90 {
                black_box(vp.project(black_box(180.0), lat as f64));
            }
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let text: String = (0..200)
        .map(|i| format!("Country number {},{}\n", i, i * 3))
        .collect();
    c.bench_function("parse_counts_200", |b| {
        b.iter(|| parse_counts(black_box(text.as_bytes())).unwrap())
    });
}

criterion_group!(benches, bench_classify, bench_project, bench_parse);
criterion_main!(benches);
