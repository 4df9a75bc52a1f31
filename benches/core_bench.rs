use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use path_drawer::{parse_path_code, write_path_code, FieldTransform, PathModel, SegmentKind};
use std::hint::black_box;

fn bench_code_parsing(c: &mut Criterion) {
    let code = include_str!("../tests/fixtures/simple_path.txt");
    let transform = FieldTransform::default();

    c.bench_function("code_parse_simple_path", |b| {
        b.iter(|| {
            let model = parse_path_code(black_box(code), &transform).expect("Code parse failed");
            black_box(model.segment_count())
        })
    });
}

fn build_synthetic_path(segment_count: usize) -> PathModel {
    let mut model = PathModel::new();
    for index in 0..segment_count {
        let kind = SegmentKind::ALL[index % SegmentKind::ALL.len()];
        let x = (index % 40) as f64 * 20.0;
        let y = (index / 40) as f64 * 20.0 + (index % 2) as f64 * 7.0;
        if model.is_empty() {
            model.append_from(DVec2::ZERO, kind);
            model.drag_tail_end(DVec2::new(x + 10.0, y));
        } else {
            model.append_from(DVec2::new(x + 10.0, y), kind);
        }
    }
    model
}

fn bench_code_writing(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_write");
    let transform = FieldTransform::default();

    for &segment_count in &[10usize, 1_000usize] {
        let model = build_synthetic_path(segment_count);
        group.bench_with_input(
            BenchmarkId::new("write", segment_count),
            &model,
            |b, model| b.iter(|| black_box(write_path_code(model, &transform, 4).len())),
        );
    }

    group.finish();
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");

    for &segment_count in &[10usize, 200usize] {
        let model = build_synthetic_path(segment_count);
        let query_points: Vec<DVec2> = (0..256)
            .map(|i| DVec2::new((i * 13 % 800) as f64 + 0.37, (i * 7 % 200) as f64 + 0.63))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("find_segment_near", segment_count),
            &model,
            |b, model| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if model.find_segment_near(black_box(*point), 20.0, 40).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    core_benches,
    bench_code_parsing,
    bench_code_writing,
    bench_hit_testing
);
criterion_main!(core_benches);
