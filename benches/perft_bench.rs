use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexbot::game_repr::Position;

fn bench_perft_depth_2(c: &mut Criterion) {
    let pos = Position::default();
    c.bench_function("perft depth 2", |b| {
        b.iter(|| black_box(pos.perft(2)))
    });
}

fn bench_perft_depth_3(c: &mut Criterion) {
    let pos = Position::default();
    c.bench_function("perft depth 3", |b| {
        b.iter(|| black_box(pos.perft(3)))
    });
}

criterion_group!(benches, bench_perft_depth_2, bench_perft_depth_3);
criterion_main!(benches);
