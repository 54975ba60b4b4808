#![forbid(unsafe_code)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quire_reorder::{MoveDirection, ReorderableList};
use std::hint::black_box;

fn bench_drag_drop(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/drag_drop");

    for len in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("first_to_last", len), &len, |b, &len| {
            b.iter(|| {
                let mut list: ReorderableList<usize> = (0..len).collect();
                list.drag_start(0);
                for index in 1..len {
                    list.drag_enter(index);
                    list.drag_leave();
                }
                black_box(list.drop(len - 1))
            });
        });
    }

    group.finish();
}

fn bench_keyboard_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/keyboard");

    group.bench_function("walk_down_64", |b| {
        b.iter(|| {
            let mut list: ReorderableList<usize> = (0..64).collect();
            for index in 0..64 {
                black_box(list.move_item(index, MoveDirection::Down));
            }
            black_box(list.into_items())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_drag_drop, bench_keyboard_moves);
criterion_main!(benches);
