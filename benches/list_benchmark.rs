//! Criterion benchmarks for the linked priority list
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench list_benchmark
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linked_priority_queue::priority_list::PriorityList;
use linked_priority_queue::queue::PriorityQueue;

/// Small xorshift generator so runs are reproducible
struct XorShift {
    state: u64,
}

impl XorShift {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_priority(&mut self) -> i32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        (self.state % 1024) as i32
    }
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_with_priority");

    for size in [64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("random", size), &size, |b, &size| {
            b.iter(|| {
                let mut rng = XorShift::new(0x9e37_79b9_7f4a_7c15);
                let mut queue = PriorityQueue::new();
                for i in 0..size {
                    queue.insert(rng.next_priority(), i);
                }
                black_box(queue)
            })
        });
    }

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_min");

    for size in [64usize, 256, 1024] {
        let mut rng = XorShift::new(0x2545_f491_4f6c_dd1d);
        let queue: PriorityQueue<usize> = (0..size).map(|i| (rng.next_priority(), i)).collect();

        group.bench_with_input(BenchmarkId::new("drain", size), &queue, |b, queue| {
            b.iter(|| {
                let mut queue = queue.clone();
                while let Ok(item) = queue.remove_min() {
                    black_box(item);
                }
            })
        });
    }

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    for size in [64usize, 256, 1024] {
        let list: PriorityList<usize> = (0..size).map(|i| (i as i32, i)).collect();

        group.bench_with_input(BenchmarkId::new("get_middle", size), &list, |b, list| {
            b.iter(|| black_box(list.get(size / 2)))
        });
        group.bench_with_input(BenchmarkId::new("reverse", size), &list, |b, list| {
            let mut list = list.clone();
            b.iter(|| {
                list.reverse();
                black_box(list.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain, bench_positional);
criterion_main!(benches);
