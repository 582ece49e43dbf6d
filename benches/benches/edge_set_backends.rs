// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_magnet::{Backend, Edge, OrderedSet, PixelRect, SortedVec, TargetIndexGeneric};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: i32) -> i32 {
        (self.next_u64() % n as u64) as i32
    }
}

/// Cascaded windows on a 3840x2160 desktop, listed front to back.
fn gen_desktop(count: usize, seed: u64) -> Vec<PixelRect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = 300 + rng.below(1200);
        let h = 200 + rng.below(800);
        let x = rng.below(3840 - w);
        let y = rng.below(2160 - h);
        out.push(PixelRect::from_xywh(x, y, w, h));
    }
    out
}

fn work_areas() -> Vec<PixelRect> {
    vec![
        PixelRect::new(0, 0, 1920, 2120),
        PixelRect::new(1920, 0, 3840, 2160),
    ]
}

fn bench_build<B: Backend>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("build_{name}"));
    for &n in &[8usize, 32, 128] {
        let windows = gen_desktop(n, 0xCAFE_F00D_DEAD_BEEF);
        let areas = work_areas();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("snapshot_n{n}"), |b| {
            b.iter_batched(
                || (),
                |()| {
                    let idx = TargetIndexGeneric::<B>::from_snapshot(&windows, &areas);
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_closest<B: Backend>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("closest_{name}"));
    for &n in &[8usize, 32, 128] {
        let windows = gen_desktop(n, 0xBADC_F00D_1234_5678);
        let idx = TargetIndexGeneric::<B>::from_snapshot(&windows, &work_areas());
        let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
        let probes: Vec<_> = (0..256)
            .map(|_| {
                let x = rng.below(3840);
                let y = rng.below(2000);
                (x, y, y + 150)
            })
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("probe_n{n}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(x, top, bottom) in &probes {
                    for edge in Edge::ALL {
                        if idx.closest(edge, x, top, bottom, 25).is_some() {
                            hits += 1;
                        }
                    }
                }
                black_box(hits);
            });
        });
    }
    group.finish();
}

fn bench_all(c: &mut Criterion) {
    bench_build::<OrderedSet>(c, "ordered");
    bench_build::<SortedVec>(c, "sorted_vec");
    bench_closest::<OrderedSet>(c, "ordered");
    bench_closest::<SortedVec>(c, "sorted_vec");
}

criterion_group!(benches, bench_all);
criterion_main!(benches);
