//! Insert and lookup throughput for the hash page table.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hashpt::{FrameNumber, HashPageTable, VirtualAddress};

const PAGE_SIZE: u64 = 4096;
const PAGES: u64 = 4096;

fn filled_table(table_size: usize) -> HashPageTable {
    let mut table = HashPageTable::new(table_size, PAGE_SIZE).unwrap();
    for p in 0..PAGES {
        table
            .add_page_entry(VirtualAddress::new(p * PAGE_SIZE), FrameNumber::new(p))
            .unwrap();
    }
    table
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_page_entry");
    for table_size in [64usize, 1024, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(table_size), &table_size, |b, &n| {
            b.iter(|| black_box(filled_table(n)));
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_page");
    for table_size in [64usize, 1024, 4096] {
        let mut table = filled_table(table_size);
        group.bench_with_input(BenchmarkId::from_parameter(table_size), &table_size, |b, _| {
            let mut p = 0u64;
            b.iter(|| {
                p = (p + 7) % (PAGES * 2);
                black_box(table.lookup_page(VirtualAddress::new(p * PAGE_SIZE + 5)))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_lookup);
criterion_main!(benches);
