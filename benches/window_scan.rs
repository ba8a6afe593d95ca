#![forbid(unsafe_code)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use remesa::query::{
    transfer_stats, ACCOUNT_ID_FIELD, ACCOUNT_LABEL, AMOUNT_FIELD, TRANSFER_LABEL,
};
use remesa::{MemGraph, Value};

const ACCOUNT_COUNT: i64 = 1_024;
const EDGE_COUNT: usize = 262_144;
const TIME_SPAN: i64 = 1_000_000;

fn window_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/window_scan");
    group.sample_size(40);
    group.throughput(Throughput::Elements(1));

    let mut harness = ScanHarness::new(ACCOUNT_COUNT, EDGE_COUNT);
    for width in [1_000i64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("transfer_stats", width), &width, |b, &width| {
            b.iter(|| {
                let (account, start) = harness.next_probe(width);
                black_box(transfer_stats(&harness.graph, account, start, start + width).unwrap())
            });
        });
    }
    group.finish();
}

struct ScanHarness {
    graph: MemGraph,
    accounts: i64,
    cursor: i64,
}

impl ScanHarness {
    fn new(accounts: i64, edge_count: usize) -> Self {
        let mut graph = MemGraph::new();
        let mut vertices = Vec::with_capacity(accounts as usize);
        for id in 0..accounts {
            vertices.push(
                graph
                    .add_vertex(ACCOUNT_LABEL, ACCOUNT_ID_FIELD, Value::Int(id))
                    .expect("vertex"),
            );
        }

        let mut rng = ChaCha8Rng::seed_from_u64(0xDEADBEEF);
        for _ in 0..edge_count {
            let src = vertices[rng.gen_range(0..vertices.len())];
            let dst = vertices[rng.gen_range(0..vertices.len())];
            let ts = rng.gen_range(0..TIME_SPAN);
            let amount = f64::from(rng.gen_range(1..100_000u32)) / 100.0;
            graph
                .add_edge(src, dst, TRANSFER_LABEL, ts, &[(AMOUNT_FIELD, Value::Float(amount))])
                .expect("edge");
        }
        Self { graph, accounts, cursor: 0 }
    }

    /// Deterministic probe rotation so every sample hits a different
    /// account and window offset.
    fn next_probe(&mut self, width: i64) -> (i64, i64) {
        let account = self.cursor % self.accounts;
        let start = (self.cursor * 7_919) % (TIME_SPAN - width).max(1);
        self.cursor += 1;
        (account, start)
    }
}

criterion_group!(benches, window_scan);
criterion_main!(benches);
