use copy_match_engine::{Batch, Classifier, ModePolicy, Side, Trade};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

const U1: i32 = 42;
const U2: i32 = 57;

/// Generates `n` trades on a single symbol, spread across `num_accounts`
/// accounts, alternating between the two selected users every trade. A
/// small `num_accounts` yields a dense working set (many eligible parents
/// per trade, more children per batch); a large one yields a sparse one.
fn gen_trades(n: u64, num_accounts: i32) -> Vec<Trade> {
    (0..n)
        .map(|i| {
            let side = if i % 3 == 0 { Side::Sell } else { Side::Buy };
            let user = if i % 2 == 0 { U1 } else { U2 };
            Trade {
                open_ts: (i * 20) as i64,
                close_ts: (i * 20 + 5_000) as i64,
                duration_ms: 5_000,
                lot: 100_000_000,
                side,
                trade_id: i as i32,
                symbol: 0,
                account_id: (i as i32) % num_accounts,
                user_id: user,
            }
        })
        .collect()
}

/// Matched-pair density drives cost, not input size alone: a dense working
/// set (few accounts, most trades matching) should cost more per trade
/// than a sparse one of the same length.
fn bench_match_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_density");
    let n = 50_000u64;
    group.throughput(Throughput::Elements(n));
    for &num_accounts in &[4i32, 64, 2_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{num_accounts}_accounts")),
            &num_accounts,
            |b, &num_accounts| {
                b.iter_batched(
                    || gen_trades(n, num_accounts),
                    |trades| {
                        let mut classifier = Classifier::new(1, ModePolicy::B, U1, U2);
                        let mut out: Vec<Batch> = Vec::with_capacity(4096);
                        for t in trades {
                            let _ = classifier.ingest(black_box(t), &mut out);
                        }
                        classifier.finish(&mut out);
                        black_box(out.len());
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_match_density);
criterion_main!(benches);
