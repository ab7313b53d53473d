//! Tabulation on long rods, where recursion depth rules out the memoized
//! solver. Reports the process RSS delta alongside timing.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rodcut_dp::{solve_tabulated, Price};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|p| p.memory() / 1024)
        .unwrap_or(0)
}

fn bench_large_rod(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabulated_large");
    group.sample_size(10);
    for &len in &[5_000usize, 10_000] {
        group.bench_function(format!("len_{len}"), |b| {
            b.iter_batched(
                || (1..=len as Price).map(|k| 3 * k + (k * k) % 7).collect::<Vec<_>>(),
                |prices| {
                    let before = rss_kib();
                    let plan = solve_tabulated(len as i64, &prices).unwrap();
                    let after = rss_kib();
                    criterion::black_box(plan.max_profit);
                    eprintln!(
                        "RSS KiB delta (rod {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_large_rod);
criterion_main!(benches);
