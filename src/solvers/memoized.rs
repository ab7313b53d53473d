//! Top-down memoized recursion.
//!
//! `best(n)` tries every first piece `i` in `1..=n` and recurses on the
//! remainder `n - i`. Without the cache this is exponential; with it every
//! sub-length is evaluated once and the fill costs O(n²).
//!
//! The caches live in an explicit [`MemoContext`] passed down the recursion,
//! so the solver itself holds no state between calls. Recursion depth equals
//! the rod length. Rods longer than [`INLINE_DEPTH`] are filled on a scoped
//! worker thread whose stack grows with the length, so the caller's stack
//! size never bounds the input.

use std::panic;
use std::thread;

use crate::problem::{Price, RodProblem};
use crate::tables::CutTables;
use crate::traits::CutSolver;

/// Memoized recursive solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoizedSolver;

/// Cache activity for one fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Sub-lengths evaluated by scanning candidates.
    pub computed: usize,
    /// Lookups answered from the cache (the empty piece is not counted).
    pub cache_hits: usize,
}

struct MemoContext<'p, 'a> {
    problem: &'p RodProblem<'a>,
    tables: CutTables,
    stats: MemoStats,
}

impl<'p, 'a> MemoContext<'p, 'a> {
    fn new(problem: &'p RodProblem<'a>) -> Self {
        Self {
            problem,
            tables: CutTables::new(problem.length()),
            stats: MemoStats::default(),
        }
    }

    fn best(&mut self, n: usize) -> Price {
        if n == 0 {
            return 0;
        }
        if let Some(profit) = self.tables.profit(n) {
            self.stats.cache_hits += 1;
            return profit;
        }

        let mut best = 0;
        let mut best_cut = n;
        for i in 1..=n {
            let candidate = self.problem.price(i).saturating_add(self.best(n - i));
            if candidate > best {
                best = candidate;
                best_cut = i;
            }
        }

        self.tables.record(n, best, best_cut);
        self.stats.computed += 1;
        best
    }
}

/// Deepest recursion run directly on the calling thread.
pub const INLINE_DEPTH: usize = 1_024;

/// Stack reserved per recursion level on the worker thread, plus a fixed base.
const FRAME_BYTES: usize = 1_024;
const BASE_STACK_BYTES: usize = 2 * 1024 * 1024;

fn worker_stack_bytes(depth: usize) -> usize {
    depth
        .saturating_mul(FRAME_BYTES)
        .saturating_add(BASE_STACK_BYTES)
}

/// Run `ctx.best(n)` where the stack can hold `n` nested frames.
fn fill_to_depth(ctx: &mut MemoContext<'_, '_>, n: usize) {
    if n <= INLINE_DEPTH {
        ctx.best(n);
        return;
    }

    let spawned = thread::scope(|scope| {
        let worker = thread::Builder::new()
            .name("memoized-fill".to_string())
            .stack_size(worker_stack_bytes(n))
            .spawn_scoped(scope, || {
                ctx.best(n);
            });
        match worker {
            Ok(handle) => {
                if let Err(payload) = handle.join() {
                    panic::resume_unwind(payload);
                }
                true
            }
            Err(_) => false,
        }
    });

    // Thread creation refused; fall back to the caller's stack.
    if !spawned {
        ctx.best(n);
    }
}

impl MemoizedSolver {
    /// Fill the tables and report how often the cache was used.
    pub fn fill_with_stats(&self, problem: &RodProblem<'_>) -> (CutTables, MemoStats) {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill", solver = self.name(), length = problem.length());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut ctx = MemoContext::new(problem);
        fill_to_depth(&mut ctx, problem.length());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            computed = ctx.stats.computed,
            cache_hits = ctx.stats.cache_hits,
            "memo fill finished"
        );

        (ctx.tables, ctx.stats)
    }
}

impl CutSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn fill_tables(&self, problem: &RodProblem<'_>) -> CutTables {
        self.fill_with_stats(problem).0
    }
}
