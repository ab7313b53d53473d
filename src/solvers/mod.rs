//! Rod-cutting strategies.
//!
//! Both implement [`CutSolver`](crate::traits::CutSolver) and must agree on
//! every valid instance, down to the cut sequence:
//! - [`memoized`]  : top-down recursion with per-call caches.
//! - [`tabulated`] : bottom-up filling in increasing sub-length order.

pub mod memoized;
pub mod tabulated;

pub use memoized::{MemoStats, MemoizedSolver};
pub use tabulated::TabulatedSolver;
