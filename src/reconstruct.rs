//! Cut-sequence reconstruction from a first-cut mapping.

/// Walk `first_cut` from `length` down to zero and emit the piece lengths.
///
/// A missing entry, or one outside `1..=remaining`, is treated as "sell the
/// remainder uncut". The output therefore always sums to `length` and the
/// walk takes at most `length` steps, whatever mapping it is given.
pub fn reconstruct(first_cut: &[Option<usize>], length: usize) -> Vec<usize> {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("reconstruct", length).entered();

    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        let cut = first_cut
            .get(remaining)
            .copied()
            .flatten()
            .filter(|c| (1..=remaining).contains(c))
            .unwrap_or(remaining);
        cuts.push(cut);
        remaining -= cut;
    }
    cuts
}
