//! Validated rod-cutting instances.
//!
//! Every solver takes a [`RodProblem`], so the two preconditions below are
//! checked once at the boundary and never again inside the recurrences:
//! - the rod length is strictly positive,
//! - the price table has exactly one entry per piece length `1..=length`.

use crate::error::CutError;

/// Sale price of a single piece. Signed so that losses can be expressed.
pub type Price = i64;

/// Check the shared preconditions and return the length as an index type.
///
/// Prices are deliberately not inspected: zero and negative entries are
/// accepted and simply never win a strict comparison against a better option.
pub fn validate(length: i64, prices: &[Price]) -> Result<usize, CutError> {
    if length <= 0 {
        return Err(CutError::InvalidLength(length));
    }
    let n = usize::try_from(length).map_err(|_| CutError::InvalidLength(length))?;
    if prices.len() != n {
        return Err(CutError::PriceTableMismatch {
            length: n,
            prices: prices.len(),
        });
    }
    Ok(n)
}

/// A rod of fixed length together with its price table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RodProblem<'a> {
    length: usize,
    prices: &'a [Price],
}

impl<'a> RodProblem<'a> {
    pub fn new(length: i64, prices: &'a [Price]) -> Result<Self, CutError> {
        let length = validate(length, prices)?;
        Ok(Self { length, prices })
    }

    /// Rod length `n`, always `>= 1`.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Price of a piece of length `piece`.
    ///
    /// # Panics
    /// Panics if `piece` is zero or exceeds the rod length.
    #[inline]
    pub fn price(&self, piece: usize) -> Price {
        self.prices[piece - 1]
    }
}
