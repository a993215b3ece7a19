use std::ops::{Add, Div};

use num_traits::{FromPrimitive, Zero};

use crate::{
    engine::Engine,
    error::LaneError,
    numerics::{Element, Lane},
    operators::{
        AggregateKernel, AggregateOperator, BinaryLane, BinaryOperator, PairAggregateKernel,
        PairAggregateOperator,
    },
};

/// Sum of all elements, seeded with the additive identity.
///
/// On integers, lane additions wrap while tail additions and the horizontal
/// reduction of the register use the element's `+`, which panics on overflow
/// when overflow checks are on. Whether an overflowing sum panics therefore
/// depends on the lane width and on where the large values sit. Wrapping
/// addition is associative, so without overflow checks every width agrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumOp;

impl<T: Add<Output = T>> BinaryOperator<T> for SumOp {
    #[inline(always)]
    fn scalar(&self, left: T, right: T) -> T {
        left + right
    }
}

impl<T, L> BinaryLane<T, L> for SumOp
where
    T: Add<Output = T>,
    L: Lane<T> + Add<Output = L>,
{
    #[inline(always)]
    fn lane(&self, left: L, right: L) -> L {
        left + right
    }
}

impl<T: Zero> AggregateOperator<T> for SumOp {
    fn seed(&self) -> T {
        T::zero()
    }
}

/// Component-wise sum of interleaved pairs.
///
/// Integer overflow behaves as for [`SumOp`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumPairsOp;

impl<T: Add<Output = T>> BinaryOperator<T> for SumPairsOp {
    #[inline(always)]
    fn scalar(&self, left: T, right: T) -> T {
        left + right
    }
}

impl<T, L> BinaryLane<T, L> for SumPairsOp
where
    T: Add<Output = T>,
    L: Lane<T> + Add<Output = L>,
{
    #[inline(always)]
    fn lane(&self, left: L, right: L) -> L {
        left + right
    }
}

impl<T: Zero> PairAggregateOperator<T> for SumPairsOp {
    fn seed(&self) -> (T, T) {
        (T::zero(), T::zero())
    }
}

/// Sum of `source`; the additive identity when it is empty.
pub fn sum<T: Element>(source: &[T]) -> T
where
    SumOp: AggregateKernel<T>,
{
    Engine::host().aggregate(&SumOp, source)
}

/// Component-wise sum of the interleaved pairs `[x0, y0, x1, y1, ...]`:
/// `(x0 + x1 + ..., y0 + y1 + ...)`.
///
/// # Errors
///
/// [`LaneError::UnpairedLength`] if `source` has an odd length.
pub fn sum_pairs<T: Element>(source: &[T]) -> Result<(T, T), LaneError>
where
    SumPairsOp: PairAggregateKernel<T>,
{
    Engine::host().aggregate_pairs(&SumPairsOp, source)
}

/// Arithmetic mean of `source`.
///
/// `None` when `source` is empty, or when its length cannot be represented in
/// `T` (e.g. more than 255 elements of `u8`). Integer means truncate like the
/// element type's division.
pub fn average<T: Element>(source: &[T]) -> Option<T>
where
    T: FromPrimitive + Div<Output = T>,
    SumOp: AggregateKernel<T>,
{
    if source.is_empty() {
        return None;
    }
    let count = T::from_usize(source.len())?;
    Some(sum(source) / count)
}

/// Component-wise mean of interleaved pairs, `None` when there are no pairs
/// or the pair count cannot be represented in `T`.
///
/// # Errors
///
/// [`LaneError::UnpairedLength`] if `source` has an odd length.
pub fn average_pairs<T: Element>(source: &[T]) -> Result<Option<(T, T)>, LaneError>
where
    T: FromPrimitive + Div<Output = T>,
    SumPairsOp: PairAggregateKernel<T>,
{
    let (first, second) = sum_pairs(source)?;
    if source.is_empty() {
        return Ok(None);
    }
    Ok(T::from_usize(source.len() / 2).map(|count| (first / count, second / count)))
}
