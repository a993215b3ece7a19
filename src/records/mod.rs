//! Flat views over fixed-size records.
//!
//! Structured values (points, vectors, angle pairs...) reach the engine as
//! arrays of `[T; N]` records. A record array is reinterpreted as one flat
//! buffer where record `r` field `f` sits at index `r * N + f`, so field order
//! becomes buffer order and two-field records become an interleaved buffer.
//! Results are reinterpreted back the same way.

use std::ops::Div;

use num_traits::FromPrimitive;

use crate::{
    catalog::{AddOp, MultiplyOp, SubtractOp, SumPairsOp},
    engine::Engine,
    error::LaneError,
    numerics::Element,
    operators::{BinaryKernel, PairAggregateKernel},
};

/// The records as one flat buffer, fields in declaration order.
pub fn flatten<T, const N: usize>(records: &[[T; N]]) -> &[T] {
    records.as_flattened()
}

pub fn flatten_mut<T, const N: usize>(records: &mut [[T; N]]) -> &mut [T] {
    records.as_flattened_mut()
}

/// Field-wise `left + right`, record by record.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the arrays hold different numbers of records.
/// Lengths are reported in elements, not records.
pub fn add_records<T: Element, const N: usize>(
    left: &[[T; N]],
    right: &[[T; N]],
    destination: &mut [[T; N]],
) -> Result<(), LaneError>
where
    AddOp: BinaryKernel<T>,
{
    Engine::host().binary(&AddOp, flatten(left), flatten(right), flatten_mut(destination))
}

/// Field-wise `left - right`, record by record.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the arrays hold different numbers of records.
pub fn subtract_records<T: Element, const N: usize>(
    left: &[[T; N]],
    right: &[[T; N]],
    destination: &mut [[T; N]],
) -> Result<(), LaneError>
where
    SubtractOp: BinaryKernel<T>,
{
    Engine::host().binary(&SubtractOp, flatten(left), flatten(right), flatten_mut(destination))
}

/// Multiplies every field of every record by `factor`, in place.
pub fn scale_records<T: Element, const N: usize>(records: &mut [[T; N]], factor: T)
where
    MultiplyOp: BinaryKernel<T>,
{
    Engine::host().broadcast_in_place(&MultiplyOp, flatten_mut(records), factor)
}

/// Field-wise sum of two-field records.
pub fn sum_records<T: Element>(records: &[[T; 2]]) -> [T; 2]
where
    SumPairsOp: PairAggregateKernel<T>,
{
    let Ok((first, second)) = Engine::host().aggregate_pairs(&SumPairsOp, flatten(records)) else {
        unreachable!("flattened pairs have even length")
    };
    [first, second]
}

/// Field-wise mean of two-field records, `None` for an empty array or a record
/// count not representable in `T`.
pub fn centroid<T: Element>(records: &[[T; 2]]) -> Option<[T; 2]>
where
    T: FromPrimitive + Div<Output = T>,
    SumPairsOp: PairAggregateKernel<T>,
{
    if records.is_empty() {
        return None;
    }
    let count = T::from_usize(records.len())?;
    let [first, second] = sum_records(records);
    Some([first / count, second / count])
}
