use std::ops::{Add, Mul};

use crate::{
    engine::Engine,
    error::LaneError,
    numerics::{Element, Lane},
    operators::{TernaryKernel, TernaryLane, TernaryOperator},
};

/// `a * b + c`.
///
/// Computed as a multiplication followed by an addition in both forms, never as
/// a hardware fused multiply-add: the single rounding of an FMA would make the
/// lane form disagree with the scalar form on floats.
///
/// Integer overflow wraps in whole lanes and follows the element's own
/// operators (a panic with overflow checks) in the tail, see [`AddOp`](crate::catalog::AddOp).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiplyAddOp;

impl<T> TernaryOperator<T> for MultiplyAddOp
where
    T: Add<Output = T> + Mul<Output = T>,
{
    #[inline(always)]
    fn scalar(&self, a: T, b: T, c: T) -> T {
        a * b + c
    }
}

impl<T, L> TernaryLane<T, L> for MultiplyAddOp
where
    T: Add<Output = T> + Mul<Output = T>,
    L: Lane<T> + Add<Output = L> + Mul<Output = L>,
{
    #[inline(always)]
    fn lane(&self, a: L, b: L, c: L) -> L {
        a * b + c
    }
}

/// `(a + b) * c`.
///
/// Integer overflow behaves as for [`MultiplyAddOp`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddMultiplyOp;

impl<T> TernaryOperator<T> for AddMultiplyOp
where
    T: Add<Output = T> + Mul<Output = T>,
{
    #[inline(always)]
    fn scalar(&self, a: T, b: T, c: T) -> T {
        (a + b) * c
    }
}

impl<T, L> TernaryLane<T, L> for AddMultiplyOp
where
    T: Add<Output = T> + Mul<Output = T>,
    L: Lane<T> + Add<Output = L> + Mul<Output = L>,
{
    #[inline(always)]
    fn lane(&self, a: L, b: L, c: L) -> L {
        (a + b) * c
    }
}

/// Returns `a[i] * b[i] + c[i]` in a new buffer.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the buffers differ in length.
pub fn multiply_add<T: Element>(a: &[T], b: &[T], c: &[T]) -> Result<Vec<T>, LaneError>
where
    MultiplyAddOp: TernaryKernel<T>,
{
    let mut out = a.to_vec();
    Engine::host().ternary_in_place(&MultiplyAddOp, &mut out, b, c)?;
    Ok(out)
}

/// Writes `a[i] * b[i] + c[i]` into `destination`.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the buffers differ in length.
pub fn multiply_add_into<T: Element>(
    a: &[T],
    b: &[T],
    c: &[T],
    destination: &mut [T],
) -> Result<(), LaneError>
where
    MultiplyAddOp: TernaryKernel<T>,
{
    Engine::host().ternary(&MultiplyAddOp, a, b, c, destination)
}

/// In place: `a[i] = a[i] * b[i] + c[i]`.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the buffers differ in length.
pub fn multiply_add_assign<T: Element>(a: &mut [T], b: &[T], c: &[T]) -> Result<(), LaneError>
where
    MultiplyAddOp: TernaryKernel<T>,
{
    Engine::host().ternary_in_place(&MultiplyAddOp, a, b, c)
}

/// Returns `(a[i] + b[i]) * c[i]` in a new buffer.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the buffers differ in length.
pub fn add_multiply<T: Element>(a: &[T], b: &[T], c: &[T]) -> Result<Vec<T>, LaneError>
where
    AddMultiplyOp: TernaryKernel<T>,
{
    let mut out = a.to_vec();
    Engine::host().ternary_in_place(&AddMultiplyOp, &mut out, b, c)?;
    Ok(out)
}

/// Writes `(a[i] + b[i]) * c[i]` into `destination`.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the buffers differ in length.
pub fn add_multiply_into<T: Element>(
    a: &[T],
    b: &[T],
    c: &[T],
    destination: &mut [T],
) -> Result<(), LaneError>
where
    AddMultiplyOp: TernaryKernel<T>,
{
    Engine::host().ternary(&AddMultiplyOp, a, b, c, destination)
}

/// In place: `a[i] = (a[i] + b[i]) * c[i]`.
///
/// # Errors
///
/// [`LaneError::LengthMismatch`] if the buffers differ in length.
pub fn add_multiply_assign<T: Element>(a: &mut [T], b: &[T], c: &[T]) -> Result<(), LaneError>
where
    AddMultiplyOp: TernaryKernel<T>,
{
    Engine::host().ternary_in_place(&AddMultiplyOp, a, b, c)
}
