use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{
    engine::Engine,
    error::LaneError,
    numerics::{Element, Lane},
    operators::{BinaryKernel, BinaryLane, BinaryOperator, UnaryKernel, UnaryLane, UnaryOperator},
};

macro_rules! binary_operator {
    ($(#[$meta:meta])* $name:ident, $capability:ident, $method:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl<T: $capability<Output = T>> BinaryOperator<T> for $name {
            #[inline(always)]
            fn scalar(&self, left: T, right: T) -> T {
                left.$method(right)
            }
        }

        impl<T, L> BinaryLane<T, L> for $name
        where
            T: $capability<Output = T>,
            L: Lane<T> + $capability<Output = L>,
        {
            #[inline(always)]
            fn lane(&self, left: L, right: L) -> L {
                left.$method(right)
            }
        }
    };
}

binary_operator!(
    /// `left + right`.
    ///
    /// Integer overflow: whole lanes wrap (`Simd` arithmetic), while tail
    /// elements and the `Scalar` width use the element's own operator, which
    /// panics in builds with overflow checks. Without overflow checks both wrap
    /// and every width gives the same result.
    AddOp, Add, add
);
binary_operator!(
    /// `left - right`.
    ///
    /// Integer overflow: whole lanes wrap (`Simd` arithmetic), while tail
    /// elements and the `Scalar` width use the element's own operator, which
    /// panics in builds with overflow checks. Without overflow checks both wrap
    /// and every width gives the same result.
    SubtractOp, Sub, sub
);
binary_operator!(
    /// `left * right`.
    ///
    /// Integer overflow: whole lanes wrap (`Simd` arithmetic), while tail
    /// elements and the `Scalar` width use the element's own operator, which
    /// panics in builds with overflow checks. Without overflow checks both wrap
    /// and every width gives the same result.
    MultiplyOp, Mul, mul
);
binary_operator!(
    /// `left / right`. Integer division by zero panics, as it does for the
    /// element type itself.
    DivideOp, Div, div
);

/// `-value`. Unavailable for unsigned integers, which have no `Neg`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NegateOp;

impl<T: Neg<Output = T>> UnaryOperator<T> for NegateOp {
    #[inline(always)]
    fn scalar(&self, value: T) -> T {
        -value
    }
}

impl<T, L> UnaryLane<T, L> for NegateOp
where
    T: Neg<Output = T>,
    L: Lane<T> + Neg<Output = L>,
{
    #[inline(always)]
    fn lane(&self, value: L) -> L {
        -value
    }
}

/// `value * value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareOp;

impl<T: Mul<Output = T> + Copy> UnaryOperator<T> for SquareOp {
    #[inline(always)]
    fn scalar(&self, value: T) -> T {
        value * value
    }
}

impl<T, L> UnaryLane<T, L> for SquareOp
where
    T: Mul<Output = T> + Copy,
    L: Lane<T> + Mul<Output = L>,
{
    #[inline(always)]
    fn lane(&self, value: L) -> L {
        value * value
    }
}

/// Generates the six entry points of a binary operation: array/array into a
/// new buffer, into a destination and in place, then the same three with a
/// broadcast value as right operand.
macro_rules! binary_entry_points {
    (
        $op:ident, $symbol:literal,
        $fresh:ident, $into:ident, $assign:ident,
        $value:ident, $value_into:ident, $value_assign:ident
    ) => {
        #[doc = concat!("Returns `left[i] ", $symbol, " right[i]` in a new buffer.")]
        ///
        /// # Errors
        ///
        /// [`LaneError::LengthMismatch`] if the buffers differ in length.
        pub fn $fresh<T: Element>(left: &[T], right: &[T]) -> Result<Vec<T>, LaneError>
        where
            $op: BinaryKernel<T>,
        {
            let mut out = left.to_vec();
            Engine::host().binary_in_place(&$op, &mut out, right)?;
            Ok(out)
        }

        #[doc = concat!("Writes `left[i] ", $symbol, " right[i]` into `destination`.")]
        ///
        /// # Errors
        ///
        /// [`LaneError::LengthMismatch`] if the buffers differ in length.
        pub fn $into<T: Element>(
            left: &[T],
            right: &[T],
            destination: &mut [T],
        ) -> Result<(), LaneError>
        where
            $op: BinaryKernel<T>,
        {
            Engine::host().binary(&$op, left, right, destination)
        }

        #[doc = concat!("In place: `buffer[i] = buffer[i] ", $symbol, " right[i]`.")]
        ///
        /// # Errors
        ///
        /// [`LaneError::LengthMismatch`] if the buffers differ in length.
        pub fn $assign<T: Element>(buffer: &mut [T], right: &[T]) -> Result<(), LaneError>
        where
            $op: BinaryKernel<T>,
        {
            Engine::host().binary_in_place(&$op, buffer, right)
        }

        #[doc = concat!("Returns `source[i] ", $symbol, " value` in a new buffer.")]
        pub fn $value<T: Element>(source: &[T], value: T) -> Vec<T>
        where
            $op: BinaryKernel<T>,
        {
            let mut out = source.to_vec();
            Engine::host().broadcast_in_place(&$op, &mut out, value);
            out
        }

        #[doc = concat!("Writes `source[i] ", $symbol, " value` into `destination`.")]
        ///
        /// # Errors
        ///
        /// [`LaneError::LengthMismatch`] if `destination` is not as long as `source`.
        pub fn $value_into<T: Element>(
            source: &[T],
            value: T,
            destination: &mut [T],
        ) -> Result<(), LaneError>
        where
            $op: BinaryKernel<T>,
        {
            Engine::host().broadcast(&$op, source, value, destination)
        }

        #[doc = concat!("In place: `buffer[i] = buffer[i] ", $symbol, " value`.")]
        pub fn $value_assign<T: Element>(buffer: &mut [T], value: T)
        where
            $op: BinaryKernel<T>,
        {
            Engine::host().broadcast_in_place(&$op, buffer, value)
        }
    };
}

binary_entry_points!(AddOp, "+", add, add_into, add_assign, add_value, add_value_into, add_value_assign);
binary_entry_points!(
    SubtractOp,
    "-",
    subtract,
    subtract_into,
    subtract_assign,
    subtract_value,
    subtract_value_into,
    subtract_value_assign
);
binary_entry_points!(
    MultiplyOp,
    "*",
    multiply,
    multiply_into,
    multiply_assign,
    multiply_value,
    multiply_value_into,
    multiply_value_assign
);
binary_entry_points!(
    DivideOp,
    "/",
    divide,
    divide_into,
    divide_assign,
    divide_value,
    divide_value_into,
    divide_value_assign
);

macro_rules! unary_entry_points {
    ($op:ident, $formula:literal, $fresh:ident, $into:ident, $assign:ident) => {
        #[doc = concat!("Returns `", $formula, "` for every element, in a new buffer.")]
        pub fn $fresh<T: Element>(source: &[T]) -> Vec<T>
        where
            $op: UnaryKernel<T>,
        {
            let mut out = source.to_vec();
            Engine::host().unary_in_place(&$op, &mut out);
            out
        }

        #[doc = concat!("Writes `", $formula, "` for every element into `destination`.")]
        ///
        /// # Errors
        ///
        /// [`LaneError::LengthMismatch`] if `destination` is not as long as `source`.
        pub fn $into<T: Element>(source: &[T], destination: &mut [T]) -> Result<(), LaneError>
        where
            $op: UnaryKernel<T>,
        {
            Engine::host().unary(&$op, source, destination)
        }

        #[doc = concat!("Replaces every element `x` of `buffer` with `", $formula, "`.")]
        pub fn $assign<T: Element>(buffer: &mut [T])
        where
            $op: UnaryKernel<T>,
        {
            Engine::host().unary_in_place(&$op, buffer)
        }
    };
}

unary_entry_points!(NegateOp, "-x", negate, negate_into, negate_assign);
unary_entry_points!(SquareOp, "x * x", square, square_into, square_assign);
