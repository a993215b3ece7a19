use std::ops::{Add, Div, Mul, Neg, Sub};
use std::simd::{Simd, SimdElement};

/// Largest lane width any [`Lane`] implementation may report. Matches a 512-bit
/// register filled with single-byte elements.
pub const MAX_LANE_WIDTH: usize = 64;

/// A fixed-width group of `T` values processed by one vector instruction.
///
/// # Contract
///
/// - `WIDTH` is at least 1 and at most [`MAX_LANE_WIDTH`].
/// - [`load`](Lane::load), [`store`](Lane::store) and [`spill`](Lane::spill)
///   are always called with slices of exactly `WIDTH` elements.
/// - Slot `i` of the lane corresponds to element `i` of the slice it was
///   loaded from or stored to.
pub trait Lane<T>: Copy {
    const WIDTH: usize;

    /// A lane holding `value` in every slot.
    fn splat(value: T) -> Self;

    fn load(slice: &[T]) -> Self;

    fn store(self, slice: &mut [T]);

    /// Writes every slot of the lane into `slots`, for horizontal reductions.
    fn spill(self, slots: &mut [T]);
}

macro_rules! impl_simd_lane {
    ($($width:literal),* $(,)?) => {
        $(
            impl<T: SimdElement> Lane<T> for Simd<T, $width> {
                const WIDTH: usize = $width;

                #[inline(always)]
                fn splat(value: T) -> Self {
                    Simd::splat(value)
                }

                #[inline(always)]
                fn load(slice: &[T]) -> Self {
                    Simd::from_slice(slice)
                }

                #[inline(always)]
                fn store(self, slice: &mut [T]) {
                    self.copy_to_slice(slice)
                }

                #[inline(always)]
                fn spill(self, slots: &mut [T]) {
                    self.copy_to_slice(slots)
                }
            }
        )*
    };
}

impl_simd_lane!(2, 4, 8, 16, 32, 64);

/// The degenerate lane of width 1, used on hosts without vector units and for
/// element types that have no SIMD representation.
///
/// Every arithmetic operator forwards to the wrapped scalar, so a custom numeric
/// type only needs the `std::ops` traits its operations require.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct ScalarLane<T>(pub T);

impl<T: Copy> Lane<T> for ScalarLane<T> {
    const WIDTH: usize = 1;

    #[inline(always)]
    fn splat(value: T) -> Self {
        ScalarLane(value)
    }

    #[inline(always)]
    fn load(slice: &[T]) -> Self {
        ScalarLane(slice[0])
    }

    #[inline(always)]
    fn store(self, slice: &mut [T]) {
        slice[0] = self.0;
    }

    #[inline(always)]
    fn spill(self, slots: &mut [T]) {
        slots[0] = self.0;
    }
}

macro_rules! forward_scalar_binop {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl<T: $trait<Output = T>> $trait for ScalarLane<T> {
                type Output = ScalarLane<T>;

                #[inline(always)]
                fn $method(self, rhs: Self) -> Self::Output {
                    ScalarLane(self.0.$method(rhs.0))
                }
            }
        )*
    };
}

forward_scalar_binop!(Add::add, Sub::sub, Mul::mul, Div::div);

impl<T: Neg<Output = T>> Neg for ScalarLane<T> {
    type Output = ScalarLane<T>;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        ScalarLane(-self.0)
    }
}
