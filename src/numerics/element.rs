use std::simd::Simd;

use crate::numerics::lane::Lane;

/// A scalar type the engine can stream through buffers.
///
/// Each element type names one lane type per register class. Which of them
/// is used for a call is decided at runtime by [`LaneWidth`](crate::numerics::LaneWidth).
/// Beyond `Copy` the trait asks for nothing, arithmetic included: every
/// operation asks for exactly the `std::ops` capabilities it needs, on the
/// element and on its lanes.
///
/// Custom numeric types without a SIMD representation implement this trait
/// with [`ScalarLane`](crate::numerics::ScalarLane) for all three classes and
/// run at lane width 1:
///
/// ```
/// use lanewise::numerics::{Element, ScalarLane};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Meters(f64);
///
/// impl Element for Meters {
///     type Wide = ScalarLane<Meters>;
///     type Mid = ScalarLane<Meters>;
///     type Narrow = ScalarLane<Meters>;
/// }
/// ```
pub trait Element: Copy {
    /// 512-bit register class.
    type Wide: Lane<Self>;
    /// 256-bit register class.
    type Mid: Lane<Self>;
    /// 128-bit register class.
    type Narrow: Lane<Self>;
}

macro_rules! impl_element {
    ($($elem:ty => ($wide:literal, $mid:literal, $narrow:literal)),* $(,)?) => {
        $(
            impl Element for $elem {
                type Wide = Simd<$elem, $wide>;
                type Mid = Simd<$elem, $mid>;
                type Narrow = Simd<$elem, $narrow>;
            }
        )*
    };
}

impl_element!(
    i8 => (64, 32, 16),
    u8 => (64, 32, 16),
    i16 => (32, 16, 8),
    u16 => (32, 16, 8),
    i32 => (16, 8, 4),
    u32 => (16, 8, 4),
    f32 => (16, 8, 4),
    i64 => (8, 4, 2),
    u64 => (8, 4, 2),
    f64 => (8, 4, 2),
);
