//! Lane/remainder loops running operators over borrowed buffers.
//!
//! An [`Engine`] is nothing more than a chosen [`LaneWidth`]. Every call
//! dispatches once on that width to a loop monomorphized for the matching lane
//! type, processes whole lanes with the operator's lane form, and finishes the
//! `0..W-1` remaining elements with its scalar form.
//!
//! # Contract
//!
//! - Sources and destination of an elementwise call have equal lengths. This
//!   is checked before anything is written.
//! - The `*_in_place` entry points use their first buffer both as a source and
//!   as the destination. Each lane is loaded in full before the result is
//!   stored over it, so the result is the same as with a fresh destination.
//! - No state survives a call.
//! - Lanes and the tail each keep their own arithmetic. `Simd` integer
//!   operations wrap, scalar ones panic on overflow when overflow checks are
//!   on, so an overflowing integer call may panic at one width and wrap at
//!   another.

use crate::numerics::LaneWidth;

/// Selects, for one call, the monomorphized pass matching a lane width.
macro_rules! dispatch_lanes {
    ($width:expr, $elem:ty, $pass:ident($($arg:expr),* $(,)?)) => {
        match $width {
            $crate::numerics::LaneWidth::Wide => {
                $pass::<$elem, <$elem as $crate::numerics::Element>::Wide, _>($($arg),*)
            }
            $crate::numerics::LaneWidth::Mid => {
                $pass::<$elem, <$elem as $crate::numerics::Element>::Mid, _>($($arg),*)
            }
            $crate::numerics::LaneWidth::Narrow => {
                $pass::<$elem, <$elem as $crate::numerics::Element>::Narrow, _>($($arg),*)
            }
            $crate::numerics::LaneWidth::Scalar => {
                $pass::<$elem, $crate::numerics::ScalarLane<$elem>, _>($($arg),*)
            }
        }
    };
}

mod aggregate;
mod elementwise;

/// Entry point of every elementwise and aggregation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Engine {
    width: LaneWidth,
}

impl Engine {
    /// An engine using the widest lanes the running host supports.
    pub fn host() -> Self {
        Engine {
            width: LaneWidth::detect(),
        }
    }

    /// An engine pinned to `width`, whatever the host supports. Wider lanes than
    /// the host's registers stay correct; they are split by the compiler.
    pub fn with_width(width: LaneWidth) -> Self {
        Engine { width }
    }

    pub fn width(&self) -> LaneWidth {
        self.width
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::host()
    }
}
