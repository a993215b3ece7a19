//! Operator capability abstraction.
//!
//! An operator is a small descriptor (usually zero-sized) with a scalar form and
//! one lane form per lane type. Four shapes exist:
//!
//! - unary, binary and ternary elementwise operators,
//! - aggregation operators (a binary operator plus an identity seed),
//!   with a variant for interleaved pairs.
//!
//! The `*Kernel` traits bundle the lane forms an engine call needs for an
//! element type, see [`kernel`].

pub mod kernel;

mod broadcast;
mod shapes;

pub use broadcast::Broadcast;
pub use kernel::{AggregateKernel, BinaryKernel, PairAggregateKernel, TernaryKernel, UnaryKernel};
pub use shapes::*;
