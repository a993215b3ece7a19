//! Element types, SIMD lanes and host lane-width detection.
//!
//! This module provides the layout layer every operation is built on: an
//! [`Element`] names one [`Lane`] type per register class, and [`LaneWidth`]
//! picks the register class at runtime from the host's capabilities. Lanes are
//! `std::simd::Simd` vectors, or the width-1 [`ScalarLane`] for hosts and types
//! without vector support.

mod element;
mod lane;
mod width;

pub use element::Element;
pub use lane::{Lane, MAX_LANE_WIDTH, ScalarLane};
pub use width::LaneWidth;
