#![feature(portable_simd)]

pub mod bench;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod numerics;
pub mod operators;
pub mod records;

pub use engine::Engine;
pub use error::LaneError;
pub use numerics::{Element, LaneWidth};
