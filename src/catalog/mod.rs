//! Concrete operations built on the engine.
//!
//! Each operator descriptor only requires the `std::ops` traits it uses (plus
//! `num_traits::Zero` for the seeds of sums), so the same operation serves
//! integers, floats and custom numeric types. Asking for an operation the element
//! type cannot support, such as negating a `u32`, does not compile.
//!
//! The free functions run on [`Engine::host`](crate::engine::Engine::host).
//! Callers that need a fixed lane width pass the descriptors to an
//! [`Engine`](crate::engine::Engine) built with `Engine::with_width`.

mod arithmetic;
mod fused;
mod reduce;

pub use arithmetic::*;
pub use fused::*;
pub use reduce::*;
