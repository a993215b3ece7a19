use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::LaneError,
    numerics::{Element, Lane, ScalarLane},
};

/// Register class used for the vectorized phase of a call.
///
/// The lane width `W` of a call is the number of elements of the call's element
/// type that fit in one register of this class, see [`LaneWidth::lanes`].
/// `Scalar` is the degenerate `W = 1` case: every element goes through the
/// scalar form of the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneWidth {
    Scalar,
    /// 128-bit registers (SSE2, NEON).
    Narrow,
    /// 256-bit registers (AVX2).
    Mid,
    /// 512-bit registers (AVX-512).
    Wide,
}

impl LaneWidth {
    pub const ALL: [LaneWidth; 4] = [
        LaneWidth::Scalar,
        LaneWidth::Narrow,
        LaneWidth::Mid,
        LaneWidth::Wide,
    ];

    /// Widest register class the running host executes natively.
    pub fn detect() -> Self {
        let width = Self::probe_host();
        tracing::debug!(?width, "detected host lane width");
        width
    }

    #[cfg(target_arch = "x86_64")]
    fn probe_host() -> Self {
        if std::arch::is_x86_feature_detected!("avx512f") {
            LaneWidth::Wide
        } else if std::arch::is_x86_feature_detected!("avx2") {
            LaneWidth::Mid
        } else if std::arch::is_x86_feature_detected!("sse2") {
            LaneWidth::Narrow
        } else {
            LaneWidth::Scalar
        }
    }

    #[cfg(target_arch = "aarch64")]
    fn probe_host() -> Self {
        if std::arch::is_aarch64_feature_detected!("neon") {
            LaneWidth::Narrow
        } else {
            LaneWidth::Scalar
        }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fn probe_host() -> Self {
        LaneWidth::Scalar
    }

    /// Register size in bytes, 0 for the scalar class.
    pub fn register_bytes(self) -> usize {
        match self {
            LaneWidth::Scalar => 0,
            LaneWidth::Narrow => 16,
            LaneWidth::Mid => 32,
            LaneWidth::Wide => 64,
        }
    }

    /// Number of `T` elements processed per lane at this width.
    pub fn lanes<T: Element>(self) -> usize {
        match self {
            LaneWidth::Scalar => <ScalarLane<T> as Lane<T>>::WIDTH,
            LaneWidth::Narrow => <T::Narrow as Lane<T>>::WIDTH,
            LaneWidth::Mid => <T::Mid as Lane<T>>::WIDTH,
            LaneWidth::Wide => <T::Wide as Lane<T>>::WIDTH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LaneWidth::Scalar => "scalar",
            LaneWidth::Narrow => "narrow",
            LaneWidth::Mid => "mid",
            LaneWidth::Wide => "wide",
        }
    }
}

impl fmt::Display for LaneWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LaneWidth {
    type Err = LaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scalar" => Ok(LaneWidth::Scalar),
            "narrow" => Ok(LaneWidth::Narrow),
            "mid" => Ok(LaneWidth::Mid),
            "wide" => Ok(LaneWidth::Wide),
            _ => Err(LaneError::UnknownWidth(s.to_string())),
        }
    }
}
