//! Throughput harness for the engine.
//!
//! This module provides what the `lanewise-bench` binary sweeps over: element
//! kinds and operations to benchmark, randomized (or `.npy`-loaded) workloads,
//! timing statistics and serializable result rows.

mod load;
mod report;
mod runner;
mod timings;
mod workload;

pub use load::load_npy_buffer;
pub use report::BenchRecord;
pub use runner::{CaseOutcome, checksums_agree, run_case};
pub use timings::Timings;
pub use workload::{Sample, Workload};

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::numerics::LaneWidth;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported .npy content: {0}")]
    Npy(String),

    #[error("could not serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("--input holds floating-point arrays only, not {0}")]
    UnsupportedInput(ElementKind),

    #[error("unknown element kind `{0}`, expected one of f32, f64, i32, i64")]
    UnknownElement(String),

    #[error(
        "unknown operation `{0}`, expected one of add, add-value, negate, multiply-add, sum, sum-pairs"
    )]
    UnknownOperation(String),

    #[error("{op} at width {width}: checksum {actual} differs from scalar checksum {expected}")]
    ChecksumMismatch {
        op: BenchOp,
        width: LaneWidth,
        expected: f64,
        actual: f64,
    },

    #[error(transparent)]
    Lane(#[from] crate::error::LaneError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    F32,
    F64,
    I32,
    I64,
}

impl ElementKind {
    /// Only floating-point kinds can be loaded from `.npy` inputs.
    pub fn is_float(self) -> bool {
        matches!(self, ElementKind::F32 | ElementKind::F64)
    }

    /// Fails with [`BenchError::UnsupportedInput`] for kinds `.npy` inputs
    /// cannot be loaded as.
    pub fn ensure_loadable(self) -> Result<(), BenchError> {
        if self.is_float() {
            Ok(())
        } else {
            Err(BenchError::UnsupportedInput(self))
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::F32 => "f32",
            ElementKind::F64 => "f64",
            ElementKind::I32 => "i32",
            ElementKind::I64 => "i64",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "f32" => Ok(ElementKind::F32),
            "f64" => Ok(ElementKind::F64),
            "i32" => Ok(ElementKind::I32),
            "i64" => Ok(ElementKind::I64),
            _ => Err(BenchError::UnknownElement(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchOp {
    Add,
    AddValue,
    Negate,
    MultiplyAdd,
    Sum,
    SumPairs,
}

impl BenchOp {
    pub const ALL: [BenchOp; 6] = [
        BenchOp::Add,
        BenchOp::AddValue,
        BenchOp::Negate,
        BenchOp::MultiplyAdd,
        BenchOp::Sum,
        BenchOp::SumPairs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BenchOp::Add => "add",
            BenchOp::AddValue => "add-value",
            BenchOp::Negate => "negate",
            BenchOp::MultiplyAdd => "multiply-add",
            BenchOp::Sum => "sum",
            BenchOp::SumPairs => "sum-pairs",
        }
    }

    /// Aggregations reassociate, so their float checksums only agree approximately.
    pub fn is_aggregation(self) -> bool {
        matches!(self, BenchOp::Sum | BenchOp::SumPairs)
    }
}

impl fmt::Display for BenchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BenchOp {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BenchOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s.trim())
            .ok_or_else(|| BenchError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_parses() {
        assert_eq!("f32".parse::<ElementKind>().unwrap(), ElementKind::F32);
        assert_eq!(" i64".parse::<ElementKind>().unwrap(), ElementKind::I64);
        assert!(matches!(
            "u7".parse::<ElementKind>(),
            Err(BenchError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_only_float_kinds_are_loadable() {
        assert!(ElementKind::F32.ensure_loadable().is_ok());
        assert!(ElementKind::F64.ensure_loadable().is_ok());
        let err = ElementKind::I32.ensure_loadable().unwrap_err();
        assert!(matches!(err, BenchError::UnsupportedInput(ElementKind::I32)));
        assert_eq!(err.to_string(), "--input holds floating-point arrays only, not i32");
        assert!(matches!(
            ElementKind::I64.ensure_loadable(),
            Err(BenchError::UnsupportedInput(ElementKind::I64))
        ));
    }

    #[test]
    fn test_bench_op_round_trips() {
        for op in BenchOp::ALL {
            assert_eq!(op.to_string().parse::<BenchOp>().unwrap(), op);
        }
        assert!(matches!(
            "fft".parse::<BenchOp>(),
            Err(BenchError::UnknownOperation(_))
        ));
    }

    #[test]
    fn test_bench_op_serde_matches_display() {
        for op in BenchOp::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{op}\""));
        }
    }
}
