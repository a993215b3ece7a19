use serde::{Deserialize, Serialize};

use crate::bench::{BenchError, BenchOp, CaseOutcome, ElementKind};
use crate::numerics::LaneWidth;

/// One result row of a sweep, written as a JSON line with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    pub element: ElementKind,
    pub op: BenchOp,
    pub width: LaneWidth,
    pub lanes: usize,
    pub len: usize,
    pub repetitions: usize,
    pub nanos_per_call: f64,
    pub elements_per_second: f64,
    pub checksum: f64,
}

impl BenchRecord {
    pub fn new(
        element: ElementKind,
        op: BenchOp,
        width: LaneWidth,
        lanes: usize,
        len: usize,
        outcome: &CaseOutcome,
    ) -> Self {
        BenchRecord {
            element,
            op,
            width,
            lanes,
            len,
            repetitions: outcome.timings.get_calls(),
            nanos_per_call: outcome.timings.nanos_per_call(),
            elements_per_second: outcome.timings.elements_per_second(),
            checksum: outcome.checksum,
        }
    }

    pub fn to_json_line(&self) -> Result<String, BenchError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::bench::Timings;

    fn outcome() -> CaseOutcome {
        let mut timings = Timings::new();
        timings.bump_call(1024, Duration::from_micros(2));
        timings.bump_call(1024, Duration::from_micros(2));
        CaseOutcome {
            timings,
            checksum: 12.5,
        }
    }

    #[test]
    fn test_record_takes_rates_from_timings() {
        let record = BenchRecord::new(
            ElementKind::F32,
            BenchOp::MultiplyAdd,
            LaneWidth::Mid,
            8,
            1024,
            &outcome(),
        );
        assert_eq!(record.repetitions, 2);
        assert_eq!(record.nanos_per_call, 2000.0);
        assert_eq!(record.checksum, 12.5);
    }

    #[test]
    fn test_json_line_fields() {
        let record = BenchRecord::new(
            ElementKind::I64,
            BenchOp::SumPairs,
            LaneWidth::Scalar,
            1,
            1024,
            &outcome(),
        );
        let line = record.to_json_line().unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["element"], "i64");
        assert_eq!(value["op"], "sum-pairs");
        assert_eq!(value["width"], "scalar");
        assert_eq!(value["lanes"], 1);

        let parsed: BenchRecord = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, record);
    }
}
