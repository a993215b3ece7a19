use std::{hint::black_box, time::Instant};

use crate::{
    bench::{BenchOp, Sample, Timings, Workload},
    catalog::{AddOp, MultiplyAddOp, NegateOp, SumOp, SumPairsOp},
    engine::Engine,
    error::LaneError,
    operators::{AggregateKernel, BinaryKernel, PairAggregateKernel, TernaryKernel, UnaryKernel},
};

/// Timings of one benchmark case plus a checksum of its last result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseOutcome {
    pub timings: Timings,
    pub checksum: f64,
}

/// Runs `op` over `workload` `repetitions` times on `engine`.
///
/// Elementwise operations write into a preallocated destination, so only the
/// engine call is timed. `sum-pairs` uses the longest even prefix of the first
/// operand.
pub fn run_case<T>(
    engine: &Engine,
    op: BenchOp,
    workload: &Workload<T>,
    repetitions: usize,
) -> Result<CaseOutcome, LaneError>
where
    T: Sample,
    AddOp: BinaryKernel<T>,
    NegateOp: UnaryKernel<T>,
    MultiplyAddOp: TernaryKernel<T>,
    SumOp: AggregateKernel<T>,
    SumPairsOp: PairAggregateKernel<T>,
{
    let mut timings = Timings::new();
    let mut destination = workload.a.clone();
    let mut checksum = 0.0;

    let processed = match op {
        BenchOp::SumPairs => workload.len() & !1,
        _ => workload.len(),
    };

    for _ in 0..repetitions {
        let start = Instant::now();
        match op {
            BenchOp::Add => engine.binary(&AddOp, &workload.a, &workload.b, &mut destination)?,
            BenchOp::AddValue => {
                engine.broadcast(&AddOp, &workload.a, workload.value, &mut destination)?
            }
            BenchOp::Negate => engine.unary(&NegateOp, &workload.a, &mut destination)?,
            BenchOp::MultiplyAdd => engine.ternary(
                &MultiplyAddOp,
                &workload.a,
                &workload.b,
                &workload.c,
                &mut destination,
            )?,
            BenchOp::Sum => {
                let total = black_box(engine.aggregate(&SumOp, &workload.a));
                checksum = total.to_f64().unwrap_or(f64::NAN);
            }
            BenchOp::SumPairs => {
                let (first, second) =
                    black_box(engine.aggregate_pairs(&SumPairsOp, &workload.a[..processed])?);
                checksum = first.to_f64().unwrap_or(f64::NAN) + second.to_f64().unwrap_or(f64::NAN);
            }
        }
        black_box(&mut destination);
        timings.bump_call(processed, start.elapsed());
    }

    if !op.is_aggregation() {
        checksum = destination
            .iter()
            .filter_map(|x| x.to_f64())
            .sum();
    }

    Ok(CaseOutcome { timings, checksum })
}

/// Whether `actual` matches the scalar-width `expected` checksum of `op`.
///
/// Elementwise results are identical at every width. Reordered float sums may
/// differ by the usual `n · ε · Σ|x|` bound.
pub fn checksums_agree<T: Sample>(
    op: BenchOp,
    workload: &Workload<T>,
    expected: f64,
    actual: f64,
) -> bool {
    if expected.is_nan() && actual.is_nan() {
        return true;
    }
    let tolerance = if op.is_aggregation() {
        T::EPSILON * workload.len() as f64 * workload.magnitude()
    } else {
        0.0
    };
    (expected - actual).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::LaneWidth;

    #[test]
    fn test_run_case_counts_calls_and_elements() {
        let workload = Workload::<f32>::generate(100, 3);
        let outcome = run_case(&Engine::host(), BenchOp::Add, &workload, 5).unwrap();
        assert_eq!(outcome.timings.get_calls(), 5);
        assert_eq!(outcome.timings.get_elements(), 500);
    }

    #[test]
    fn test_sum_pairs_counts_only_the_even_prefix() {
        let workload = Workload::<i32>::generate(101, 3);
        let outcome = run_case(&Engine::host(), BenchOp::SumPairs, &workload, 4).unwrap();
        assert_eq!(outcome.timings.get_elements(), 400);
        let outcome = run_case(&Engine::host(), BenchOp::Sum, &workload, 4).unwrap();
        assert_eq!(outcome.timings.get_elements(), 404);
    }

    #[test]
    fn test_checksums_match_across_widths() {
        let workload = Workload::<i64>::generate(301, 11);
        for op in BenchOp::ALL {
            let reference = run_case(&Engine::with_width(LaneWidth::Scalar), op, &workload, 1)
                .unwrap()
                .checksum;
            for width in LaneWidth::ALL {
                let outcome = run_case(&Engine::with_width(width), op, &workload, 1).unwrap();
                assert_eq!(outcome.checksum, reference, "op={op} width={width}");
            }
        }
    }

    #[test]
    fn test_float_sums_agree_within_tolerance() {
        let workload = Workload::<f32>::generate(10_000, 5);
        for op in [BenchOp::Sum, BenchOp::SumPairs] {
            let reference = run_case(&Engine::with_width(LaneWidth::Scalar), op, &workload, 1)
                .unwrap()
                .checksum;
            for width in LaneWidth::ALL {
                let outcome = run_case(&Engine::with_width(width), op, &workload, 1).unwrap();
                assert!(
                    checksums_agree(op, &workload, reference, outcome.checksum),
                    "op={op} width={width}"
                );
            }
        }
    }

    #[test]
    fn test_sum_checksum_is_the_sum() {
        let workload = Workload::from_buffer(vec![1i32, 2, 3, 4, 5], 0);
        let outcome = run_case(&Engine::host(), BenchOp::Sum, &workload, 2).unwrap();
        assert_eq!(outcome.checksum, 15.0);
        let outcome = run_case(&Engine::host(), BenchOp::SumPairs, &workload, 1).unwrap();
        assert_eq!(outcome.checksum, 10.0);
    }

    #[test]
    fn test_elementwise_checksums_must_match_exactly() {
        let workload = Workload::<f64>::generate(10, 1);
        assert!(checksums_agree(BenchOp::Add, &workload, 1.5, 1.5));
        assert!(!checksums_agree(BenchOp::Add, &workload, 1.5, 1.5000001));
    }
}
