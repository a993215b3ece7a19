use crate::{
    engine::Engine,
    error::LaneError,
    numerics::{Element, Lane, MAX_LANE_WIDTH},
    operators::{
        AggregateKernel, AggregateOperator, BinaryLane, BinaryOperator, PairAggregateKernel,
        PairAggregateOperator,
    },
};

impl Engine {
    /// Reduces `source` to one value with `op`.
    ///
    /// Full lanes are folded into a lane register, the tail into a scalar
    /// accumulator. The register is then reduced horizontally and merged with
    /// the scalar by [`AggregateOperator::select`]. An empty buffer yields the
    /// operator's seed.
    ///
    /// For floating-point operators the grouping of the reduction depends on the
    /// lane width, so results may differ in the last bits between widths.
    ///
    /// The lane form and the scalar form keep their own arithmetic semantics.
    /// For integer sums the lane phase wraps like `Simd` does, while the tail,
    /// the horizontal reduction and the final `select` use the scalar operator,
    /// which panics on overflow when overflow checks are enabled.
    pub fn aggregate<T, Op>(&self, op: &Op, source: &[T]) -> T
    where
        T: Element,
        Op: AggregateKernel<T>,
    {
        tracing::trace!(shape = "aggregate", width = %self.width, len = source.len());
        dispatch_lanes!(self.width, T, aggregate_pass(op, source))
    }

    /// Reduces an interleaved buffer `[x0, y0, x1, y1, ...]` to `(Σx, Σy)`
    /// (for the operator's own notion of `Σ`). The two components are never
    /// combined with each other, whatever the lane width.
    ///
    /// # Errors
    ///
    /// [`LaneError::UnpairedLength`] if `source` has an odd length.
    pub fn aggregate_pairs<T, Op>(&self, op: &Op, source: &[T]) -> Result<(T, T), LaneError>
    where
        T: Element,
        Op: PairAggregateKernel<T>,
    {
        if !source.len().is_multiple_of(2) {
            tracing::warn!(len = source.len(), "interleaved pair buffer has odd length");
            return Err(LaneError::UnpairedLength { len: source.len() });
        }
        tracing::trace!(shape = "aggregate_pairs", width = %self.width, len = source.len());
        Ok(dispatch_lanes!(
            self.width,
            T,
            aggregate_pairs_pass(op, source)
        ))
    }
}

#[inline]
fn aggregate_pass<T, L, Op>(op: &Op, source: &[T]) -> T
where
    T: Element,
    L: Lane<T>,
    Op: AggregateOperator<T> + BinaryLane<T, L>,
{
    let seed = op.seed();
    let mut register = L::splat(seed);
    let mut partial = seed;

    let mut chunks = source.chunks_exact(L::WIDTH);
    for chunk in &mut chunks {
        register = op.lane(register, L::load(chunk));
    }
    for &x in chunks.remainder() {
        partial = op.scalar(partial, x);
    }

    op.select(partial, horizontal(op, register, seed))
}

#[inline]
fn aggregate_pairs_pass<T, L, Op>(op: &Op, source: &[T]) -> (T, T)
where
    T: Element,
    L: Lane<T>,
    Op: PairAggregateOperator<T> + BinaryLane<T, L>,
{
    let seed = op.seed();
    let mut pattern = [seed.0; MAX_LANE_WIDTH];
    for slot in pattern.iter_mut().skip(1).step_by(2) {
        *slot = seed.1;
    }
    let mut register = L::load(&pattern[..L::WIDTH]);
    let mut partial = seed;

    // Lanes start at multiples of WIDTH. With an even width, slot parity equals
    // the component index of every element in the lane. An odd width (only 1)
    // would mix the components in a slot, so everything goes through the tail.
    let tail = if L::WIDTH.is_multiple_of(2) {
        let mut chunks = source.chunks_exact(L::WIDTH);
        for chunk in &mut chunks {
            register = op.lane(register, L::load(chunk));
        }
        chunks.remainder()
    } else {
        source
    };
    for pair in tail.chunks_exact(2) {
        partial.0 = op.scalar(partial.0, pair[0]);
        partial.1 = op.scalar(partial.1, pair[1]);
    }

    op.select(partial, horizontal_pairs(op, register, seed))
}

/// Combines every slot of `register` into one value, pairwise: adjacent slots
/// are merged level by level like a balanced tree.
pub(crate) fn horizontal<T, L, Op>(op: &Op, register: L, fill: T) -> T
where
    T: Copy,
    L: Lane<T>,
    Op: BinaryOperator<T> + ?Sized,
{
    const { assert!(L::WIDTH >= 1 && L::WIDTH <= MAX_LANE_WIDTH) };

    let mut slots = [fill; MAX_LANE_WIDTH];
    register.spill(&mut slots[..L::WIDTH]);

    let mut live = L::WIDTH;
    while live > 1 {
        let half = live / 2;
        for i in 0..half {
            slots[i] = op.scalar(slots[2 * i], slots[2 * i + 1]);
        }
        if live % 2 == 1 {
            slots[half] = slots[live - 1];
            live = half + 1;
        } else {
            live = half;
        }
    }
    slots[0]
}

/// Combines the slots of `register` with stride 2: even slots into the first
/// component, odd slots into the second. A width-1 register only carries the
/// first component; the second is then `seed.1`.
pub(crate) fn horizontal_pairs<T, L, Op>(op: &Op, register: L, seed: (T, T)) -> (T, T)
where
    T: Copy,
    L: Lane<T>,
    Op: BinaryOperator<T> + ?Sized,
{
    const { assert!(L::WIDTH >= 1 && L::WIDTH <= MAX_LANE_WIDTH) };

    let mut slots = [seed.0; MAX_LANE_WIDTH];
    register.spill(&mut slots[..L::WIDTH]);
    let slots = &slots[..L::WIDTH];

    let first = slots
        .iter()
        .step_by(2)
        .skip(1)
        .fold(slots[0], |acc, &x| op.scalar(acc, x));
    let second = match slots.get(1) {
        Some(&start) => slots
            .iter()
            .skip(3)
            .step_by(2)
            .fold(start, |acc, &x| op.scalar(acc, x)),
        None => seed.1,
    };
    (first, second)
}

#[cfg(test)]
mod tests {
    use std::ops::Add;
    use std::simd::Simd;

    use super::*;
    use crate::numerics::{LaneWidth, ScalarLane};

    #[derive(Clone, Copy)]
    struct Total;

    impl<T: Add<Output = T>> BinaryOperator<T> for Total {
        fn scalar(&self, left: T, right: T) -> T {
            left + right
        }
    }

    impl<T: Add<Output = T>, L: Lane<T> + Add<Output = L>> BinaryLane<T, L> for Total {
        fn lane(&self, left: L, right: L) -> L {
            left + right
        }
    }

    impl AggregateOperator<i64> for Total {
        fn seed(&self) -> i64 {
            0
        }
    }

    impl PairAggregateOperator<i64> for Total {
        fn seed(&self) -> (i64, i64) {
            (0, 0)
        }
    }

    /// Not associative, so the grouping of a reduction shows in its result.
    #[derive(Clone, Copy)]
    struct Minus;

    impl BinaryOperator<i64> for Minus {
        fn scalar(&self, left: i64, right: i64) -> i64 {
            left - right
        }
    }

    fn lengths(width: LaneWidth) -> Vec<usize> {
        let w = width.lanes::<i64>();
        vec![0, 1, w - 1, w, w + 1, 2 * w, 41 * w + 1]
    }

    #[test]
    fn test_aggregate_matches_sequential_sum() {
        for width in LaneWidth::ALL {
            let engine = Engine::with_width(width);
            for len in lengths(width) {
                let source: Vec<i64> = (0..len as i64).map(|x| x * x - 3).collect();
                assert_eq!(
                    engine.aggregate(&Total, &source),
                    source.iter().sum::<i64>(),
                    "width={width} len={len}"
                );
            }
        }
    }

    #[test]
    fn test_aggregate_of_empty_is_seed() {
        for width in LaneWidth::ALL {
            assert_eq!(Engine::with_width(width).aggregate(&Total, &[] as &[i64]), 0);
        }
    }

    #[test]
    fn test_aggregate_pairs_keeps_components_apart() {
        for width in LaneWidth::ALL {
            let engine = Engine::with_width(width);
            for pairs in lengths(width) {
                let source: Vec<i64> = (0..2 * pairs as i64).map(|x| x * 7 + 1).collect();
                let even: i64 = source.iter().step_by(2).sum();
                let odd: i64 = source.iter().skip(1).step_by(2).sum();
                assert_eq!(
                    engine.aggregate_pairs(&Total, &source),
                    Ok((even, odd)),
                    "width={width} pairs={pairs}"
                );
            }
        }
    }

    #[test]
    fn test_aggregate_pairs_rejects_odd_length() {
        let engine = Engine::host();
        assert_eq!(
            engine.aggregate_pairs(&Total, &[1i64, 2, 3]),
            Err(LaneError::UnpairedLength { len: 3 })
        );
    }

    #[test]
    fn test_horizontal_is_pairwise_tree() {
        // (8 - 4) - (2 - 1) = 3, where a left fold would give 1
        let register = Simd::<i64, 4>::from_array([8, 4, 2, 1]);
        assert_eq!(horizontal(&Minus, register, 0), 3);
    }

    #[test]
    fn test_horizontal_handles_odd_width() {
        #[derive(Clone, Copy)]
        struct Three([i64; 3]);
        impl Lane<i64> for Three {
            const WIDTH: usize = 3;
            fn splat(value: i64) -> Self {
                Three([value; 3])
            }
            fn load(slice: &[i64]) -> Self {
                Three([slice[0], slice[1], slice[2]])
            }
            fn store(self, slice: &mut [i64]) {
                slice.copy_from_slice(&self.0)
            }
            fn spill(self, slots: &mut [i64]) {
                slots.copy_from_slice(&self.0)
            }
        }
        assert_eq!(horizontal(&Total, Three([1, 2, 4]), 0), 7);
    }

    #[test]
    fn test_horizontal_pairs_strides_by_two() {
        let register = Simd::<i64, 8>::from_array([1, 10, 2, 20, 3, 30, 4, 40]);
        assert_eq!(horizontal_pairs(&Total, register, (0, 0)), (10, 100));

        let register = Simd::<i64, 2>::from_array([5, 6]);
        assert_eq!(horizontal_pairs(&Total, register, (0, 0)), (5, 6));

        assert_eq!(horizontal_pairs(&Total, ScalarLane(9i64), (0, -1)), (9, -1));
    }
}
