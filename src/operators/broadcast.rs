use crate::{
    numerics::Lane,
    operators::{BinaryLane, BinaryOperator, UnaryLane, UnaryOperator},
};

/// A binary operator with its right operand fixed to a captured constant.
///
/// `Broadcast { op, value }` maps `x` to `op(x, value)`; in lane form the
/// constant is splatted across every slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Broadcast<Op, T> {
    pub op: Op,
    pub value: T,
}

impl<Op, T> Broadcast<Op, T> {
    pub fn new(op: Op, value: T) -> Self {
        Broadcast { op, value }
    }
}

impl<Op, T> UnaryOperator<T> for Broadcast<Op, T>
where
    Op: BinaryOperator<T>,
    T: Copy,
{
    #[inline(always)]
    fn scalar(&self, value: T) -> T {
        self.op.scalar(value, self.value)
    }
}

impl<Op, T, L> UnaryLane<T, L> for Broadcast<Op, T>
where
    Op: BinaryLane<T, L>,
    T: Copy,
    L: Lane<T>,
{
    #[inline(always)]
    fn lane(&self, value: L) -> L {
        self.op.lane(value, L::splat(self.value))
    }
}

#[cfg(test)]
mod tests {
    use std::simd::Simd;

    use super::*;

    #[derive(Clone, Copy)]
    struct Minus;

    impl BinaryOperator<i32> for Minus {
        fn scalar(&self, left: i32, right: i32) -> i32 {
            left - right
        }
    }

    impl BinaryLane<i32, Simd<i32, 4>> for Minus {
        fn lane(&self, left: Simd<i32, 4>, right: Simd<i32, 4>) -> Simd<i32, 4> {
            left - right
        }
    }

    #[test]
    fn test_broadcast_value_is_right_operand() {
        let op = Broadcast::new(Minus, 10);
        assert_eq!(op.scalar(3), -7);
    }

    #[test]
    fn test_broadcast_lane_matches_scalar() {
        let op = Broadcast::new(Minus, 2);
        let lane = op.lane(Simd::from_array([5, 6, 7, 8]));
        let scalar: Vec<i32> = [5, 6, 7, 8].iter().map(|&x| op.scalar(x)).collect();
        assert_eq!(lane.to_array().to_vec(), scalar);
    }
}
