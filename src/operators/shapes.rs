use crate::numerics::Lane;

/// Scalar form of a one-input operator.
pub trait UnaryOperator<T> {
    fn scalar(&self, value: T) -> T;
}

/// Lane form of a [`UnaryOperator`]. Must agree with the scalar form slot by slot.
pub trait UnaryLane<T, L: Lane<T>>: UnaryOperator<T> {
    fn lane(&self, value: L) -> L;
}

/// Scalar form of a two-input operator.
pub trait BinaryOperator<T> {
    fn scalar(&self, left: T, right: T) -> T;
}

/// Lane form of a [`BinaryOperator`]. Must agree with the scalar form slot by slot.
pub trait BinaryLane<T, L: Lane<T>>: BinaryOperator<T> {
    fn lane(&self, left: L, right: L) -> L;
}

/// Scalar form of a three-input operator, used for fused forms such as
/// multiply-add.
pub trait TernaryOperator<T> {
    fn scalar(&self, a: T, b: T, c: T) -> T;
}

/// Lane form of a [`TernaryOperator`]. Must agree with the scalar form slot by slot.
pub trait TernaryLane<T, L: Lane<T>>: TernaryOperator<T> {
    fn lane(&self, a: L, b: L, c: L) -> L;
}

/// A reducing operator: a binary operator with an identity seed.
///
/// The aggregation engine keeps two running values, a scalar fed by the tail
/// of the buffer and a lane register fed by full lanes. Once the register has
/// been reduced horizontally, [`select`](AggregateOperator::select) merges the
/// two into the result.
pub trait AggregateOperator<T>: BinaryOperator<T> {
    /// Identity element of the operator. Also fills every slot of the register.
    fn seed(&self) -> T;

    fn select(&self, partial: T, reduced: T) -> T {
        self.scalar(partial, reduced)
    }
}

/// A reducing operator over interleaved two-component records.
///
/// Each component is accumulated separately, so seeds and results are pairs.
pub trait PairAggregateOperator<T>: BinaryOperator<T> {
    fn seed(&self) -> (T, T);

    fn select(&self, partial: (T, T), reduced: (T, T)) -> (T, T) {
        (
            self.scalar(partial.0, reduced.0),
            self.scalar(partial.1, reduced.1),
        )
    }
}
