//! Bundles requiring an operator at every lane width of an element type.
//!
//! The engine picks the lane type at runtime, so every operator it runs must
//! provide its lane form for all of `T::Wide`, `T::Mid`, `T::Narrow` and
//! `ScalarLane<T>`. Each bundle is blanket-implemented: an operation's bound
//! reads `AddOp: BinaryKernel<T>`, and fails to compile for element types whose
//! lanes lack the capability.

use crate::{
    numerics::{Element, ScalarLane},
    operators::{
        AggregateOperator, BinaryLane, PairAggregateOperator, TernaryLane, UnaryLane,
    },
};

pub trait UnaryKernel<T: Element>:
    UnaryLane<T, T::Wide> + UnaryLane<T, T::Mid> + UnaryLane<T, T::Narrow> + UnaryLane<T, ScalarLane<T>>
{
}

impl<T: Element, Op> UnaryKernel<T> for Op where
    Op: UnaryLane<T, T::Wide>
        + UnaryLane<T, T::Mid>
        + UnaryLane<T, T::Narrow>
        + UnaryLane<T, ScalarLane<T>>
{
}

pub trait BinaryKernel<T: Element>:
    BinaryLane<T, T::Wide>
    + BinaryLane<T, T::Mid>
    + BinaryLane<T, T::Narrow>
    + BinaryLane<T, ScalarLane<T>>
{
}

impl<T: Element, Op> BinaryKernel<T> for Op where
    Op: BinaryLane<T, T::Wide>
        + BinaryLane<T, T::Mid>
        + BinaryLane<T, T::Narrow>
        + BinaryLane<T, ScalarLane<T>>
{
}

pub trait TernaryKernel<T: Element>:
    TernaryLane<T, T::Wide>
    + TernaryLane<T, T::Mid>
    + TernaryLane<T, T::Narrow>
    + TernaryLane<T, ScalarLane<T>>
{
}

impl<T: Element, Op> TernaryKernel<T> for Op where
    Op: TernaryLane<T, T::Wide>
        + TernaryLane<T, T::Mid>
        + TernaryLane<T, T::Narrow>
        + TernaryLane<T, ScalarLane<T>>
{
}

pub trait AggregateKernel<T: Element>: AggregateOperator<T> + BinaryKernel<T> {}

impl<T: Element, Op> AggregateKernel<T> for Op where Op: AggregateOperator<T> + BinaryKernel<T> {}

pub trait PairAggregateKernel<T: Element>: PairAggregateOperator<T> + BinaryKernel<T> {}

impl<T: Element, Op> PairAggregateKernel<T> for Op where
    Op: PairAggregateOperator<T> + BinaryKernel<T>
{
}
