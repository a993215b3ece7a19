use crate::{
    engine::Engine,
    error::{LaneError, ensure_len},
    numerics::{Element, Lane},
    operators::{
        BinaryKernel, BinaryLane, Broadcast, TernaryKernel, TernaryLane, UnaryKernel, UnaryLane,
    },
};

impl Engine {
    /// `destination[i] = op(source[i])`.
    ///
    /// # Errors
    ///
    /// [`LaneError::LengthMismatch`] if `destination` is not as long as `source`.
    pub fn unary<T, Op>(&self, op: &Op, source: &[T], destination: &mut [T]) -> Result<(), LaneError>
    where
        T: Element,
        Op: UnaryKernel<T>,
    {
        ensure_len("destination", source.len(), destination.len())?;
        tracing::trace!(shape = "unary", width = %self.width, len = source.len());
        dispatch_lanes!(self.width, T, unary_pass(op, source, destination));
        Ok(())
    }

    /// `buffer[i] = op(buffer[i])`.
    pub fn unary_in_place<T, Op>(&self, op: &Op, buffer: &mut [T])
    where
        T: Element,
        Op: UnaryKernel<T>,
    {
        tracing::trace!(shape = "unary_in_place", width = %self.width, len = buffer.len());
        dispatch_lanes!(self.width, T, unary_in_place_pass(op, buffer));
    }

    /// `destination[i] = op(source[i], value)`: the binary operator with its
    /// right operand broadcast from `value`.
    ///
    /// # Errors
    ///
    /// [`LaneError::LengthMismatch`] if `destination` is not as long as `source`.
    pub fn broadcast<T, Op>(
        &self,
        op: &Op,
        source: &[T],
        value: T,
        destination: &mut [T],
    ) -> Result<(), LaneError>
    where
        T: Element,
        Op: BinaryKernel<T> + Copy,
    {
        self.unary(&Broadcast::new(*op, value), source, destination)
    }

    /// `buffer[i] = op(buffer[i], value)`.
    pub fn broadcast_in_place<T, Op>(&self, op: &Op, buffer: &mut [T], value: T)
    where
        T: Element,
        Op: BinaryKernel<T> + Copy,
    {
        self.unary_in_place(&Broadcast::new(*op, value), buffer)
    }

    /// `destination[i] = op(left[i], right[i])`.
    ///
    /// # Errors
    ///
    /// [`LaneError::LengthMismatch`] if `right` or `destination` is not as long as `left`.
    pub fn binary<T, Op>(
        &self,
        op: &Op,
        left: &[T],
        right: &[T],
        destination: &mut [T],
    ) -> Result<(), LaneError>
    where
        T: Element,
        Op: BinaryKernel<T>,
    {
        ensure_len("right", left.len(), right.len())?;
        ensure_len("destination", left.len(), destination.len())?;
        tracing::trace!(shape = "binary", width = %self.width, len = left.len());
        dispatch_lanes!(self.width, T, binary_pass(op, left, right, destination));
        Ok(())
    }

    /// `left[i] = op(left[i], right[i])`.
    ///
    /// # Errors
    ///
    /// [`LaneError::LengthMismatch`] if `right` is not as long as `left`.
    pub fn binary_in_place<T, Op>(&self, op: &Op, left: &mut [T], right: &[T]) -> Result<(), LaneError>
    where
        T: Element,
        Op: BinaryKernel<T>,
    {
        ensure_len("right", left.len(), right.len())?;
        tracing::trace!(shape = "binary_in_place", width = %self.width, len = left.len());
        dispatch_lanes!(self.width, T, binary_in_place_pass(op, left, right));
        Ok(())
    }

    /// `destination[i] = op(a[i], b[i], c[i])`.
    ///
    /// # Errors
    ///
    /// [`LaneError::LengthMismatch`] if `b`, `c` or `destination` is not as long as `a`.
    pub fn ternary<T, Op>(
        &self,
        op: &Op,
        a: &[T],
        b: &[T],
        c: &[T],
        destination: &mut [T],
    ) -> Result<(), LaneError>
    where
        T: Element,
        Op: TernaryKernel<T>,
    {
        ensure_len("b", a.len(), b.len())?;
        ensure_len("c", a.len(), c.len())?;
        ensure_len("destination", a.len(), destination.len())?;
        tracing::trace!(shape = "ternary", width = %self.width, len = a.len());
        dispatch_lanes!(self.width, T, ternary_pass(op, a, b, c, destination));
        Ok(())
    }

    /// `a[i] = op(a[i], b[i], c[i])`.
    ///
    /// # Errors
    ///
    /// [`LaneError::LengthMismatch`] if `b` or `c` is not as long as `a`.
    pub fn ternary_in_place<T, Op>(&self, op: &Op, a: &mut [T], b: &[T], c: &[T]) -> Result<(), LaneError>
    where
        T: Element,
        Op: TernaryKernel<T>,
    {
        ensure_len("b", a.len(), b.len())?;
        ensure_len("c", a.len(), c.len())?;
        tracing::trace!(shape = "ternary_in_place", width = %self.width, len = a.len());
        dispatch_lanes!(self.width, T, ternary_in_place_pass(op, a, b, c));
        Ok(())
    }
}

// The passes below assume lengths were validated by the caller. `zip` stops at
// the shortest iterator, so a violation would skip elements, never read out of
// bounds.

#[inline]
fn unary_pass<T, L, Op>(op: &Op, source: &[T], destination: &mut [T])
where
    T: Element,
    L: Lane<T>,
    Op: UnaryLane<T, L>,
{
    let mut dst = destination.chunks_exact_mut(L::WIDTH);
    let mut src = source.chunks_exact(L::WIDTH);
    for (d, s) in (&mut dst).zip(&mut src) {
        op.lane(L::load(s)).store(d);
    }
    for (d, &s) in dst.into_remainder().iter_mut().zip(src.remainder()) {
        *d = op.scalar(s);
    }
}

#[inline]
fn unary_in_place_pass<T, L, Op>(op: &Op, buffer: &mut [T])
where
    T: Element,
    L: Lane<T>,
    Op: UnaryLane<T, L>,
{
    let mut chunks = buffer.chunks_exact_mut(L::WIDTH);
    for chunk in &mut chunks {
        let lane = L::load(chunk);
        op.lane(lane).store(chunk);
    }
    for x in chunks.into_remainder() {
        *x = op.scalar(*x);
    }
}

#[inline]
fn binary_pass<T, L, Op>(op: &Op, left: &[T], right: &[T], destination: &mut [T])
where
    T: Element,
    L: Lane<T>,
    Op: BinaryLane<T, L>,
{
    let mut dst = destination.chunks_exact_mut(L::WIDTH);
    let mut lhs = left.chunks_exact(L::WIDTH);
    let mut rhs = right.chunks_exact(L::WIDTH);
    for ((d, l), r) in (&mut dst).zip(&mut lhs).zip(&mut rhs) {
        op.lane(L::load(l), L::load(r)).store(d);
    }
    for ((d, &l), &r) in dst
        .into_remainder()
        .iter_mut()
        .zip(lhs.remainder())
        .zip(rhs.remainder())
    {
        *d = op.scalar(l, r);
    }
}

#[inline]
fn binary_in_place_pass<T, L, Op>(op: &Op, left: &mut [T], right: &[T])
where
    T: Element,
    L: Lane<T>,
    Op: BinaryLane<T, L>,
{
    let mut lhs = left.chunks_exact_mut(L::WIDTH);
    let mut rhs = right.chunks_exact(L::WIDTH);
    for (l, r) in (&mut lhs).zip(&mut rhs) {
        let lane = L::load(l);
        op.lane(lane, L::load(r)).store(l);
    }
    for (l, &r) in lhs.into_remainder().iter_mut().zip(rhs.remainder()) {
        *l = op.scalar(*l, r);
    }
}

#[inline]
fn ternary_pass<T, L, Op>(op: &Op, a: &[T], b: &[T], c: &[T], destination: &mut [T])
where
    T: Element,
    L: Lane<T>,
    Op: TernaryLane<T, L>,
{
    let mut dst = destination.chunks_exact_mut(L::WIDTH);
    let mut xs = a.chunks_exact(L::WIDTH);
    let mut ys = b.chunks_exact(L::WIDTH);
    let mut zs = c.chunks_exact(L::WIDTH);
    for (((d, x), y), z) in (&mut dst).zip(&mut xs).zip(&mut ys).zip(&mut zs) {
        op.lane(L::load(x), L::load(y), L::load(z)).store(d);
    }
    for (((d, &x), &y), &z) in dst
        .into_remainder()
        .iter_mut()
        .zip(xs.remainder())
        .zip(ys.remainder())
        .zip(zs.remainder())
    {
        *d = op.scalar(x, y, z);
    }
}

#[inline]
fn ternary_in_place_pass<T, L, Op>(op: &Op, a: &mut [T], b: &[T], c: &[T])
where
    T: Element,
    L: Lane<T>,
    Op: TernaryLane<T, L>,
{
    let mut xs = a.chunks_exact_mut(L::WIDTH);
    let mut ys = b.chunks_exact(L::WIDTH);
    let mut zs = c.chunks_exact(L::WIDTH);
    for ((x, y), z) in (&mut xs).zip(&mut ys).zip(&mut zs) {
        let lane = L::load(x);
        op.lane(lane, L::load(y), L::load(z)).store(x);
    }
    for ((x, &y), &z) in xs
        .into_remainder()
        .iter_mut()
        .zip(ys.remainder())
        .zip(zs.remainder())
    {
        *x = op.scalar(*x, y, z);
    }
}
