use num_traits::ToPrimitive;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::numerics::Element;

/// Element types the harness can generate inputs for.
pub trait Sample: Element + ToPrimitive {
    /// Relative rounding error of one arithmetic step, 0 for exact types.
    const EPSILON: f64;

    fn sample<R: Rng>(rng: &mut R, len: usize) -> Vec<Self>;

    /// Operand used by the broadcast-value benchmarks.
    fn broadcast_value() -> Self;
}

macro_rules! impl_float_sample {
    ($($elem:ty),*) => {
        $(
            impl Sample for $elem {
                const EPSILON: f64 = <$elem>::EPSILON as f64;

                fn sample<R: Rng>(rng: &mut R, len: usize) -> Vec<Self> {
                    rng.sample_iter(StandardNormal).take(len).collect()
                }

                fn broadcast_value() -> Self {
                    0.5
                }
            }
        )*
    };
}

// Integers stay small so a sum over millions of elements does not overflow.
macro_rules! impl_int_sample {
    ($($elem:ty),*) => {
        $(
            impl Sample for $elem {
                const EPSILON: f64 = 0.0;

                fn sample<R: Rng>(rng: &mut R, len: usize) -> Vec<Self> {
                    (0..len).map(|_| rng.random_range(-100..100)).collect()
                }

                fn broadcast_value() -> Self {
                    3
                }
            }
        )*
    };
}

impl_float_sample!(f32, f64);
impl_int_sample!(i32, i64);

/// Three equally long operand buffers and a broadcast value.
#[derive(Debug, Clone, PartialEq)]
pub struct Workload<T> {
    pub a: Vec<T>,
    pub b: Vec<T>,
    pub c: Vec<T>,
    pub value: T,
}

impl<T: Sample> Workload<T> {
    /// Random operands of length `len`. Deterministic for a given `seed`.
    pub fn generate(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = T::sample(&mut rng, len);
        Self::with_rng(a, &mut rng)
    }

    /// Uses `a` as first operand (e.g. loaded from disk) and fills the others
    /// randomly to the same length.
    pub fn from_buffer(a: Vec<T>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(a, &mut rng)
    }

    fn with_rng<R: Rng>(a: Vec<T>, rng: &mut R) -> Self {
        let b = T::sample(rng, a.len());
        let c = T::sample(rng, a.len());
        Workload {
            a,
            b,
            c,
            value: T::broadcast_value(),
        }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Sum of absolute values of the first operand, the scale of the rounding
    /// error a reordered sum over it may show.
    pub fn magnitude(&self) -> f64 {
        self.a
            .iter()
            .filter_map(|x| x.to_f64())
            .map(f64::abs)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let w1 = Workload::<f32>::generate(100, 42);
        let w2 = Workload::<f32>::generate(100, 42);
        assert_eq!(w1, w2);
        let w3 = Workload::<f32>::generate(100, 43);
        assert_ne!(w1.a, w3.a);
    }

    #[test]
    fn test_operands_have_equal_lengths() {
        let workload = Workload::<i64>::generate(37, 7);
        assert_eq!(workload.len(), 37);
        assert_eq!(workload.b.len(), 37);
        assert_eq!(workload.c.len(), 37);
        assert!(!workload.is_empty());
        assert!(Workload::<f64>::generate(0, 7).is_empty());
    }

    #[test]
    fn test_integer_samples_stay_in_range() {
        let workload = Workload::<i32>::generate(1000, 1);
        assert!(workload.a.iter().all(|x| (-100..100).contains(x)));
    }

    #[test]
    fn test_from_buffer_keeps_first_operand() {
        let workload = Workload::from_buffer(vec![1.0f64, -2.0, 3.0], 5);
        assert_eq!(workload.a, vec![1.0, -2.0, 3.0]);
        assert_eq!(workload.c.len(), 3);
        assert_eq!(workload.magnitude(), 6.0);
    }
}
