use std::time::Duration;

/// Accumulated timings of repeated engine calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    calls: usize,
    elements: usize,
    elapsed: Duration,
}

impl Timings {
    pub fn new() -> Self {
        Timings {
            calls: 0,
            elements: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Record one call that processed `elements` elements in `elapsed`.
    pub fn bump_call(&mut self, elements: usize, elapsed: Duration) {
        self.calls += 1;
        self.elements += elements;
        self.elapsed += elapsed;
    }

    pub fn merge(&self, other: &Timings) -> Timings {
        Timings {
            calls: self.calls + other.calls,
            elements: self.elements + other.elements,
            elapsed: self.elapsed + other.elapsed,
        }
    }

    pub fn get_calls(&self) -> usize {
        self.calls
    }

    pub fn get_elements(&self) -> usize {
        self.elements
    }

    pub fn get_elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Mean wall time of one call, 0 when nothing was recorded.
    pub fn nanos_per_call(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.elapsed.as_nanos() as f64 / self.calls as f64
        }
    }

    /// 0 when no time was recorded.
    pub fn elements_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.elements as f64 / secs
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Timings::new()
    }
}
