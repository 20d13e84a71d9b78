//! Bounded sliding mean window

use std::collections::VecDeque;

/// A fixed-capacity FIFO of f64 values with an incrementally maintained sum.
///
/// Push is O(1): the oldest value is evicted once the window is full. A
/// capacity below 1 is treated as 1 so the window is always mechanically
/// well-defined.
#[derive(Debug, Clone)]
pub struct MeanWindow {
    buf: VecDeque<f64>,
    cap: usize,
    sum: f64,
}

impl MeanWindow {
    pub fn new(capacity: usize) -> Self {
        let cap = capacity.max(1);
        Self {
            buf: VecDeque::with_capacity(cap),
            cap,
            sum: 0.0,
        }
    }

    /// Push a value, evicting the oldest when full.
    pub fn push(&mut self, x: f64) {
        if self.buf.len() == self.cap {
            if let Some(old) = self.buf.pop_front() {
                self.sum -= old;
            }
        }
        self.buf.push_back(x);
        self.sum += x;
    }

    /// Arithmetic mean of the current contents; 0 when empty.
    pub fn mean(&self) -> f64 {
        if self.buf.is_empty() {
            0.0
        } else {
            self.sum / self.buf.len() as f64
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.sum = 0.0;
    }
}
