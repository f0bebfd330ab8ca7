use std::collections::VecDeque;

use super::{Accelerometer, Sample};
use crate::errors::AccelerometerError;

/// Accelerometer that plays back queued samples, for tests and simulations
#[derive(Debug, Default, Clone)]
pub struct MockAccelerometer {
    samples: VecDeque<Sample>,
}

impl MockAccelerometer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue of samples returned by `read`
    pub fn set(&mut self, samples: impl IntoIterator<Item = Sample>) {
        self.samples = samples.into_iter().collect();
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl Accelerometer for MockAccelerometer {
    type Error = AccelerometerError;

    fn read(&mut self) -> Result<Sample, Self::Error> {
        self.samples
            .pop_front()
            .ok_or(AccelerometerError::SamplesExhausted)
    }
}
