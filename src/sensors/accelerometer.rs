//! Accelerometer hardware abstraction
//!
//! Covers devices and peripherals that can measure acceleration along three
//! axes.

pub mod mock;

use serde::{Deserialize, Serialize};

use crate::percent::Percent;

pub use mock::MockAccelerometer;

/// Acceleration in millionths of standard gravity (1 g = 1_000_000)
pub type Microgravity = i64;

/// One standard gravity
pub const ONE_G: Microgravity = 1_000_000;

/// Acceleration on each axis as a percentage of the full scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axis {
    pub x: Percent,
    pub y: Percent,
    pub z: Percent,
}

/// One accelerometer reading
///
/// Axes are kept as [`Percent`] of `full_scale` because converting an N-bit
/// register to a percentage is cheap; conversion to physical units can wait
/// until the data is actually consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sample {
    /// Maximum acceleration the device could report for this sample (e.g. 2 g).
    /// Carried per sample since some drivers change range on the fly.
    pub full_scale: Microgravity,
    pub axis: Axis,
}

impl Sample {
    /// Acceleration on x, y and z in microgravity
    pub fn acceleration(&self) -> [Microgravity; 3] {
        [
            self.axis.x.scale(self.full_scale),
            self.axis.y.scale(self.full_scale),
            self.axis.z.scale(self.full_scale),
        ]
    }
}

pub trait Accelerometer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the current acceleration
    fn read(&mut self) -> Result<Sample, Self::Error>;
}

impl<T: Accelerometer + ?Sized> Accelerometer for &mut T {
    type Error = T::Error;

    fn read(&mut self) -> Result<Sample, Self::Error> {
        (**self).read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AccelerometerError;

    const EXPECTED_SAMPLE: Sample = Sample {
        full_scale: 1_000_000_000,
        axis: Axis {
            x: Percent::from_ratio(1, 2),
            y: Percent::from_ratio(1, 3),
            z: Percent::from_ratio(1, 4),
        },
    };

    struct FixedAccelerometer;

    impl Accelerometer for FixedAccelerometer {
        type Error = AccelerometerError;

        fn read(&mut self) -> Result<Sample, Self::Error> {
            Ok(EXPECTED_SAMPLE)
        }
    }

    #[test]
    fn test_read_returns_driver_sample() {
        let mut accel = FixedAccelerometer;
        assert_eq!(accel.read().unwrap(), EXPECTED_SAMPLE);
    }

    #[test]
    fn test_acceleration_in_microgravity() {
        let sample = Sample {
            full_scale: 2 * ONE_G,
            axis: Axis {
                x: Percent::from_ratio(1, 2),
                y: Percent::from_ratio(-1, 4),
                z: Percent::MAX,
            },
        };
        assert_eq!(sample.acceleration(), [ONE_G, -ONE_G / 2, 2 * ONE_G]);
    }
}
