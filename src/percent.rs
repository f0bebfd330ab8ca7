//! Fixed-point percentage

use serde::{Deserialize, Serialize};

/// A ratio in the range -100 %..=100 %, stored as a scaled `i32`
///
/// `i32::MAX` represents 100 % and `-i32::MAX` represents -100 %. Integer
/// sensor readings convert to this without touching floating point, so
/// drivers can collect samples cheaply and convert them later.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Percent(i32);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i32::MAX);
    pub const MIN: Self = Self(-i32::MAX);

    /// Build a percentage from `numerator / denominator`, clamped to ±100 %
    ///
    /// A zero denominator saturates towards the sign of the numerator; 0/0 is
    /// zero.
    pub const fn from_ratio(numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return if numerator > 0 {
                Self::MAX
            } else if numerator < 0 {
                Self::MIN
            } else {
                Self::ZERO
            };
        }
        let scaled = (numerator as i128 * i32::MAX as i128) / denominator as i128;
        if scaled > i32::MAX as i128 {
            Self::MAX
        } else if scaled < -(i32::MAX as i128) {
            Self::MIN
        } else {
            Self(scaled as i32)
        }
    }

    /// Raw scaled representation
    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn from_raw(raw: i32) -> Self {
        if raw < -i32::MAX {
            Self::MIN
        } else {
            Self(raw)
        }
    }

    /// Apply this percentage to `value`, rounding half away from zero
    pub const fn scale(self, value: i64) -> i64 {
        let product = value as i128 * self.0 as i128;
        let full = i32::MAX as i128;
        let rounded = if product >= 0 {
            (product + full / 2) / full
        } else {
            (product - full / 2) / full
        };
        rounded as i64
    }

    /// Ratio as a float in -1.0..=1.0
    pub fn to_f32(self) -> f32 {
        (self.0 as f64 / i32::MAX as f64) as f32
    }
}
