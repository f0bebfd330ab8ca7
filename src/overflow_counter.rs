use crate::bit_limits::generate_field_of_ones;

/// Extends a hardware count of `WIDTH` bits (2..=32) to 64 bits
///
/// Every time the count goes backwards an overflow is assumed and added to
/// the upper bits. The count must be sampled at least once per wrap period,
/// otherwise overflows are missed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverflowCounter<const WIDTH: u32 = 32> {
    previous_count: u32,
    overflow_count: u32,
}

impl<const WIDTH: u32> OverflowCounter<WIDTH> {
    const VALID_WIDTH: () = assert!(
        WIDTH > 1 && WIDTH <= 32,
        "count width must be between 2 and 32 bits"
    );

    pub const fn new() -> Self {
        let () = Self::VALID_WIDTH;
        Self {
            previous_count: 0,
            overflow_count: 0,
        }
    }

    /// Feed the latest raw count and get the combined 64-bit count back
    ///
    /// Bits above `WIDTH` in `new_count` are ignored.
    pub fn update(&mut self, new_count: u32) -> u64 {
        let () = Self::VALID_WIDTH;
        let new_count = new_count & generate_field_of_ones(WIDTH) as u32;

        if self.previous_count > new_count {
            self.overflow_count = self.overflow_count.wrapping_add(1);
        }
        self.previous_count = new_count;

        (u64::from(self.overflow_count) << WIDTH) | u64::from(new_count)
    }

    pub fn reset(&mut self) {
        self.previous_count = 0;
        self.overflow_count = 0;
    }
}
