//! Limits of integers with arbitrary bit widths

/// Mask with the lowest `width` bits set
///
/// Widths of 64 or more produce a mask of all ones.
pub const fn generate_field_of_ones(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Like the `MIN`/`MAX` constants of the primitive integers, but for an
/// integer of `WIDTH` bits (1..=64)
pub struct BitLimits<const WIDTH: u32>;

impl<const WIDTH: u32> BitLimits<WIDTH> {
    const VALID_WIDTH: () = assert!(
        WIDTH > 0 && WIDTH <= 64,
        "bit width must be between 1 and 64"
    );

    /// Largest unsigned value that fits in `WIDTH` bits
    pub const fn unsigned_max() -> u64 {
        let () = Self::VALID_WIDTH;
        generate_field_of_ones(WIDTH)
    }

    /// Unsigned integers always bottom out at zero
    pub const fn unsigned_min() -> u64 {
        let () = Self::VALID_WIDTH;
        0
    }

    /// Largest two's complement value that fits in `WIDTH` bits
    pub const fn signed_max() -> i64 {
        let () = Self::VALID_WIDTH;
        (generate_field_of_ones(WIDTH) >> 1) as i64
    }

    /// Smallest two's complement value that fits in `WIDTH` bits
    pub const fn signed_min() -> i64 {
        let () = Self::VALID_WIDTH;
        -Self::signed_max() - 1
    }
}
