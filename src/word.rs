use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Unsigned integer the Feistel constructions compute with.
///
/// Fixed-width words never overflow inside a construction: the binary networks only
/// combine values within masked bit windows, and the numeric ones keep every
/// intermediate value below the domain size.
pub trait Word: Clone + Ord + Zero + One + fmt::Debug + fmt::Display {
    /// Number of bits in this word, `None` for arbitrary precision.
    const WIDTH: Option<u32>;

    /// A word with the lowest `bits` bits set.
    fn low_mask(bits: u32) -> Self;

    /// Shift left, yielding zero once every bit has been shifted out.
    fn shift_left(&self, bits: u32) -> Self;

    /// Shift right, yielding zero once every bit has been shifted out.
    fn shift_right(&self, bits: u32) -> Self;

    fn bit_and(&self, other: &Self) -> Self;

    fn bit_or(&self, other: &Self) -> Self;

    fn bit_xor(&self, other: &Self) -> Self;

    /// Truncating division. `divisor` is non-zero.
    fn quot(&self, divisor: &Self) -> Self;

    /// Remainder of [`quot`](Word::quot). `divisor` is non-zero.
    fn modulo(&self, divisor: &Self) -> Self;

    fn plus(&self, other: &Self) -> Self;

    /// `self - other`, with `other <= self`.
    fn minus(&self, other: &Self) -> Self;

    fn product(&self, other: &Self) -> Self;

    /// Product, or `None` if it does not fit in this word.
    fn checked_product(&self, other: &Self) -> Option<Self>;
}

impl Word for u64 {
    const WIDTH: Option<u32> = Some(u64::BITS);

    fn low_mask(bits: u32) -> Self {
        if bits >= u64::BITS {
            u64::MAX
        } else {
            (1 << bits) - 1
        }
    }

    fn shift_left(&self, bits: u32) -> Self {
        self.checked_shl(bits).unwrap_or(0)
    }

    fn shift_right(&self, bits: u32) -> Self {
        self.checked_shr(bits).unwrap_or(0)
    }

    fn bit_and(&self, other: &Self) -> Self {
        self & other
    }

    fn bit_or(&self, other: &Self) -> Self {
        self | other
    }

    fn bit_xor(&self, other: &Self) -> Self {
        self ^ other
    }

    fn quot(&self, divisor: &Self) -> Self {
        self / divisor
    }

    fn modulo(&self, divisor: &Self) -> Self {
        self % divisor
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn minus(&self, other: &Self) -> Self {
        self - other
    }

    fn product(&self, other: &Self) -> Self {
        self * other
    }

    fn checked_product(&self, other: &Self) -> Option<Self> {
        self.checked_mul(*other)
    }
}

impl Word for BigUint {
    const WIDTH: Option<u32> = None;

    fn low_mask(bits: u32) -> Self {
        (BigUint::one() << bits) - 1u32
    }

    fn shift_left(&self, bits: u32) -> Self {
        self << bits
    }

    fn shift_right(&self, bits: u32) -> Self {
        self >> bits
    }

    fn bit_and(&self, other: &Self) -> Self {
        self & other
    }

    fn bit_or(&self, other: &Self) -> Self {
        self | other
    }

    fn bit_xor(&self, other: &Self) -> Self {
        self ^ other
    }

    fn quot(&self, divisor: &Self) -> Self {
        self / divisor
    }

    fn modulo(&self, divisor: &Self) -> Self {
        self % divisor
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn minus(&self, other: &Self) -> Self {
        self - other
    }

    fn product(&self, other: &Self) -> Self {
        self * other
    }

    fn checked_product(&self, other: &Self) -> Option<Self> {
        Some(self * other)
    }
}

/// `(x + y) mod m` for `x < m`, without leaving the range of `W`.
pub(crate) fn add_mod<W: Word>(x: &W, y: &W, m: &W) -> W {
    let y = y.modulo(m);
    let gap = m.minus(&y);
    if *x >= gap {
        x.minus(&gap)
    } else {
        x.plus(&y)
    }
}

/// Floor modulus `(x - y) mod m` for `x < m`, always non-negative.
pub(crate) fn sub_mod<W: Word>(x: &W, y: &W, m: &W) -> W {
    let y = y.modulo(m);
    if *x >= y {
        x.minus(&y)
    } else {
        m.minus(&y.minus(x))
    }
}
