use feistel_core::RoundFunction;

use crate::{
    binary::{BalancedFeistel, UnbalancedFeistel},
    error::FeistelError,
    numeric::{NumericFe1, NumericFe2},
};

pub type Balanced64<R> = BalancedFeistel<u64, R>;
pub type Unbalanced64<R> = UnbalancedFeistel<u64, R>;
pub type Fe1_64<R> = NumericFe1<u64, R>;
pub type Fe2_64<R> = NumericFe2<u64, R>;

/// Full 64-bit domain, split into two 32-bit halves.
pub fn binary<R: RoundFunction<u64>>(rounds: u32, f: R) -> Result<Unbalanced64<R>, FeistelError> {
    UnbalancedFeistel::new(rounds, 64, 32, 32, f)
}

/// Full 64-bit domain, with a custom split.
pub fn binary_split<R: RoundFunction<u64>>(
    rounds: u32,
    source_bits: u32,
    target_bits: u32,
    f: R,
) -> Result<Unbalanced64<R>, FeistelError> {
    UnbalancedFeistel::new(rounds, 64, source_bits, target_bits, f)
}

pub fn balanced<R: RoundFunction<u64>>(rounds: u32, total_bits: u32, f: R) -> Result<Balanced64<R>, FeistelError> {
    BalancedFeistel::new(rounds, total_bits, f)
}

pub fn unbalanced<R: RoundFunction<u64>>(
    rounds: u32,
    total_bits: u32,
    source_bits: u32,
    target_bits: u32,
    f: R,
) -> Result<Unbalanced64<R>, FeistelError> {
    UnbalancedFeistel::new(rounds, total_bits, source_bits, target_bits, f)
}

pub fn fe1<R: RoundFunction<u64>>(rounds: u32, a: u64, b: u64, f: R) -> Result<Fe1_64<R>, FeistelError> {
    NumericFe1::new(rounds, a, b, f)
}

pub fn fe2<R: RoundFunction<u64>>(rounds: u32, a: u64, b: u64, f: R) -> Result<Fe2_64<R>, FeistelError> {
    NumericFe2::new(rounds, a, b, f)
}
