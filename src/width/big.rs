use feistel_core::RoundFunction;
use num_bigint::BigUint;

use crate::{
    binary::{BalancedFeistel, UnbalancedFeistel},
    error::FeistelError,
    numeric::{NumericFe1, NumericFe2},
};

pub type BigBalanced<R> = BalancedFeistel<BigUint, R>;
pub type BigUnbalanced<R> = UnbalancedFeistel<BigUint, R>;
pub type BigFe1<R> = NumericFe1<BigUint, R>;
pub type BigFe2<R> = NumericFe2<BigUint, R>;

/// Domain of `total_bits` bits, split into halves with no null segment.
///
/// For an odd `total_bits` the target half gets the extra bit.
pub fn binary<R: RoundFunction<BigUint>>(rounds: u32, total_bits: u32, f: R) -> Result<BigUnbalanced<R>, FeistelError> {
    let source_bits = total_bits / 2;
    UnbalancedFeistel::new(rounds, total_bits, source_bits, total_bits - source_bits, f)
}

pub fn balanced<R: RoundFunction<BigUint>>(rounds: u32, total_bits: u32, f: R) -> Result<BigBalanced<R>, FeistelError> {
    BalancedFeistel::new(rounds, total_bits, f)
}

pub fn unbalanced<R: RoundFunction<BigUint>>(
    rounds: u32,
    total_bits: u32,
    source_bits: u32,
    target_bits: u32,
    f: R,
) -> Result<BigUnbalanced<R>, FeistelError> {
    UnbalancedFeistel::new(rounds, total_bits, source_bits, target_bits, f)
}

pub fn fe1<R: RoundFunction<BigUint>>(rounds: u32, a: BigUint, b: BigUint, f: R) -> Result<BigFe1<R>, FeistelError> {
    NumericFe1::new(rounds, a, b, f)
}

pub fn fe2<R: RoundFunction<BigUint>>(rounds: u32, a: BigUint, b: BigUint, f: R) -> Result<BigFe2<R>, FeistelError> {
    NumericFe2::new(rounds, a, b, f)
}
