use feistel_core::RoundFunction;

use crate::{
    binary::{BalancedFeistel, UnbalancedFeistel},
    error::FeistelError,
    narrow::{Narrow32, Widen32},
    numeric::{NumericFe1, NumericFe2},
};

pub type Balanced32<R> = Narrow32<BalancedFeistel<u64, Widen32<R>>>;
pub type Unbalanced32<R> = Narrow32<UnbalancedFeistel<u64, Widen32<R>>>;
pub type Fe1_32<R> = Narrow32<NumericFe1<u64, Widen32<R>>>;
pub type Fe2_32<R> = Narrow32<NumericFe2<u64, Widen32<R>>>;

fn check_total_bits(total_bits: u32) -> Result<(), FeistelError> {
    if total_bits > u32::BITS {
        return Err(FeistelError::TotalBitsExceedsWidth {
            total_bits,
            width: u32::BITS,
        });
    }
    Ok(())
}

fn check_product(a: u32, b: u32) -> Result<(), FeistelError> {
    match a.checked_mul(b) {
        Some(_) => Ok(()),
        None => Err(FeistelError::DomainOverflow {
            a: a.to_string(),
            b: b.to_string(),
            width: u32::BITS,
        }),
    }
}

/// Full 32-bit domain, split into two 16-bit halves.
pub fn binary<R: RoundFunction<u32>>(rounds: u32, f: R) -> Result<Unbalanced32<R>, FeistelError> {
    unbalanced(rounds, 32, 16, 16, f)
}

/// Full 32-bit domain, with a custom split.
pub fn binary_split<R: RoundFunction<u32>>(
    rounds: u32,
    source_bits: u32,
    target_bits: u32,
    f: R,
) -> Result<Unbalanced32<R>, FeistelError> {
    unbalanced(rounds, 32, source_bits, target_bits, f)
}

pub fn balanced<R: RoundFunction<u32>>(rounds: u32, total_bits: u32, f: R) -> Result<Balanced32<R>, FeistelError> {
    check_total_bits(total_bits)?;
    Ok(Narrow32::new(BalancedFeistel::new(rounds, total_bits, Widen32(f))?))
}

pub fn unbalanced<R: RoundFunction<u32>>(
    rounds: u32,
    total_bits: u32,
    source_bits: u32,
    target_bits: u32,
    f: R,
) -> Result<Unbalanced32<R>, FeistelError> {
    check_total_bits(total_bits)?;
    Ok(Narrow32::new(UnbalancedFeistel::new(
        rounds,
        total_bits,
        source_bits,
        target_bits,
        Widen32(f),
    )?))
}

pub fn fe1<R: RoundFunction<u32>>(rounds: u32, a: u32, b: u32, f: R) -> Result<Fe1_32<R>, FeistelError> {
    check_product(a, b)?;
    Ok(Narrow32::new(NumericFe1::new(rounds, u64::from(a), u64::from(b), Widen32(f))?))
}

pub fn fe2<R: RoundFunction<u32>>(rounds: u32, a: u32, b: u32, f: R) -> Result<Fe2_32<R>, FeistelError> {
    check_product(a, b)?;
    Ok(Narrow32::new(NumericFe2::new(rounds, u64::from(a), u64::from(b), Widen32(f))?))
}
