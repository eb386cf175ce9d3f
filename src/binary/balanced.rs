use std::{fmt, sync::Arc};

use feistel_core::{Isomorphism, RoundFunction};
use log::debug;

use crate::{
    error::FeistelError,
    range::{check_total_bits, Bound},
    word::Word,
};

/// Classic Feistel network over `[0, 2^total_bits - 1]`, split into two halves of equal width.
pub struct BalancedFeistel<W, R> {
    rounds: u32,
    total_bits: u32,
    half_bits: u32,
    half_mask: W,
    bound: Bound<W>,
    reversed: bool,
    round_fn: Arc<R>,
}

impl<W, R> BalancedFeistel<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    pub fn new(rounds: u32, total_bits: u32, round_fn: R) -> Result<Self, FeistelError> {
        Self::with_shared(rounds, total_bits, Arc::new(round_fn))
    }

    /// Same as [`new`](Self::new), sharing a round function with other networks.
    pub fn with_shared(rounds: u32, total_bits: u32, round_fn: Arc<R>) -> Result<Self, FeistelError> {
        check_total_bits::<W>(total_bits)?;
        if total_bits % 2 != 0 {
            return Err(FeistelError::OddTotalBits { total_bits });
        }
        let half_bits = total_bits / 2;
        debug!("balanced feistel: rounds={}, total_bits={}", rounds, total_bits);
        Ok(Self {
            rounds,
            total_bits,
            half_bits,
            half_mask: W::low_mask(half_bits),
            bound: Bound::bits(total_bits),
            reversed: false,
            round_fn,
        })
    }

    /// The inverse network: each round undone, round indices visited in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self.clone()
        }
    }

    fn permute(&self, value: W) -> W {
        let mut a = value.shift_right(self.half_bits);
        let mut b = value.bit_and(&self.half_mask);
        for i in 0..self.rounds {
            (a, b) = if self.reversed {
                let f = self.round_fn.apply(self.rounds - i - 1, &a).bit_and(&self.half_mask);
                (b.bit_xor(&f), a)
            } else {
                let f = self.round_fn.apply(i, &b).bit_and(&self.half_mask);
                (b, a.bit_xor(&f))
            };
        }
        a.shift_left(self.half_bits).bit_or(&b)
    }
}

impl<W, R> BalancedFeistel<W, R> {
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn round_fn(&self) -> &Arc<R> {
        &self.round_fn
    }
}

impl<W, R> Isomorphism<W, W> for BalancedFeistel<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    type Error = FeistelError;
    type Inverse = Self;

    fn apply(&self, value: W) -> Result<W, FeistelError> {
        self.bound.check(&value)?;
        Ok(self.permute(value))
    }

    fn inverse(&self) -> Self {
        self.reversed()
    }
}

impl<W: Clone, R> Clone for BalancedFeistel<W, R> {
    fn clone(&self) -> Self {
        Self {
            rounds: self.rounds,
            total_bits: self.total_bits,
            half_bits: self.half_bits,
            half_mask: self.half_mask.clone(),
            bound: self.bound.clone(),
            reversed: self.reversed,
            round_fn: Arc::clone(&self.round_fn),
        }
    }
}

impl<W, R> PartialEq for BalancedFeistel<W, R> {
    fn eq(&self, other: &Self) -> bool {
        self.rounds == other.rounds
            && self.total_bits == other.total_bits
            && self.reversed == other.reversed
            && Arc::ptr_eq(&self.round_fn, &other.round_fn)
    }
}

impl<W, R> fmt::Debug for BalancedFeistel<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BalancedFeistel")
            .field("rounds", &self.rounds)
            .field("total_bits", &self.total_bits)
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

impl<W, R> fmt::Display for BalancedFeistel<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BalancedFeistel{{rounds={}, totalBits={}, reversed={}}}",
            self.rounds, self.total_bits, self.reversed
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use feistel_core::{IdentityRound, Isomorphism};
    use num_bigint::BigUint;

    use super::BalancedFeistel;
    use crate::FeistelError;

    fn times_11(_round: u32, value: &u64) -> u64 {
        value.wrapping_mul(11)
    }

    #[test]
    fn is_permutation_16() {
        let feistel = BalancedFeistel::new(3, 16, times_11).unwrap();
        let outputs: HashSet<u64> = (0..1 << 16).map(|x| feistel.apply(x).unwrap()).collect();
        assert_eq!(outputs.len(), 1 << 16);
        assert!(outputs.iter().all(|y| *y < 1 << 16), "output escaped the domain");
    }

    #[test]
    fn can_be_reversed_16() {
        let forward = BalancedFeistel::new(3, 16, times_11).unwrap();
        let backward = forward.reversed();
        for x in 0..1 << 16 {
            let y = forward.apply(x).unwrap();
            assert_eq!(backward.apply(y).unwrap(), x, "roundtrip failed for {}", x);
            assert_eq!(forward.apply(backward.apply(x).unwrap()).unwrap(), x);
        }
    }

    #[test]
    fn zero_rounds_is_identity() {
        let feistel = BalancedFeistel::new(0, 64, times_11).unwrap();
        for x in [0, 1, 0xdead_beef, u64::MAX] {
            assert_eq!(feistel.apply(x), Ok(x));
        }
    }

    #[test]
    fn zero_rounds_keeps_halves_in_place() {
        let feistel = BalancedFeistel::<u64, _>::new(0, 16, IdentityRound).unwrap();
        assert_eq!(feistel.apply(0x1234), Ok(0x1234));
        assert_eq!(feistel.apply(0x0001), Ok(0x0001));
        assert_eq!(feistel.reversed().apply(0x1234), Ok(0x1234));
    }

    #[test]
    fn single_round_feeds_low_half() {
        let forward = BalancedFeistel::new(1, 16, |_round: u32, value: &u64| value.wrapping_mul(11) ^ 0x5a).unwrap();
        // a = 0x12, b = 0x34 becomes (0x34, 0x12 ^ ((0x34 * 11) ^ 0x5a) & 0xff)
        let expected = (0x34 << 8) | (0x12 ^ (((0x34 * 11) ^ 0x5a) & 0xff));
        assert_eq!(forward.apply(0x1234), Ok(expected));
        let backward = forward.reversed();
        for x in 0..1 << 16 {
            assert_eq!(backward.apply(forward.apply(x).unwrap()), Ok(x));
        }
    }

    #[test]
    fn zero_bits_domain_has_single_element() {
        let feistel = BalancedFeistel::new(5, 0, times_11).unwrap();
        assert_eq!(feistel.apply(0), Ok(0));
        assert!(feistel.apply(1).is_err());
    }

    #[test]
    fn full_width_roundtrip() {
        let forward = BalancedFeistel::new(5, 64, |round: u32, value: &u64| value.wrapping_mul(31) ^ u64::from(round)).unwrap();
        let backward = forward.reversed();
        let mut x = 0u64;
        for _ in 0..10_000 {
            assert_eq!(backward.apply(forward.apply(x).unwrap()).unwrap(), x);
            x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            BalancedFeistel::<u64, _>::new(3, 15, IdentityRound).unwrap_err(),
            FeistelError::OddTotalBits { total_bits: 15 }
        );
        assert_eq!(
            BalancedFeistel::<u64, _>::new(3, 66, IdentityRound).unwrap_err(),
            FeistelError::TotalBitsExceedsWidth {
                total_bits: 66,
                width: 64
            }
        );
        assert!(BalancedFeistel::<BigUint, _>::new(3, 66, IdentityRound).is_ok());
    }

    #[test]
    fn rejects_out_of_range_input() {
        let feistel = BalancedFeistel::new(3, 16, times_11).unwrap();
        assert!(matches!(feistel.apply(1 << 16), Err(FeistelError::OutOfRange { .. })));
        assert!(matches!(feistel.reversed().apply(u64::MAX), Err(FeistelError::OutOfRange { .. })));
    }

    #[test]
    fn reversed_twice_equals_original() {
        let feistel = BalancedFeistel::new(3, 16, times_11).unwrap();
        assert_ne!(feistel, feistel.reversed());
        assert_eq!(feistel, feistel.reversed().reversed());
        assert_eq!(
            feistel.reversed().to_string(),
            "BalancedFeistel{rounds=3, totalBits=16, reversed=true}"
        );
    }

    #[test]
    fn round_indices_are_visited_in_order() {
        use std::sync::Mutex;

        let seen = Mutex::new(Vec::new());
        let recording = |round: u32, value: &u64| {
            seen.lock().unwrap().push(round);
            *value
        };
        let feistel = BalancedFeistel::new(4, 8, recording).unwrap();
        feistel.apply(7).unwrap();
        feistel.reversed().apply(7).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 3, 2, 1, 0]);
    }

    #[test]
    fn big_matches_fixed_width() {
        let fixed = BalancedFeistel::new(4, 20, times_11).unwrap();
        let big = BalancedFeistel::new(4, 20, |_round: u32, value: &BigUint| value * 11u32).unwrap();
        for x in (0u64..1 << 20).step_by(97) {
            assert_eq!(BigUint::from(fixed.apply(x).unwrap()), big.apply(BigUint::from(x)).unwrap());
        }
    }
}
