use std::{fmt, sync::Arc};

use feistel_core::{Isomorphism, RoundFunction};
use log::debug;

use super::Radix;
use crate::{
    error::FeistelError,
    word::{add_mod, sub_mod, Word},
};

/// Algorithm FE2: the modulus alternates between `a` (even rounds) and `b` (odd rounds).
///
/// The result is packed with the modulus of the last round, so the inverse has to start
/// from `a` for an odd number of rounds and from `b` for an even one.
pub struct NumericFe2<W, R> {
    rounds: u32,
    radix: Radix<W>,
    reversed: bool,
    round_fn: Arc<R>,
}

impl<W, R> NumericFe2<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    pub fn new(rounds: u32, a: W, b: W, round_fn: R) -> Result<Self, FeistelError> {
        Self::with_shared(rounds, a, b, Arc::new(round_fn))
    }

    /// Same as [`new`](Self::new), sharing a round function with other constructions.
    pub fn with_shared(rounds: u32, a: W, b: W, round_fn: Arc<R>) -> Result<Self, FeistelError> {
        debug!("fe2 feistel: rounds={}, a={}, b={}", rounds, a, b);
        Ok(Self {
            rounds,
            radix: Radix::new(a, b)?,
            reversed: false,
            round_fn,
        })
    }

    pub fn reversed(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self.clone()
        }
    }

    fn modulus(&self, round: u32) -> &W {
        if round % 2 == 0 {
            self.radix.a()
        } else {
            self.radix.b()
        }
    }

    fn forward(&self, x: W) -> W {
        let b = self.radix.b();
        let mut l = x.quot(b);
        let mut r = x.modulo(b);
        let mut s = b;
        for i in 0..self.rounds {
            s = self.modulus(i);
            let next = add_mod(&l, &self.round_fn.apply(i, &r), s);
            l = r;
            r = next;
        }
        s.product(&l).plus(&r)
    }

    fn backward(&self, y: W) -> W {
        let s = if self.rounds % 2 != 0 {
            self.radix.a()
        } else {
            self.radix.b()
        };
        let mut r = y.modulo(s);
        let mut l = y.quot(s);
        for i in (0..self.rounds).rev() {
            let prev = sub_mod(&r, &self.round_fn.apply(i, &l), self.modulus(i));
            r = l;
            l = prev;
        }
        self.radix.b().product(&l).plus(&r)
    }
}

impl<W, R> NumericFe2<W, R> {
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn a(&self) -> &W {
        self.radix.a()
    }

    pub fn b(&self) -> &W {
        self.radix.b()
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn round_fn(&self) -> &Arc<R> {
        &self.round_fn
    }
}

impl<W, R> Isomorphism<W, W> for NumericFe2<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    type Error = FeistelError;
    type Inverse = Self;

    fn apply(&self, value: W) -> Result<W, FeistelError> {
        self.radix.check(&value)?;
        if self.reversed {
            Ok(self.backward(value))
        } else {
            Ok(self.forward(value))
        }
    }

    fn inverse(&self) -> Self {
        self.reversed()
    }
}

impl<W: Clone, R> Clone for NumericFe2<W, R> {
    fn clone(&self) -> Self {
        Self {
            rounds: self.rounds,
            radix: self.radix.clone(),
            reversed: self.reversed,
            round_fn: Arc::clone(&self.round_fn),
        }
    }
}

impl<W: PartialEq, R> PartialEq for NumericFe2<W, R> {
    fn eq(&self, other: &Self) -> bool {
        self.rounds == other.rounds
            && self.radix.a() == other.radix.a()
            && self.radix.b() == other.radix.b()
            && self.reversed == other.reversed
            && Arc::ptr_eq(&self.round_fn, &other.round_fn)
    }
}

impl<W: fmt::Debug, R> fmt::Debug for NumericFe2<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericFe2")
            .field("rounds", &self.rounds)
            .field("a", self.radix.a())
            .field("b", self.radix.b())
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

impl<W: fmt::Display, R> fmt::Display for NumericFe2<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NumericFe2{{rounds={}, a={}, b={}, reversed={}}}",
            self.rounds,
            self.radix.a(),
            self.radix.b(),
            self.reversed
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use feistel_core::{IdentityRound, Isomorphism};
    use num_bigint::BigUint;

    use super::NumericFe2;
    use crate::numeric::NumericFe1;

    fn times_11(_round: u32, value: &u64) -> u64 {
        value.wrapping_mul(11)
    }

    fn assert_bijective<R>(feistel: &NumericFe2<u64, R>)
    where
        R: feistel_core::RoundFunction<u64>,
    {
        let count = feistel.a() * feistel.b();
        let inverse = feistel.reversed();
        let mut outputs = HashSet::new();
        for x in 0..count {
            let y = feistel.apply(x).unwrap();
            assert!(y < count, "{} escaped the domain of {}", y, feistel);
            assert!(outputs.insert(y), "duplicate output {} for {}", y, feistel);
            assert_eq!(inverse.apply(y).unwrap(), x, "roundtrip failed for {}", feistel);
            assert_eq!(feistel.apply(inverse.apply(x).unwrap()).unwrap(), x);
        }
    }

    #[test]
    fn identity_round_320_by_200() {
        assert_bijective(&NumericFe2::new(7, 320, 200, IdentityRound).unwrap());
    }

    #[test]
    fn odd_and_even_round_counts_with_unequal_moduli() {
        // the inverse must start from `a` after an odd number of rounds and from `b` after an even one
        for rounds in 0..=8 {
            assert_bijective(&NumericFe2::new(rounds, 7, 13, times_11).unwrap());
            assert_bijective(&NumericFe2::new(rounds, 13, 7, times_11).unwrap());
            assert_bijective(&NumericFe2::new(rounds, 1, 10, times_11).unwrap());
            assert_bijective(&NumericFe2::new(rounds, 10, 1, times_11).unwrap());
        }
    }

    #[test]
    fn small_domains_are_bijective() {
        for (rounds, a, b) in [(0, 0, 0), (1, 0, 1), (1, 1, 1), (11, 1, 1), (7, 0, 200), (7, 320, 0), (12, 99, 99)] {
            assert_bijective(&NumericFe2::new(rounds, a, b, times_11).unwrap());
        }
    }

    #[test]
    fn zero_rounds_is_identity() {
        let feistel = NumericFe2::new(0, 320u64, 200, times_11).unwrap();
        for x in 0..64_000 {
            assert_eq!(feistel.apply(x), Ok(x));
            assert_eq!(feistel.reversed().apply(x), Ok(x));
        }
    }

    #[test]
    fn single_round_packs_with_modulus_a() {
        // x = l * b + r  ->  a * r + (l + F(r)) mod a
        let feistel = NumericFe2::new(1, 5u64, 3, IdentityRound).unwrap();
        let x = 3 * 3 + 2;
        assert_eq!(feistel.apply(x), Ok(5 * 2 + (3 + 2) % 5));
    }

    #[test]
    fn differs_from_fe1() {
        let fe1 = NumericFe1::new(3, 320u64, 200, times_11).unwrap();
        let fe2 = NumericFe2::new(3, 320u64, 200, times_11).unwrap();
        let differing = (0..64_000).filter(|x| fe1.apply(*x) != fe2.apply(*x)).count();
        assert!(differing > 0, "FE1 and FE2 produced identical permutations");
    }

    #[test]
    fn big_matches_fixed_width() {
        let fixed = NumericFe2::new(7, 320u64, 200, times_11).unwrap();
        let big = NumericFe2::new(
            7,
            BigUint::from(320u32),
            BigUint::from(200u32),
            |_round: u32, value: &BigUint| value * 11u32,
        )
        .unwrap();
        for x in (0..64_000u64).step_by(7) {
            let expected = BigUint::from(fixed.apply(x).unwrap());
            assert_eq!(big.apply(BigUint::from(x)).unwrap(), expected);
            assert_eq!(big.reversed().apply(expected).unwrap(), BigUint::from(x));
        }
    }
}
