use std::{fmt, sync::Arc};

use feistel_core::{Isomorphism, RoundFunction};
use log::debug;

use crate::{
    error::FeistelError,
    range::{check_split, check_total_bits, Bound},
    word::Word,
};

/// Unbalanced Feistel network over `[0, 2^total_bits - 1]`.
///
/// Adapted from "Unbalanced Feistel Networks and Block-Cipher Design" by Bruce Schneier and
/// John Kelsey. The value is split into three segments, from high to low bits:
///
/// ```text
/// [ source_bits | null_bits | target_bits ]
/// ```
///
/// Every round XORs the source segment with the round function of the target segment and
/// rotates the segments so that the target becomes the new top, the null segment stays in the
/// middle untouched and the updated source moves to the bottom. Either half may be empty.
pub struct UnbalancedFeistel<W, R> {
    rounds: u32,
    total_bits: u32,
    source_bits: u32,
    target_bits: u32,
    null_bits: u32,
    null_mask: W,
    source_mask: W,
    target_mask: W,
    bound: Bound<W>,
    reversed: bool,
    round_fn: Arc<R>,
}

impl<W, R> UnbalancedFeistel<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    pub fn new(
        rounds: u32,
        total_bits: u32,
        source_bits: u32,
        target_bits: u32,
        round_fn: R,
    ) -> Result<Self, FeistelError> {
        Self::with_shared(rounds, total_bits, source_bits, target_bits, Arc::new(round_fn))
    }

    /// Same as [`new`](Self::new), sharing a round function with other networks.
    pub fn with_shared(
        rounds: u32,
        total_bits: u32,
        source_bits: u32,
        target_bits: u32,
        round_fn: Arc<R>,
    ) -> Result<Self, FeistelError> {
        check_total_bits::<W>(total_bits)?;
        check_split(total_bits, source_bits, target_bits)?;
        debug!(
            "unbalanced feistel: rounds={}, total_bits={}, source_bits={}, target_bits={}",
            rounds, total_bits, source_bits, target_bits
        );
        Ok(Self::build(rounds, total_bits, source_bits, target_bits, false, round_fn))
    }

    fn build(
        rounds: u32,
        total_bits: u32,
        source_bits: u32,
        target_bits: u32,
        reversed: bool,
        round_fn: Arc<R>,
    ) -> Self {
        let null_bits = total_bits - source_bits - target_bits;
        Self {
            rounds,
            total_bits,
            source_bits,
            target_bits,
            null_bits,
            null_mask: W::low_mask(null_bits),
            source_mask: W::low_mask(source_bits),
            target_mask: W::low_mask(target_bits),
            bound: Bound::bits(total_bits),
            reversed,
            round_fn,
        }
    }

    /// The inverse network: source and target widths trade places and rounds run backwards.
    pub fn reversed(&self) -> Self {
        Self {
            source_bits: self.target_bits,
            target_bits: self.source_bits,
            source_mask: self.target_mask.clone(),
            target_mask: self.source_mask.clone(),
            reversed: !self.reversed,
            ..self.clone()
        }
    }

    fn permute(&self, mut x: W) -> W {
        let (source_bits, target_bits, null_bits) = (self.source_bits, self.target_bits, self.null_bits);
        for i in 0..self.rounds {
            let a = x.shift_right(target_bits + null_bits);
            let n = x.shift_right(target_bits).bit_and(&self.null_mask);
            let b = x.bit_and(&self.target_mask);
            let middle = n.shift_left(source_bits);
            x = if self.reversed {
                let f = self.round_fn.apply(self.rounds - i - 1, &a).bit_and(&self.target_mask);
                b.bit_xor(&f)
                    .shift_left(null_bits + source_bits)
                    .bit_or(&middle)
                    .bit_or(&a)
            } else {
                let f = self.round_fn.apply(i, &b).bit_and(&self.source_mask);
                b.shift_left(null_bits + source_bits)
                    .bit_or(&middle)
                    .bit_or(&a.bit_xor(&f))
            };
        }
        x
    }
}

impl<W, R> UnbalancedFeistel<W, R> {
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    pub fn source_bits(&self) -> u32 {
        self.source_bits
    }

    pub fn target_bits(&self) -> u32 {
        self.target_bits
    }

    pub fn null_bits(&self) -> u32 {
        self.null_bits
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn round_fn(&self) -> &Arc<R> {
        &self.round_fn
    }
}

impl<W, R> Isomorphism<W, W> for UnbalancedFeistel<W, R>
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

impl<W: Clone, R> Clone for UnbalancedFeistel<W, R> {
    fn clone(&self) -> Self {
        Self {
            rounds: self.rounds,
            total_bits: self.total_bits,
            source_bits: self.source_bits,
            target_bits: self.target_bits,
            null_bits: self.null_bits,
            null_mask: self.null_mask.clone(),
            source_mask: self.source_mask.clone(),
            target_mask: self.target_mask.clone(),
            bound: self.bound.clone(),
            reversed: self.reversed,
            round_fn: Arc::clone(&self.round_fn),
        }
    }
}

impl<W, R> PartialEq for UnbalancedFeistel<W, R> {
    fn eq(&self, other: &Self) -> bool {
        self.rounds == other.rounds
            && self.total_bits == other.total_bits
            && self.source_bits == other.source_bits
            && self.target_bits == other.target_bits
            && self.reversed == other.reversed
            && Arc::ptr_eq(&self.round_fn, &other.round_fn)
    }
}

impl<W, R> fmt::Debug for UnbalancedFeistel<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnbalancedFeistel")
            .field("rounds", &self.rounds)
            .field("total_bits", &self.total_bits)
            .field("source_bits", &self.source_bits)
            .field("target_bits", &self.target_bits)
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

impl<W, R> fmt::Display for UnbalancedFeistel<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UnbalancedFeistel{{rounds={}, totalBits={}, sourceBits={}, targetBits={}, reversed={}}}",
            self.rounds, self.total_bits, self.source_bits, self.target_bits, self.reversed
        )
    }
}
