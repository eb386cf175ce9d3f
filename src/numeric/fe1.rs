use std::{fmt, sync::Arc};

use feistel_core::{Isomorphism, RoundFunction};
use log::debug;

use super::Radix;
use crate::{
    error::FeistelError,
    word::{add_mod, sub_mod, Word},
};

/// Algorithm FE1: every round works modulo `a`.
///
/// A forward round maps `x = l * b + r` to `a * r + (l + F(r)) mod a`.
pub struct NumericFe1<W, R> {
    rounds: u32,
    radix: Radix<W>,
    reversed: bool,
    round_fn: Arc<R>,
}

impl<W, R> NumericFe1<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    pub fn new(rounds: u32, a: W, b: W, round_fn: R) -> Result<Self, FeistelError> {
        Self::with_shared(rounds, a, b, Arc::new(round_fn))
    }

    /// Same as [`new`](Self::new), sharing a round function with other constructions.
    pub fn with_shared(rounds: u32, a: W, b: W, round_fn: Arc<R>) -> Result<Self, FeistelError> {
        debug!("fe1 feistel: rounds={}, a={}, b={}", rounds, a, b);
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

    fn forward(&self, mut x: W) -> W {
        let (a, b) = (self.radix.a(), self.radix.b());
        for i in 0..self.rounds {
            let l = x.quot(b);
            let r = x.modulo(b);
            let w = add_mod(&l, &self.round_fn.apply(i, &r), a);
            x = a.product(&r).plus(&w);
        }
        x
    }

    fn backward(&self, mut y: W) -> W {
        let (a, b) = (self.radix.a(), self.radix.b());
        for i in (0..self.rounds).rev() {
            let w = y.modulo(a);
            let r = y.quot(a);
            let l = sub_mod(&w, &self.round_fn.apply(i, &r), a);
            y = b.product(&l).plus(&r);
        }
        y
    }
}

impl<W, R> NumericFe1<W, R> {
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

impl<W, R> Isomorphism<W, W> for NumericFe1<W, R>
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

impl<W: Clone, R> Clone for NumericFe1<W, R> {
    fn clone(&self) -> Self {
        Self {
            rounds: self.rounds,
            radix: self.radix.clone(),
            reversed: self.reversed,
            round_fn: Arc::clone(&self.round_fn),
        }
    }
}

impl<W: PartialEq, R> PartialEq for NumericFe1<W, R> {
    fn eq(&self, other: &Self) -> bool {
        self.rounds == other.rounds
            && self.radix.a() == other.radix.a()
            && self.radix.b() == other.radix.b()
            && self.reversed == other.reversed
            && Arc::ptr_eq(&self.round_fn, &other.round_fn)
    }
}

impl<W: fmt::Debug, R> fmt::Debug for NumericFe1<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericFe1")
            .field("rounds", &self.rounds)
            .field("a", self.radix.a())
            .field("b", self.radix.b())
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

impl<W: fmt::Display, R> fmt::Display for NumericFe1<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NumericFe1{{rounds={}, a={}, b={}, reversed={}}}",
            self.rounds,
            self.radix.a(),
            self.radix.b(),
            self.reversed
        )
    }
}
