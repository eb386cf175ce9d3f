use std::{fmt, sync::Arc};

use feistel_core::{IdentityRound, Isomorphism, RoundFunction};

use crate::{
    binary::{BalancedFeistel, UnbalancedFeistel},
    error::FeistelError,
    numeric::{NumericFe1, NumericFe2},
    word::Word,
};

/// Which Feistel construction to build, together with its domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Construction<W> {
    /// Equal halves over `[0, 2^total_bits - 1]`, `total_bits` even.
    Balanced { total_bits: u32 },
    /// Unequal halves over `[0, 2^total_bits - 1]`, with an untouched middle segment
    /// of `total_bits - source_bits - target_bits` bits.
    Unbalanced {
        total_bits: u32,
        source_bits: u32,
        target_bits: u32,
    },
    /// FE1 over `[0, a * b - 1]`.
    Fe1 { a: W, b: W },
    /// FE2 over `[0, a * b - 1]`.
    Fe2 { a: W, b: W },
}

/// Parameters of a Feistel permutation, validated by [`build`](FeistelParams::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeistelParams<W> {
    pub rounds: u32,
    pub construction: Construction<W>,
}

impl<W: Word> FeistelParams<W> {
    pub fn new(rounds: u32, construction: Construction<W>) -> Self {
        Self { rounds, construction }
    }

    pub fn build<R: RoundFunction<W>>(self, round_fn: R) -> Result<Feistel<W, R>, FeistelError> {
        self.build_shared(Arc::new(round_fn))
    }

    pub fn build_shared<R: RoundFunction<W>>(self, round_fn: Arc<R>) -> Result<Feistel<W, R>, FeistelError> {
        let rounds = self.rounds;
        Ok(match self.construction {
            Construction::Balanced { total_bits } => {
                Feistel::Balanced(BalancedFeistel::with_shared(rounds, total_bits, round_fn)?)
            }
            Construction::Unbalanced {
                total_bits,
                source_bits,
                target_bits,
            } => Feistel::Unbalanced(UnbalancedFeistel::with_shared(
                rounds,
                total_bits,
                source_bits,
                target_bits,
                round_fn,
            )?),
            Construction::Fe1 { a, b } => Feistel::Fe1(NumericFe1::with_shared(rounds, a, b, round_fn)?),
            Construction::Fe2 { a, b } => Feistel::Fe2(NumericFe2::with_shared(rounds, a, b, round_fn)?),
        })
    }
}

/// Any of the Feistel constructions, selected at runtime.
pub enum Feistel<W, R> {
    Balanced(BalancedFeistel<W, R>),
    Unbalanced(UnbalancedFeistel<W, R>),
    Fe1(NumericFe1<W, R>),
    Fe2(NumericFe2<W, R>),
}

impl<W: Word> Feistel<W, IdentityRound> {
    /// The zero-round permutation over the domain of `construction`.
    pub fn identity(construction: Construction<W>) -> Result<Self, FeistelError> {
        FeistelParams::new(0, construction).build(IdentityRound)
    }
}

impl<W, R> Feistel<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    pub fn reversed(&self) -> Self {
        match self {
            Feistel::Balanced(f) => Feistel::Balanced(f.reversed()),
            Feistel::Unbalanced(f) => Feistel::Unbalanced(f.reversed()),
            Feistel::Fe1(f) => Feistel::Fe1(f.reversed()),
            Feistel::Fe2(f) => Feistel::Fe2(f.reversed()),
        }
    }

    pub fn rounds(&self) -> u32 {
        match self {
            Feistel::Balanced(f) => f.rounds(),
            Feistel::Unbalanced(f) => f.rounds(),
            Feistel::Fe1(f) => f.rounds(),
            Feistel::Fe2(f) => f.rounds(),
        }
    }

    pub fn is_reversed(&self) -> bool {
        match self {
            Feistel::Balanced(f) => f.is_reversed(),
            Feistel::Unbalanced(f) => f.is_reversed(),
            Feistel::Fe1(f) => f.is_reversed(),
            Feistel::Fe2(f) => f.is_reversed(),
        }
    }
}

impl<W, R> Isomorphism<W, W> for Feistel<W, R>
where
    W: Word,
    R: RoundFunction<W>,
{
    type Error = FeistelError;
    type Inverse = Self;

    fn apply(&self, value: W) -> Result<W, FeistelError> {
        match self {
            Feistel::Balanced(f) => f.apply(value),
            Feistel::Unbalanced(f) => f.apply(value),
            Feistel::Fe1(f) => f.apply(value),
            Feistel::Fe2(f) => f.apply(value),
        }
    }

    fn inverse(&self) -> Self {
        self.reversed()
    }
}

impl<W: Clone, R> Clone for Feistel<W, R> {
    fn clone(&self) -> Self {
        match self {
            Feistel::Balanced(f) => Feistel::Balanced(f.clone()),
            Feistel::Unbalanced(f) => Feistel::Unbalanced(f.clone()),
            Feistel::Fe1(f) => Feistel::Fe1(f.clone()),
            Feistel::Fe2(f) => Feistel::Fe2(f.clone()),
        }
    }
}

impl<W: PartialEq, R> PartialEq for Feistel<W, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Feistel::Balanced(x), Feistel::Balanced(y)) => x == y,
            (Feistel::Unbalanced(x), Feistel::Unbalanced(y)) => x == y,
            (Feistel::Fe1(x), Feistel::Fe1(y)) => x == y,
            (Feistel::Fe2(x), Feistel::Fe2(y)) => x == y,
            _ => false,
        }
    }
}

impl<W: fmt::Debug, R> fmt::Debug for Feistel<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feistel::Balanced(inner) => fmt::Debug::fmt(inner, f),
            Feistel::Unbalanced(inner) => fmt::Debug::fmt(inner, f),
            Feistel::Fe1(inner) => fmt::Debug::fmt(inner, f),
            Feistel::Fe2(inner) => fmt::Debug::fmt(inner, f),
        }
    }
}

impl<W: fmt::Display, R> fmt::Display for Feistel<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feistel::Balanced(inner) => fmt::Display::fmt(inner, f),
            Feistel::Unbalanced(inner) => fmt::Display::fmt(inner, f),
            Feistel::Fe1(inner) => fmt::Display::fmt(inner, f),
            Feistel::Fe2(inner) => fmt::Display::fmt(inner, f),
        }
    }
}
