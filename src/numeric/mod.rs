//! Feistel constructions over radix domains `[0, a * b - 1]`.
//!
//! Algorithms FE1 and FE2 from "Format-Preserving Encryption" by Mihir Bellare, Thomas
//! Ristenpart, Phillip Rogaway and Till Stegers. Both are kept: they produce different
//! permutations for the same parameters.

mod fe1;
mod fe2;

pub use fe1::NumericFe1;
pub use fe2::NumericFe2;

use crate::{error::FeistelError, range::Bound, word::Word};

/// The `a × b` shape of a radix domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Radix<W> {
    a: W,
    b: W,
    bound: Bound<W>,
}

impl<W: Word> Radix<W> {
    pub(crate) fn new(a: W, b: W) -> Result<Self, FeistelError> {
        let bound = Bound::product(&a, &b)?;
        Ok(Self { a, b, bound })
    }

    pub(crate) fn check(&self, value: &W) -> Result<(), FeistelError> {
        self.bound.check(value)
    }
}

impl<W> Radix<W> {
    pub(crate) fn a(&self) -> &W {
        &self.a
    }

    pub(crate) fn b(&self) -> &W {
        &self.b
    }
}
