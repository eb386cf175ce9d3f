use std::fmt;

use feistel_core::{Isomorphism, RoundFunction};

use crate::error::FeistelError;

/// A permutation of `u32` values backed by a permutation of `u64` values.
///
/// Built by the [`w32`](crate::width::w32) factories, which keep the wrapped domain within 32 bits.
///
/// Inputs are zero-extended before being handed to the wrapped permutation, outputs are
/// truncated back. The wrapped permutation must keep its outputs within 32 bits; a result
/// that does not fit is reported as [`FeistelError::Narrowing`].
#[derive(Clone, PartialEq)]
pub struct Narrow32<P> {
    inner: P,
}

impl<P> Narrow32<P> {
    pub(crate) fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P> Isomorphism<u32, u32> for Narrow32<P>
where
    P: Isomorphism<u64, u64, Error = FeistelError>,
{
    type Error = FeistelError;
    type Inverse = Narrow32<P::Inverse>;

    fn apply(&self, value: u32) -> Result<u32, FeistelError> {
        let result = self.inner.apply(u64::from(value))?;
        u32::try_from(result).map_err(|_| FeistelError::Narrowing {
            value: result,
            width: u32::BITS,
        })
    }

    fn inverse(&self) -> Self::Inverse {
        Narrow32::new(self.inner.inverse())
    }
}

impl<P: fmt::Debug> fmt::Debug for Narrow32<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Narrow32").field(&self.inner).finish()
    }
}

impl<P: fmt::Display> fmt::Display for Narrow32<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Narrow32({})", self.inner)
    }
}

/// Presents a `u32` round function as a `u64` one, zero-extending its output.
///
/// The values passed to a round function are segments of the domain, so for a
/// 32-bit domain they always fit into `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Widen32<R>(pub(crate) R);

impl<R: RoundFunction<u32>> RoundFunction<u64> for Widen32<R> {
    fn apply(&self, round: u32, value: &u64) -> u64 {
        let value = u32::try_from(*value).expect("round value of a 32-bit domain exceeds 32 bits");
        u64::from(self.0.apply(round, &value))
    }
}
