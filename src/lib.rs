//! Invertible pseudorandom permutations (Feistel networks) over arbitrary finite domains.
//!
//! Basic usage:
//!
//! ```
//! use feistel::{width::w64, Isomorphism};
//!
//! // 1) Pick a construction and a round function
//! let feistel = w64::fe2(7, 320, 200, |round: u32, value: &u64| value.wrapping_mul(11) ^ u64::from(round)).unwrap();
//! // 2) Permute values of the domain [0, 320 * 200 - 1]
//! let y = feistel.apply(12345).unwrap();
//! assert!(y < 64_000);
//! // 3) Undo it
//! assert_eq!(feistel.inverse().apply(y).unwrap(), 12345);
//! ```
//!
//! Bit domains `[0, 2^n - 1]` are covered by [`BalancedFeistel`] and [`UnbalancedFeistel`],
//! radix domains `[0, a * b - 1]` by [`NumericFe1`] and [`NumericFe2`]. All of them are generic
//! over the [`Word`] they compute with (`u64` or [`BigUint`](num_bigint::BigUint)); `u32`
//! permutations are narrowed from `u64` ones, see [`width::w32`].
//!
//! Permutations are immutable. [`Isomorphism::inverse`] returns a new value sharing the round
//! function, and permutations compose through [`Isomorphism::and_then`] and
//! [`Isomorphism::compose`]:
//!
//! ```
//! use feistel::{width::w64, Isomorphism};
//!
//! let f = w64::balanced(4, 16, |_round: u32, value: &u64| value.wrapping_mul(31)).unwrap();
//! let g = w64::unbalanced(3, 16, 5, 9, |_round: u32, value: &u64| value ^ 0x55).unwrap();
//! let both = f.and_then::<u64, _>(g);
//! let y = both.apply(777).unwrap();
//! assert_eq!(both.inverse().apply(y).unwrap(), 777);
//! ```

pub mod binary;
pub mod numeric;
pub mod range;
pub mod width;

mod construction;
mod error;
mod narrow;
mod word;

pub use feistel_core::{Composed, FnIsomorphism, Identity, IdentityRound, Isomorphism, RoundFunction};

pub use binary::{BalancedFeistel, UnbalancedFeistel};
pub use construction::{Construction, Feistel, FeistelParams};
pub use error::FeistelError;
pub use narrow::Narrow32;
pub use numeric::{NumericFe1, NumericFe2};
pub use word::Word;
