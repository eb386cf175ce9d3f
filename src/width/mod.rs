//! Factory functions per integer width.
//!
//! - [`w64`]: `u64` words, domains of up to 64 bits or `a * b <= u64::MAX`.
//! - [`w32`]: `u32` values, every construction delegating to its `u64` counterpart through
//!   [`Narrow32`](crate::Narrow32).
//! - [`big`]: arbitrary precision [`BigUint`](num_bigint::BigUint) words, unbounded domains.

pub mod big;
pub mod w32;
pub mod w64;
