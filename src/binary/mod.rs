//! Feistel networks over bit domains `[0, 2^total_bits - 1]`.
//!
//! These only shift, mask and XOR within the domain's bit window, so a fixed-width word never
//! overflows regardless of what the round function returns: its output is masked down to the
//! width of the half it is combined with.

mod balanced;
mod unbalanced;

pub use balanced::BalancedFeistel;
pub use unbalanced::UnbalancedFeistel;
