mod isomorphism;
mod round;

pub use isomorphism::{Composed, FnIsomorphism, Identity, Isomorphism};
pub use round::{IdentityRound, RoundFunction};
