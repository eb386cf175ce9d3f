/// Function called once per round of a Feistel network.
///
/// For a network with `n` rounds the round index runs over `0, 1, ..., n - 1` when
/// applied forward and in the opposite order when applied in reverse.
///
/// The network is only invertible if this is a pure function: no side effects, and
/// the same `(round, value)` must always produce the same output. This is not
/// checked; an impure function yields a wrong inverse, never a panic.
pub trait RoundFunction<W> {
    /// Apply this round function to the current round value.
    fn apply(&self, round: u32, value: &W) -> W;
}

impl<W, F> RoundFunction<W> for F
where
    F: Fn(u32, &W) -> W,
{
    fn apply(&self, round: u32, value: &W) -> W {
        self(round, value)
    }
}

/// Round function that returns its input unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IdentityRound;

impl<W: Clone> RoundFunction<W> for IdentityRound {
    fn apply(&self, _round: u32, value: &W) -> W {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentityRound, RoundFunction};

    #[test]
    fn closures_are_round_functions() {
        let f = |round: u32, value: &u64| value + u64::from(round);
        assert_eq!(RoundFunction::apply(&f, 3, &10), 13);
    }

    #[test]
    fn identity_round_returns_input() {
        assert_eq!(IdentityRound.apply(7, &42u64), 42);
        assert_eq!(IdentityRound.apply(0, &String::from("x")), "x");
    }
}
