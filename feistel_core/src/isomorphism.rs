use std::{fmt, marker::PhantomData};

/// A function paired with its inverse.
///
/// For every `x` accepted by [`apply`](Isomorphism::apply):
///
/// ```text
/// f.inverse().apply(f.apply(x)?)? == x
/// ```
pub trait Isomorphism<A, B> {
    /// Error reported when a value is outside of this function's domain.
    type Error;

    /// Type of the inverse function. Its own inverse maps `A` to `B` again.
    type Inverse: Isomorphism<B, A, Error = Self::Error>;

    /// Apply this function to `value`.
    fn apply(&self, value: A) -> Result<B, Self::Error>;

    /// Get the inverse function.
    fn inverse(&self) -> Self::Inverse;

    /// Compose a function that first applies `before` to its input, then applies `self` to the result.
    fn compose<A0, I>(self, before: I) -> Composed<I, Self, A>
    where
        Self: Sized,
        I: Isomorphism<A0, A, Error = Self::Error>,
    {
        Composed::new(before, self)
    }

    /// Compose a function that first applies `self` to its input, then applies `after` to the result.
    fn and_then<C, I>(self, after: I) -> Composed<Self, I, B>
    where
        Self: Sized,
        I: Isomorphism<B, C, Error = Self::Error>,
    {
        Composed::new(self, after)
    }
}

/// `second ∘ first`, with `B` being the type passed between them.
pub struct Composed<F, G, B> {
    first: F,
    second: G,
    _mid: PhantomData<fn(B) -> B>,
}

impl<F, G, B> Composed<F, G, B> {
    pub fn new(first: F, second: G) -> Self {
        Self {
            first,
            second,
            _mid: PhantomData,
        }
    }

    pub fn first(&self) -> &F {
        &self.first
    }

    pub fn second(&self) -> &G {
        &self.second
    }
}

impl<A, B, C, F, G> Isomorphism<A, C> for Composed<F, G, B>
where
    F: Isomorphism<A, B>,
    G: Isomorphism<B, C, Error = F::Error>,
{
    type Error = F::Error;
    type Inverse = Composed<G::Inverse, F::Inverse, B>;

    fn apply(&self, value: A) -> Result<C, Self::Error> {
        let mid = self.first.apply(value)?;
        self.second.apply(mid)
    }

    fn inverse(&self) -> Self::Inverse {
        Composed::new(self.second.inverse(), self.first.inverse())
    }
}

impl<F: Clone, G: Clone, B> Clone for Composed<F, G, B> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<F: fmt::Debug, G: fmt::Debug, B> fmt::Debug for Composed<F, G, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<F: fmt::Display, G: fmt::Display, B> fmt::Display for Composed<F, G, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} then {})", self.first, self.second)
    }
}

/// Isomorphism built from a pair of functions: `forward` is applied, `backward` is the inverse.
#[derive(Clone)]
pub struct FnIsomorphism<F, G> {
    forward: F,
    backward: G,
}

impl<F, G> FnIsomorphism<F, G> {
    pub fn of(forward: F, backward: G) -> Self {
        Self { forward, backward }
    }
}

impl<A, B, E, F, G> Isomorphism<A, B> for FnIsomorphism<F, G>
where
    F: Fn(A) -> Result<B, E> + Clone,
    G: Fn(B) -> Result<A, E> + Clone,
{
    type Error = E;
    type Inverse = FnIsomorphism<G, F>;

    fn apply(&self, value: A) -> Result<B, E> {
        (self.forward)(value)
    }

    fn inverse(&self) -> Self::Inverse {
        FnIsomorphism::of(self.backward.clone(), self.forward.clone())
    }
}

impl<F, G> fmt::Debug for FnIsomorphism<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnIsomorphism")
    }
}

/// Isomorphism that returns its input unchanged and never fails.
pub struct Identity<E> {
    _error: PhantomData<fn() -> E>,
}

impl<E> Identity<E> {
    pub fn new() -> Self {
        Self { _error: PhantomData }
    }
}

impl<E> Default for Identity<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Identity<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Identity<E> {}

impl<E> fmt::Debug for Identity<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<A, E> Isomorphism<A, A> for Identity<E> {
    type Error = E;
    type Inverse = Self;

    fn apply(&self, value: A) -> Result<A, E> {
        Ok(value)
    }

    fn inverse(&self) -> Self::Inverse {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::{FnIsomorphism, Identity, Isomorphism};

    fn add(n: i64) -> impl Isomorphism<i64, i64, Error = ()> + Clone {
        FnIsomorphism::of(move |x: i64| Ok::<_, ()>(x + n), move |y: i64| Ok::<_, ()>(y - n))
    }

    fn mul(n: i64) -> impl Isomorphism<i64, i64, Error = ()> + Clone {
        FnIsomorphism::of(
            move |x: i64| Ok::<_, ()>(x * n),
            move |y: i64| if y % n == 0 { Ok(y / n) } else { Err(()) },
        )
    }

    #[test]
    fn fn_isomorphism_inverse_swaps_functions() {
        let f = add(5);
        assert_eq!(f.apply(10), Ok(15));
        assert_eq!(f.inverse().apply(15), Ok(10));
        assert_eq!(f.inverse().inverse().apply(10), Ok(15));
    }

    #[test]
    fn and_then_applies_self_first() {
        let f = add(1).and_then(mul(3));
        assert_eq!(f.apply(2), Ok(9), "(2 + 1) * 3");
        assert_eq!(f.inverse().apply(9), Ok(2), "9 / 3 - 1");
    }

    #[test]
    fn compose_applies_before_first() {
        let f = add(1).compose(mul(3));
        assert_eq!(f.apply(2), Ok(7), "2 * 3 + 1");
        assert_eq!(f.inverse().apply(7), Ok(2), "(7 - 1) / 3");
    }

    #[test]
    fn composed_inverse_propagates_errors() {
        let f = add(1).and_then(mul(3));
        assert_eq!(f.inverse().apply(10), Err(()));
    }

    #[test]
    fn identity_is_its_own_inverse() {
        let id = Identity::<()>::new();
        assert_eq!(id.apply(42), Ok(42));
        let inverse = Isomorphism::<&str, &str>::inverse(&id);
        assert_eq!(inverse.apply("x"), Ok("x"));
        let f = add(4).and_then::<i64, _>(id).and_then::<i64, _>(add(-4));
        for x in -10..10 {
            assert_eq!(f.apply(x), Ok(x));
        }
    }
}
