//! Apply combinator - map values before they reach the destination.

use crate::component::Component;
use crate::rpush::RPush;

/// A consumer that maps each value before forwarding it.
///
/// No buffering: the destination sees `f(x)` in the same cycle `x` was
/// pushed.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let probe = Probe::new(&Clock::new());
/// let mut chain = apply(|s: &str| s.len(), probe.clone());
///
/// chain.push("four");
/// assert_eq!(probe.values(), vec![4]);
/// ```
pub struct Apply<F, D> {
    pub(crate) f: F,
    pub(crate) dst: D,
}

impl<F, D> std::fmt::Debug for Apply<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Apply")
            .field("f", &"<function>")
            .field("dst", &"<rpush>")
            .finish()
    }
}

impl<F, D> Apply<F, D> {
    /// Borrow the destination.
    pub fn get_ref(&self) -> &D {
        &self.dst
    }

    /// Discard the mapping and return the destination.
    pub fn into_inner(self) -> D {
        self.dst
    }
}

impl<A, B, F, D> RPush<A> for Apply<F, D>
where
    F: FnMut(A) -> B,
    D: RPush<B>,
{
    fn push(&mut self, value: A) {
        let mapped = (self.f)(value);
        self.dst.push(mapped);
    }

    fn clear(&mut self) {
        self.dst.clear();
    }

    fn ready(&self) -> bool {
        self.dst.ready()
    }
}

impl<F, D: Component> Component for Apply<F, D> {
    fn fire(&mut self) -> usize {
        self.dst.fire()
    }

    fn commit(&mut self) {
        self.dst.commit();
    }
}

/// Map every pushed value with `f` before it reaches `dst`.
///
/// `f` must be total.
pub fn apply<A, B, F, D>(f: F, dst: D) -> Apply<F, D>
where
    F: FnMut(A) -> B,
    D: RPush<B>,
{
    Apply { f, dst }
}
