//! Tee combinator - observe values on their way through.

use crate::component::Component;
use crate::rpush::RPush;

/// A consumer that shows each value to an observer, then forwards it
/// unchanged.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let probe = Probe::new(&Clock::new());
/// let mut seen = Vec::new();
/// {
///     let mut chain = tee(|x: &u8| seen.push(*x), probe.clone());
///     chain.push(1);
///     chain.push(2);
/// }
///
/// assert_eq!(seen, vec![1, 2]);
/// assert_eq!(probe.values(), vec![1, 2]);
/// ```
pub struct Tee<F, D> {
    pub(crate) observer: F,
    pub(crate) dst: D,
}

impl<F, D> std::fmt::Debug for Tee<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tee")
            .field("observer", &"<function>")
            .field("dst", &"<rpush>")
            .finish()
    }
}

impl<F, D> Tee<F, D> {
    /// Borrow the destination.
    pub fn get_ref(&self) -> &D {
        &self.dst
    }
}

impl<A, F, D> RPush<A> for Tee<F, D>
where
    F: FnMut(&A),
    D: RPush<A>,
{
    fn push(&mut self, value: A) {
        (self.observer)(&value);
        self.dst.push(value);
    }

    // the observer holds no clearable state
    fn clear(&mut self) {
        self.dst.clear();
    }

    fn ready(&self) -> bool {
        self.dst.ready()
    }
}

impl<F, D: Component> Component for Tee<F, D> {
    fn fire(&mut self) -> usize {
        self.dst.fire()
    }

    fn commit(&mut self) {
        self.dst.commit();
    }
}

/// Run `observer` on every pushed value, then forward it to `dst`.
pub fn tee<A, F, D>(observer: F, dst: D) -> Tee<F, D>
where
    F: FnMut(&A),
    D: RPush<A>,
{
    Tee { observer, dst }
}
