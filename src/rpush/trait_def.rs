//! RPush trait definition.

use crate::component::Component;

/// A push-consumer that accepts one value per cycle and can be reset.
///
/// `push` may forward the value to a destination the consumer owns,
/// transformed or delayed. `clear` discards every element buffered
/// anywhere in the chain below this consumer. After `clear` the chain
/// behaves as if freshly constructed.
///
/// The scheduler must call `push` at most once and `clear` at most once
/// per instance per cycle, and must not call `push` unless [`ready`]
/// holds. The combinators do not check either condition.
///
/// [`ready`]: RPush::ready
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let clock = Clock::new();
/// let probe = Probe::new(&clock);
/// let mut chain = apply(|x: u32| x * 10, probe.clone());
///
/// chain.push(4);
/// chain.clear();
///
/// assert_eq!(probe.values(), vec![40]);
/// assert_eq!(probe.clear_count(), 1);
/// ```
pub trait RPush<T>: Component {
    /// Accept one value for this cycle.
    fn push(&mut self, value: T);

    /// Drop all buffered state owned by this consumer, recursively.
    ///
    /// Idempotent.
    fn clear(&mut self);

    /// Whether `push` may be called this cycle.
    ///
    /// This is the implicit condition the scheduler checks before pushing.
    /// Defaults to `true`.
    fn ready(&self) -> bool {
        true
    }
}

impl<T, R: RPush<T> + ?Sized> RPush<T> for Box<R> {
    fn push(&mut self, value: T) {
        (**self).push(value)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn ready(&self) -> bool {
        (**self).ready()
    }
}
