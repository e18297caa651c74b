//! Extension trait providing combinator methods for all RPush consumers.

use crate::rpush::apply::Apply;
use crate::rpush::tee::Tee;
use crate::rpush::RPush;

/// A type-erased consumer.
pub type BoxedRPush<'a, T> = Box<dyn RPush<T> + 'a>;

/// Extension trait providing method forms of the pure combinators.
///
/// Automatically implemented for every [`RPush`].
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let probe = Probe::new(&Clock::new());
/// let mut chain = probe
///     .clone()
///     .apply(|x: u32| x + 1)
///     .tee(|x: &u32| assert!(*x < 10))
///     .apply(|s: &str| s.len() as u32);
///
/// chain.push("abc");
/// assert_eq!(probe.values(), vec![4]);
/// ```
pub trait RPushExt<T>: RPush<T> {
    /// Map values with `f` before they reach this consumer.
    ///
    /// Method form of [`apply`](crate::rpush::apply()).
    fn apply<A, F>(self, f: F) -> Apply<F, Self>
    where
        Self: Sized,
        F: FnMut(A) -> T,
    {
        Apply { f, dst: self }
    }

    /// Show values to `observer` before they reach this consumer.
    ///
    /// Method form of [`tee`](crate::rpush::tee()).
    fn tee<F>(self, observer: F) -> Tee<F, Self>
    where
        Self: Sized,
        F: FnMut(&T),
    {
        Tee {
            observer,
            dst: self,
        }
    }

    /// Erase the concrete type.
    ///
    /// Useful for chains whose depth is only known at run time.
    fn boxed<'a>(self) -> BoxedRPush<'a, T>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<T, R: RPush<T> + ?Sized> RPushExt<T> for R {}
