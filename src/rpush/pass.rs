//! Pass combinator - give a sub-chain its own instance identity.

use crate::build::{Build, BuildContext};
use crate::component::Component;
use crate::rpush::apply::{apply, Apply};
use crate::rpush::RPush;

/// A named unit that forwards `push`, `clear` and `ready` to its
/// destination unchanged.
///
/// Adds no buffering and no latency. Use it to give a reusable
/// sub-chain its own place in the instance hierarchy.
///
/// Created by [`pass`] or [`passed`].
pub struct Pass<D> {
    name: String,
    dst: D,
}

impl<D> std::fmt::Debug for Pass<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pass")
            .field("name", &self.name)
            .field("dst", &"<rpush>")
            .finish()
    }
}

impl<D> Pass<D> {
    /// Hierarchical instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the destination.
    pub fn get_ref(&self) -> &D {
        &self.dst
    }

    /// Mutably borrow the destination.
    pub fn get_mut(&mut self) -> &mut D {
        &mut self.dst
    }
}

impl<T, D: RPush<T>> RPush<T> for Pass<D> {
    fn push(&mut self, value: T) {
        self.dst.push(value);
    }

    fn clear(&mut self) {
        self.dst.clear();
    }

    fn ready(&self) -> bool {
        self.dst.ready()
    }
}

impl<D: Component> Component for Pass<D> {
    fn fire(&mut self) -> usize {
        self.dst.fire()
    }

    fn commit(&mut self) {
        self.dst.commit();
    }
}

/// Build step that instantiates a [`Pass`].
///
/// Created by [`pass`] or [`passed`].
#[derive(Debug, Clone)]
pub struct PassStep<D> {
    dst: D,
}

impl<Cx, D> Build<Cx> for PassStep<D>
where
    Cx: BuildContext + ?Sized,
{
    type Output = Pass<D>;

    fn build(self, cx: &mut Cx) -> Pass<D> {
        Pass {
            name: cx.instantiate("pass"),
            dst: self.dst,
        }
    }
}

/// Instantiate a [`Pass`] around `dst`.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let probe = Probe::new(&Clock::new());
/// let mut unit = elaborate(pass(probe.clone()).scoped("alu"));
///
/// unit.push(9);
/// assert_eq!(unit.name(), "top.alu.pass0");
/// assert_eq!(probe.values(), vec![9]);
/// ```
pub fn pass<D>(dst: D) -> PassStep<D> {
    PassStep { dst }
}

/// Instantiate `pass(apply(f, dst))`.
pub fn passed<A, B, F, D>(f: F, dst: D) -> PassStep<Apply<F, D>>
where
    F: FnMut(A) -> B,
    D: RPush<B>,
{
    pass(apply(f, dst))
}
