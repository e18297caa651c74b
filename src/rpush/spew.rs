//! Spew - a generator that pushes a value every cycle.

use crate::build::{Build, BuildContext};
use crate::component::Component;
use crate::rpush::RPush;

/// A unit with no push interface whose rule pushes one value into its
/// destination every cycle the destination is ready.
///
/// The values carry no meaning: `spew` exists to keep a pipeline busy.
///
/// Created by [`spew`], [`spew_with`] or `spew_random`.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let clock = Clock::new();
/// let probe = Probe::new(&clock);
/// let mut sim = Simulator::with_clock(clock, elaborate(spew::<u8, _>(probe.clone())));
///
/// sim.run(3);
/// assert_eq!(probe.cycles(), vec![0, 1, 2]);
/// ```
pub struct Spew<G, D> {
    name: String,
    generate: G,
    dst: D,
}

impl<G, D> std::fmt::Debug for Spew<G, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spew")
            .field("name", &self.name)
            .field("generate", &"<function>")
            .field("dst", &"<rpush>")
            .finish()
    }
}

impl<G, D> Spew<G, D> {
    /// Hierarchical instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the destination.
    pub fn get_ref(&self) -> &D {
        &self.dst
    }
}

impl<T, G, D> Spew<G, D>
where
    G: FnMut() -> T,
    D: RPush<T>,
{
    /// Clear the destination this generator owns.
    pub fn clear(&mut self) {
        self.dst.clear();
    }
}

impl<T, G, D> Component for Spew<G, D>
where
    G: FnMut() -> T,
    D: RPush<T>,
{
    fn fire(&mut self) -> usize {
        let fired = self.dst.fire();

        if self.dst.ready() {
            let value = (self.generate)();
            self.dst.push(value);
            return fired + 1;
        }
        fired
    }

    fn commit(&mut self) {
        self.dst.commit();
    }
}

/// Build step that instantiates a [`Spew`].
///
/// Created by [`spew`], [`spew_with`] or `spew_random`.
pub struct SpewStep<G, D> {
    generate: G,
    dst: D,
}

impl<G, D> std::fmt::Debug for SpewStep<G, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpewStep")
            .field("generate", &"<function>")
            .field("dst", &"<rpush>")
            .finish()
    }
}

impl<Cx, G, D> Build<Cx> for SpewStep<G, D>
where
    Cx: BuildContext + ?Sized,
{
    type Output = Spew<G, D>;

    fn build(self, cx: &mut Cx) -> Spew<G, D> {
        Spew {
            name: cx.instantiate("spew"),
            generate: self.generate,
            dst: self.dst,
        }
    }
}

/// Instantiate a [`Spew`] that pushes `T::default()`.
pub fn spew<T, D>(dst: D) -> SpewStep<fn() -> T, D>
where
    T: Default,
    D: RPush<T>,
{
    spew_with(T::default as fn() -> T, dst)
}

/// Instantiate a [`Spew`] that pushes whatever `generate` returns.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let clock = Clock::new();
/// let probe = Probe::new(&clock);
/// let mut next = 0u32;
/// let generator = spew_with(move || { next += 1; next }, probe.clone());
/// let mut sim = Simulator::with_clock(clock, elaborate(generator));
///
/// sim.run(3);
/// assert_eq!(probe.values(), vec![1, 2, 3]);
/// ```
pub fn spew_with<T, G, D>(generate: G, dst: D) -> SpewStep<G, D>
where
    G: FnMut() -> T,
    D: RPush<T>,
{
    SpewStep { generate, dst }
}

/// Instantiate a [`Spew`] that pushes uniformly random values.
#[cfg(feature = "random")]
pub fn spew_random<T, D>(dst: D) -> SpewStep<fn() -> T, D>
where
    rand::distr::StandardUniform: rand::distr::Distribution<T>,
    D: RPush<T>,
{
    spew_with(rand::random::<T> as fn() -> T, dst)
}
