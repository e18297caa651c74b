//! The capabilities a build step needs from its construction context.

/// A construction context that names units and sizes their queues.
///
/// [`Elaborator`](crate::build::Elaborator) is the context this crate
/// ships. Every combinator step builds in any `BuildContext`, so a host
/// that keeps its own instance registry can implement this trait and run
/// the same steps through [`Build::build`](crate::build::Build::build).
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// struct Flat(usize);
///
/// impl BuildContext for Flat {
///     fn instantiate(&mut self, kind: &str) -> String {
///         self.0 += 1;
///         format!("{kind}#{}", self.0)
///     }
///
///     fn fifo_depth(&self) -> usize {
///         8
///     }
/// }
///
/// let mut cx = Flat(0);
/// let stage = buffer::<u8, _>(Probe::new(&Clock::new())).build(&mut cx);
///
/// assert_eq!(stage.name(), "buffer#1");
/// assert_eq!(stage.capacity(), 8);
/// ```
pub trait BuildContext {
    /// Register a new unit of the given kind and return its unique path.
    fn instantiate(&mut self, kind: &str) -> String;

    /// Depth of the queue each buffer instantiates.
    fn fifo_depth(&self) -> usize;
}
