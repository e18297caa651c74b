//! The global synchronous clock.

use std::cell::Cell;
use std::rc::Rc;

/// A shared, read-only view of the current cycle number.
///
/// Every clone observes the same counter. Only the
/// [`Simulator`](crate::sim::Simulator) that owns the clock advances it,
/// once per completed cycle.
///
/// # Example
///
/// ```rust
/// use rpush::clock::Clock;
/// use rpush::prelude::*;
///
/// let clock = Clock::new();
/// let mut sim = Simulator::with_clock(clock.clone(), elaborate(sink()));
///
/// assert_eq!(clock.now(), 0);
/// sim.run(3);
/// assert_eq!(clock.now(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Clock {
    now: Rc<Cell<u64>>,
}

impl Clock {
    /// Create a clock at cycle 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cycle currently being executed.
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub(crate) fn advance(&self) {
        self.now.set(self.now.get() + 1);
    }
}
