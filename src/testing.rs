//! Testing utilities for consumer chains.
//!
//! [`Probe`] is a terminating consumer that records what reaches it and
//! when. Clones share one log, so a test keeps one clone and moves the
//! other into the chain under test.
//!
//! # Examples
//!
//! ```rust
//! use rpush::prelude::*;
//!
//! let clock = Clock::new();
//! let probe = Probe::new(&clock);
//! let mut sim = Simulator::with_clock(clock, elaborate(pass(probe.clone())));
//!
//! sim.step_with(|unit| unit.push("a"));
//! sim.step();
//! sim.step_with(|unit| unit.push("b"));
//!
//! assert_observations!(probe, [(0, "a"), (2, "b")]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::Clock;
use crate::component::Component;
use crate::rpush::RPush;

/// One value seen by a [`Probe`], stamped with the cycle it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation<T> {
    /// Cycle in which `push` was called.
    pub cycle: u64,
    /// The pushed value.
    pub value: T,
}

/// A recording consumer for tests.
///
/// Records every pushed value with the current cycle, counts `clear`
/// calls, and reports a configurable `ready` signal for exercising
/// back-pressure.
#[derive(Debug)]
pub struct Probe<T> {
    clock: Clock,
    log: Rc<RefCell<Vec<Observation<T>>>>,
    clears: Rc<Cell<usize>>,
    ready: Rc<Cell<bool>>,
}

impl<T> Clone for Probe<T> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            log: Rc::clone(&self.log),
            clears: Rc::clone(&self.clears),
            ready: Rc::clone(&self.ready),
        }
    }
}

impl<T> Probe<T> {
    /// Create a probe that stamps observations with `clock`.
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            log: Rc::new(RefCell::new(Vec::new())),
            clears: Rc::new(Cell::new(0)),
            ready: Rc::new(Cell::new(true)),
        }
    }

    /// Every observation so far.
    pub fn observations(&self) -> Vec<Observation<T>>
    where
        T: Clone,
    {
        self.log.borrow().clone()
    }

    /// Every observation as a `(cycle, value)` pair.
    pub fn pairs(&self) -> Vec<(u64, T)>
    where
        T: Clone,
    {
        self.log
            .borrow()
            .iter()
            .map(|o| (o.cycle, o.value.clone()))
            .collect()
    }

    /// Observed values, in arrival order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.log.borrow().iter().map(|o| o.value.clone()).collect()
    }

    /// Cycles in which values arrived.
    pub fn cycles(&self) -> Vec<u64> {
        self.log.borrow().iter().map(|o| o.cycle).collect()
    }

    /// Remove and return every observation so far.
    pub fn take(&self) -> Vec<Observation<T>> {
        self.log.take()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.log.borrow().len()
    }

    /// Whether nothing has been observed.
    pub fn is_empty(&self) -> bool {
        self.log.borrow().is_empty()
    }

    /// How many times `clear` reached this probe.
    pub fn clear_count(&self) -> usize {
        self.clears.get()
    }

    /// Set the `ready` signal reported to upstream stages.
    pub fn set_ready(&self, ready: bool) {
        self.ready.set(ready);
    }
}

impl<T> RPush<T> for Probe<T> {
    fn push(&mut self, value: T) {
        self.log.borrow_mut().push(Observation {
            cycle: self.clock.now(),
            value,
        });
    }

    // clears count only; the log is the test's record
    fn clear(&mut self) {
        self.clears.set(self.clears.get() + 1);
    }

    fn ready(&self) -> bool {
        self.ready.get()
    }
}

impl<T> Component for Probe<T> {
    fn fire(&mut self) -> usize {
        0
    }

    fn commit(&mut self) {}
}

/// Assert the exact `(cycle, value)` history of a [`Probe`].
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let probe = Probe::<i32>::new(&Clock::new());
/// assert_observations!(probe, []);
///
/// probe.clone().push(5);
/// assert_observations!(probe, [(0, 5)]);
/// ```
#[macro_export]
macro_rules! assert_observations {
    ($probe:expr, [$(($cycle:expr, $value:expr)),* $(,)?]) => {
        assert_eq!(
            $probe.pairs(),
            ::std::vec![$(($cycle, $value)),*],
            "unexpected observations"
        );
    };
}
