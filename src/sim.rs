//! Single-clock simulation driver.
//!
//! Each cycle runs in three phases:
//!
//! 1. **Actions**: the caller pushes into or clears the top component.
//! 2. **Rules**: [`Component::fire`] walks the tree. Each guarded rule
//!    fires at most once.
//! 3. **Commit**: [`Component::commit`] walks the tree, and the clock
//!    advances.
//!
//! Queues are registered, so no rule can see a value that was enqueued
//! earlier in the same cycle. A `clear` issued in the actions phase
//! always runs before that cycle's rules.

use crate::clock::Clock;
use crate::component::Component;

/// What happened in one simulated cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleReport {
    /// The cycle that ran.
    pub cycle: u64,
    /// Number of rules that fired.
    pub fired: usize,
}

/// Drives a component tree one clock cycle at a time.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let clock = Clock::new();
/// let probe = Probe::new(&clock);
/// let chain = elaborate(pipe(buffer::<u8, _>, pipe(buffer::<u8, _>, built(probe.clone()))));
/// let mut sim = Simulator::with_clock(clock, chain);
///
/// sim.step_with(|chain| chain.push(1));
/// sim.run(2);
///
/// // one cycle of latency per buffer
/// assert_observations!(probe, [(2, 1)]);
/// ```
#[derive(Debug)]
pub struct Simulator<C> {
    clock: Clock,
    top: C,
}

impl<C: Component> Simulator<C> {
    /// Drive `top` with a fresh clock.
    pub fn new(top: C) -> Self {
        Self::with_clock(Clock::new(), top)
    }

    /// Drive `top` with a clock the caller already shares with probes.
    pub fn with_clock(clock: Clock, top: C) -> Self {
        Self { clock, top }
    }

    /// The clock this simulator advances.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The next cycle to run.
    pub fn cycle(&self) -> u64 {
        self.clock.now()
    }

    /// Borrow the top component.
    pub fn top(&self) -> &C {
        &self.top
    }

    /// Mutably borrow the top component outside of a cycle.
    pub fn top_mut(&mut self) -> &mut C {
        &mut self.top
    }

    /// Stop simulating and return the top component.
    pub fn into_inner(self) -> C {
        self.top
    }

    /// Run one cycle with no external actions.
    pub fn step(&mut self) -> CycleReport {
        self.step_with(|_| {})
    }

    /// Run one cycle, calling `actions` on the top component before any
    /// rule fires.
    pub fn step_with<F>(&mut self, actions: F) -> CycleReport
    where
        F: FnOnce(&mut C),
    {
        let cycle = self.clock.now();

        actions(&mut self.top);
        let fired = self.top.fire();
        self.top.commit();
        self.clock.advance();

        tracing::trace!(cycle, fired, "cycle complete");
        CycleReport { cycle, fired }
    }

    /// Run `cycles` idle cycles and return the total number of rule firings.
    pub fn run(&mut self, cycles: u64) -> usize {
        (0..cycles).map(|_| self.step().fired).sum()
    }

    /// Run `cycles` idle cycles, one per tick of a wall-clock interval.
    ///
    /// The first cycle runs immediately.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use rpush::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let clock = Clock::new();
    /// let probe = Probe::new(&clock);
    /// let mut sim = Simulator::with_clock(clock, elaborate(spew::<u8, _>(probe.clone())));
    ///
    /// let reports = sim.run_clocked(Duration::from_millis(1), 3).await;
    ///
    /// assert_eq!(reports.len(), 3);
    /// assert_eq!(probe.cycles(), vec![0, 1, 2]);
    /// # });
    /// ```
    #[cfg(feature = "async")]
    pub async fn run_clocked(
        &mut self,
        period: std::time::Duration,
        cycles: u64,
    ) -> Vec<CycleReport> {
        let mut interval = tokio::time::interval(period);
        let mut reports = Vec::new();

        for _ in 0..cycles {
            interval.tick().await;
            reports.push(self.step());
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::elaborate;
    use crate::rpush::{buffer, spew, RPush};
    use crate::testing::Probe;

    #[test]
    fn test_clock_advances_once_per_step() {
        let mut sim = Simulator::new(());

        assert_eq!(sim.step(), CycleReport { cycle: 0, fired: 0 });
        assert_eq!(sim.step().cycle, 1);
        assert_eq!(sim.cycle(), 2);
    }

    #[test]
    fn test_actions_run_before_rules() {
        let clock = Clock::new();
        let probe = Probe::new(&clock);
        let mut sim = Simulator::with_clock(clock, elaborate(buffer(probe.clone())));

        sim.step_with(|chain| chain.push(1));
        // clear lands before the forwarding rule of cycle 1
        let report = sim.step_with(|chain| chain.clear());

        assert_eq!(report.fired, 0);
        assert!(probe.is_empty());
    }

    #[test]
    fn test_run_counts_firings() {
        let clock = Clock::new();
        let probe = Probe::new(&clock);
        let mut sim = Simulator::with_clock(clock, elaborate(spew::<u32, _>(probe.clone())));

        assert_eq!(sim.run(5), 5);
        assert_eq!(probe.len(), 5);
    }

    #[test]
    fn test_into_inner_returns_top() {
        let clock = Clock::new();
        let probe = Probe::<u8>::new(&clock);
        let sim = Simulator::with_clock(clock, elaborate(buffer(probe.clone())));

        let chain = sim.into_inner();
        assert!(chain.is_empty());
    }
}
