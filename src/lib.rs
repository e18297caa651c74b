//! # rpush
//!
//! Reverse-push stream consumers for composing synchronous, clock-driven
//! pipelines out of small reusable pieces.
//!
//! An [`RPush<T>`](RPush) accepts one value per cycle and can be reset.
//! Combinators wrap a destination consumer and own it, so a pipeline is a
//! tree built right-to-left and values flow from the outermost stage
//! inward:
//!
//! - [`apply`](rpush::apply()) and [`tee`](rpush::tee()) transform or
//!   observe values with no added latency.
//! - [`buffer`](rpush::buffer()) puts a queue in front of a stage. The
//!   queue is drained by a background rule one cycle later.
//! - [`pass`](rpush::pass()) gives a sub-chain its own instance name.
//! - [`sink`](rpush::sink()) terminates a chain and
//!   [`spew`](rpush::spew()) feeds one.
//! - [`fifo_to_rpush`](rpush::fifo_to_rpush()) ends a chain in a queue
//!   that something else owns.
//!
//! Units that need a name or a queue are built inside an
//! [`Elaborator`](build::Elaborator), and [`pipe`](build::pipe()) chains
//! their build steps. A [`Simulator`](sim::Simulator) then drives the
//! finished tree one clock cycle at a time.
//!
//! ## Quick Example
//!
//! ```rust
//! use rpush::prelude::*;
//!
//! let clock = Clock::new();
//! let probe = Probe::new(&clock);
//!
//! // buffer(apply(double, probe))
//! let chain = elaborate(buffered(|x: u32| x * 2, probe.clone()));
//! let mut sim = Simulator::with_clock(clock, chain);
//!
//! sim.step_with(|chain| chain.push(3)); // cycle 0
//! sim.step(); // cycle 1
//!
//! assert_observations!(probe, [(1, 6)]);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod build;
pub mod clock;
pub mod component;
pub mod config;
pub mod error;
pub mod fifo;
pub mod rpush;
pub mod sim;
pub mod testing;

// Re-exports
pub use crate::component::Component;
pub use crate::error::{ConfigError, FifoError};
pub use crate::rpush::{RPush, RPushExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assert_observations;
    pub use crate::build::{built, elaborate, pipe, Build, BuildContext, BuildExt, Elaborator};
    pub use crate::clock::Clock;
    pub use crate::component::Component;
    pub use crate::rpush::prelude::*;
    pub use crate::sim::{CycleReport, Simulator};
    pub use crate::testing::{Observation, Probe};
}
