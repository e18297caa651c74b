//! Reverse-push consumers and their combinators.
//!
//! An [`RPush<T>`](RPush) accepts one value per cycle through `push` and
//! drops whatever it has buffered through `clear`. Chains are built
//! right-to-left: each combinator takes the consumer it forwards to and
//! owns it. A caller pushes into the outermost stage, and values flow
//! inward until they reach a [`Sink`] or an external queue.
//!
//! # Module Structure
//!
//! - [`RPush`] - the consumer trait
//! - [`RPushExt`] - method forms of the pure combinators
//! - [`apply()`], [`tee()`] - pure combinators with no latency
//! - [`buffer()`], [`buffered()`], [`buffer_with()`] - queued stages that add one cycle
//! - [`pass()`], [`passed()`] - named pass-through units
//! - [`sink()`], [`spew()`] - terminator and generator
//! - [`fifo_to_rpush()`] - adapter for externally owned queues
//!
//! # Example
//!
//! ```rust
//! use rpush::prelude::*;
//!
//! let clock = Clock::new();
//! let probe = Probe::new(&clock);
//! let chain = elaborate(buffer(apply(|x: u32| x * 2, probe.clone())));
//! let mut sim = Simulator::with_clock(clock, chain);
//!
//! sim.step_with(|chain| chain.push(3));
//! assert!(probe.is_empty());
//!
//! sim.step();
//! assert_observations!(probe, [(1, 6)]);
//! ```

mod apply;
mod buffer;
mod ext;
mod fifo_push;
mod pass;
pub mod prelude;
mod sink;
mod spew;
mod tee;
mod trait_def;

pub use trait_def::RPush;

pub use ext::{BoxedRPush, RPushExt};

pub use apply::{apply, Apply};
pub use buffer::{buffer, buffer_with, buffered, Buffer, BufferStep};
pub use fifo_push::{fifo_to_rpush, FifoPush};
pub use pass::{pass, passed, Pass, PassStep};
pub use sink::{sink, Sink, SinkStep};
#[cfg(feature = "random")]
pub use spew::spew_random;
pub use spew::{spew, spew_with, Spew, SpewStep};
pub use tee::{tee, Tee};
