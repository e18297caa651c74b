//! Prelude module for convenient imports.
//!
//! ```rust
//! use rpush::rpush::prelude::*;
//!
//! let mut chain = apply(|x: u8| x, elaborate(sink()));
//! chain.push(1);
//! chain.clear();
//! ```

// Core traits
pub use crate::rpush::ext::{BoxedRPush, RPushExt};
pub use crate::rpush::trait_def::RPush;

// Pure combinators
pub use crate::rpush::apply::{apply, Apply};
pub use crate::rpush::tee::{tee, Tee};

// Instantiating constructors
pub use crate::rpush::buffer::{buffer, buffer_with, buffered, Buffer, BufferStep};
pub use crate::rpush::pass::{pass, passed, Pass, PassStep};
pub use crate::rpush::sink::{sink, Sink, SinkStep};
#[cfg(feature = "random")]
pub use crate::rpush::spew::spew_random;
pub use crate::rpush::spew::{spew, spew_with, Spew, SpewStep};

// Adapter
pub use crate::rpush::fifo_push::{fifo_to_rpush, FifoPush};

// Construction context
pub use crate::build::{elaborate, pipe, Build, BuildContext, BuildExt, Elaborator};
