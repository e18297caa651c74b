//! Component-construction context.
//!
//! Combinators that instantiate a new addressable unit (`buffer`, `pass`,
//! `sink`, `spew`) do not return the unit directly. They return a
//! [`Build`] step, which runs inside a [`BuildContext`]. The context gives
//! every unit a unique name and supplies the depth of its queues.
//! [`Elaborator`] is the stock context: it names units hierarchically and
//! reads its settings from a [`BuildConfig`](crate::config::BuildConfig).
//!
//! Build steps are sequenced with [`pipe`], or with
//! [`BuildExt::and_then`] in method-chaining form. Both build the inner
//! step first and feed its result to the outer one, so a chain reads
//! right-to-left the same way data flows.
//!
//! # Example
//!
//! ```rust
//! use rpush::prelude::*;
//!
//! let mut cx = Elaborator::new();
//! let chain = cx.build(pipe(pass, pipe(buffer::<u8, _>, sink())));
//!
//! assert_eq!(chain.name(), "top.pass0");
//! assert_eq!(chain.get_ref().name(), "top.buffer0");
//! assert_eq!(cx.instances(), ["top.sink0", "top.buffer0", "top.pass0"]);
//! ```

mod context;
mod elaborator;
mod ext;
mod pipe;
mod trait_def;

pub use context::BuildContext;
pub use elaborator::{elaborate, Elaborator};
pub use ext::{BuildExt, BuildMap, Scoped};
pub use pipe::{built, pipe, Built, Pipe};
pub use trait_def::Build;
