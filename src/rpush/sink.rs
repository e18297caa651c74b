//! Sink - the terminator that absorbs everything.

use crate::build::{Build, BuildContext};
use crate::component::Component;
use crate::rpush::RPush;

/// A consumer of any type that discards every value.
///
/// Always ready. `push` and `clear` have no effect. Owns no rules.
///
/// Created by [`sink`].
#[derive(Debug, Clone)]
pub struct Sink {
    name: String,
}

impl Sink {
    /// Hierarchical instance name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> RPush<T> for Sink {
    fn push(&mut self, _value: T) {}

    fn clear(&mut self) {}
}

impl Component for Sink {
    fn fire(&mut self) -> usize {
        0
    }

    fn commit(&mut self) {}
}

/// Build step that instantiates a [`Sink`].
///
/// Created by [`sink`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SinkStep;

impl<Cx: BuildContext + ?Sized> Build<Cx> for SinkStep {
    type Output = Sink;

    fn build(self, cx: &mut Cx) -> Sink {
        Sink {
            name: cx.instantiate("sink"),
        }
    }
}

/// Instantiate a [`Sink`].
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let mut sim = Simulator::new(elaborate(sink()));
/// sim.step_with(|s| RPush::<&str>::push(s, "ignored"));
///
/// assert_eq!(sim.step().fired, 0);
/// ```
pub fn sink() -> SinkStep {
    SinkStep
}
