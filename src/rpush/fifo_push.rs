//! Adapter exposing an externally owned queue as an RPush.

use crate::component::Component;
use crate::fifo::Queue;
use crate::rpush::RPush;

/// A consumer that enqueues into a queue it does not own.
///
/// `push` enqueues and `clear` clears the queue. `ready` reports whether
/// the queue has room. The queue's owner is responsible for clocking it,
/// so `fire` and `commit` do nothing here.
///
/// Created by [`fifo_to_rpush`].
#[derive(Debug, Clone)]
pub struct FifoPush<Q> {
    queue: Q,
}

impl<Q> FifoPush<Q> {
    /// Borrow the queue handle.
    pub fn get_ref(&self) -> &Q {
        &self.queue
    }
}

impl<T, Q: Queue<T>> RPush<T> for FifoPush<Q> {
    fn push(&mut self, value: T) {
        self.queue.enq(value);
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn ready(&self) -> bool {
        self.queue.not_full()
    }
}

impl<Q> Component for FifoPush<Q> {
    fn fire(&mut self) -> usize {
        0
    }

    fn commit(&mut self) {}
}

/// Expose `queue` as an [`RPush`].
///
/// Pass a handle such as a [`SharedFifo`](crate::fifo::SharedFifo) clone,
/// and keep another clone with whoever clocks and drains the queue.
///
/// # Example
///
/// ```rust
/// use rpush::fifo::SharedFifo;
/// use rpush::prelude::*;
///
/// let queue = SharedFifo::new(1);
/// let mut port = fifo_to_rpush(queue.clone());
///
/// port.push(1u8);
/// assert!(!port.ready());
///
/// port.clear();
/// assert!(queue.is_empty());
/// ```
pub fn fifo_to_rpush<Q>(queue: Q) -> FifoPush<Q> {
    FifoPush { queue }
}
