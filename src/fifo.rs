//! Clocked queue collaborator.
//!
//! [`Queue`] is the interface the combinators consume. [`Fifo`] is a
//! bounded, registered implementation: an element enqueued in cycle `c`
//! becomes visible to [`first`](Queue::first) and [`deq`](Queue::deq) in
//! cycle `c + 1`, after the clock edge. [`SharedFifo`] is a cloneable
//! handle for queues that are owned outside a combinator chain.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::component::Component;
use crate::error::FifoError;

/// A first-in-first-out element store with fullness signalling.
pub trait Queue<T> {
    /// Checked enqueue.
    fn try_enq(&mut self, value: T) -> Result<(), FifoError>;

    /// Checked dequeue of the visible head.
    fn try_deq(&mut self) -> Result<T, FifoError>;

    /// Copy of the visible head, if any.
    fn first(&self) -> Option<T>
    where
        T: Clone;

    /// Drop every element, including ones enqueued this cycle.
    fn clear(&mut self);

    /// Whether an enqueue would be accepted now.
    fn not_full(&self) -> bool;

    /// Whether a dequeue would return an element now.
    fn not_empty(&self) -> bool;

    /// Number of elements held, visible or not.
    fn len(&self) -> usize;

    /// Whether the queue holds nothing at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enqueue, treating a full queue as a precondition violation.
    ///
    /// The element is dropped and a warning is logged.
    fn enq(&mut self, value: T) {
        if let Err(err) = self.try_enq(value) {
            tracing::warn!(error = %err, "element dropped");
        }
    }

    /// Dequeue the visible head, or `None` when nothing is visible.
    fn deq(&mut self) -> Option<T> {
        self.try_deq().ok()
    }
}

/// A bounded FIFO whose enqueues take effect at the clock edge.
///
/// # Example
///
/// ```rust
/// use rpush::component::Component;
/// use rpush::fifo::{Fifo, Queue};
///
/// let mut fifo = Fifo::new(2);
/// fifo.enq(7);
/// assert!(!fifo.not_empty());
///
/// fifo.commit();
/// assert_eq!(fifo.first(), Some(7));
/// assert_eq!(fifo.deq(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct Fifo<T> {
    capacity: usize,
    visible: VecDeque<T>,
    incoming: VecDeque<T>,
}

impl<T> Fifo<T> {
    /// Create an empty FIFO holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            visible: VecDeque::with_capacity(capacity),
            incoming: VecDeque::new(),
        }
    }

    /// Maximum number of elements held at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements held, visible or not.
    pub fn len(&self) -> usize {
        self.visible.len() + self.incoming.len()
    }

    /// Whether the FIFO holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Queue<T> for Fifo<T> {
    fn try_enq(&mut self, value: T) -> Result<(), FifoError> {
        if !self.not_full() {
            return Err(FifoError::Full {
                capacity: self.capacity,
            });
        }
        self.incoming.push_back(value);
        Ok(())
    }

    fn try_deq(&mut self) -> Result<T, FifoError> {
        self.visible.pop_front().ok_or(FifoError::Empty)
    }

    fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.visible.front().cloned()
    }

    fn clear(&mut self) {
        self.visible.clear();
        self.incoming.clear();
    }

    fn not_full(&self) -> bool {
        self.len() < self.capacity
    }

    fn not_empty(&self) -> bool {
        !self.visible.is_empty()
    }

    fn len(&self) -> usize {
        Fifo::len(self)
    }
}

impl<T> Component for Fifo<T> {
    fn fire(&mut self) -> usize {
        0
    }

    fn commit(&mut self) {
        self.visible.append(&mut self.incoming);
    }
}

/// A shared handle on a [`Fifo`] owned outside any combinator chain.
///
/// Clones refer to the same queue. Hand one clone to
/// [`fifo_to_rpush`](crate::rpush::fifo_to_rpush) and register another
/// with the simulator so the queue is clocked.
///
/// # Example
///
/// ```rust
/// use rpush::fifo::SharedFifo;
/// use rpush::prelude::*;
///
/// let queue = SharedFifo::new(2);
/// let mut sim = Simulator::new((fifo_to_rpush(queue.clone()), queue.clone()));
///
/// sim.step_with(|(port, _)| port.push(5));
/// assert_eq!(queue.deq(), Some(5));
/// ```
#[derive(Debug)]
pub struct SharedFifo<T> {
    inner: Rc<RefCell<Fifo<T>>>,
}

impl<T> Clone for SharedFifo<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> SharedFifo<T> {
    /// Create a shared FIFO holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self::from(Fifo::new(capacity))
    }

    /// Number of elements held, visible or not.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the queue holds nothing at all.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Enqueue through a shared reference.
    pub fn enq(&self, value: T) {
        self.inner.borrow_mut().enq(value)
    }

    /// Dequeue through a shared reference.
    pub fn deq(&self) -> Option<T> {
        self.inner.borrow_mut().deq()
    }
}

impl<T> From<Fifo<T>> for SharedFifo<T> {
    fn from(fifo: Fifo<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(fifo)),
        }
    }
}

impl<T> Queue<T> for SharedFifo<T> {
    fn try_enq(&mut self, value: T) -> Result<(), FifoError> {
        self.inner.borrow_mut().try_enq(value)
    }

    fn try_deq(&mut self) -> Result<T, FifoError> {
        self.inner.borrow_mut().try_deq()
    }

    fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.borrow().first()
    }

    fn clear(&mut self) {
        self.inner.borrow_mut().clear()
    }

    fn not_full(&self) -> bool {
        self.inner.borrow().not_full()
    }

    fn not_empty(&self) -> bool {
        self.inner.borrow().not_empty()
    }

    fn len(&self) -> usize {
        SharedFifo::len(self)
    }
}

impl<T> Component for SharedFifo<T> {
    fn fire(&mut self) -> usize {
        0
    }

    fn commit(&mut self) {
        self.inner.borrow_mut().commit()
    }
}
