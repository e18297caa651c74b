//! Buffer combinator - decouple producer and consumer by one cycle.

use std::marker::PhantomData;

use crate::build::{Build, BuildContext};
use crate::component::Component;
use crate::fifo::{Fifo, Queue};
use crate::rpush::apply::{apply, Apply};
use crate::rpush::RPush;

/// A consumer that queues pushed values and forwards them from a
/// background rule.
///
/// `push` enqueues. The forwarding rule fires in any cycle where the
/// queue holds a visible element and the destination is ready. It
/// dequeues the head and pushes it to the destination. A value pushed in
/// cycle `c` is forwarded in cycle `c + 1` at the earliest.
///
/// The queue is a [`Fifo`] unless the buffer was built by
/// [`buffer_with`].
///
/// Created by [`buffer`], [`buffered`] or [`buffer_with`].
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let clock = Clock::new();
/// let probe = Probe::new(&clock);
/// let mut sim = Simulator::with_clock(clock, elaborate(buffer(probe.clone())));
///
/// sim.step_with(|chain| chain.push('x'));
/// assert!(probe.is_empty());
///
/// sim.step();
/// assert_observations!(probe, [(1, 'x')]);
/// ```
pub struct Buffer<T, D, Q = Fifo<T>> {
    name: String,
    queue: Q,
    dst: D,
    _marker: PhantomData<fn(T)>,
}

impl<T, D, Q: Queue<T>> std::fmt::Debug for Buffer<T, D, Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("name", &self.name)
            .field("len", &self.queue.len())
            .field("dst", &"<rpush>")
            .finish()
    }
}

impl<T, D, Q> Buffer<T, D, Q> {
    /// Hierarchical instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the internal queue.
    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Borrow the destination.
    pub fn get_ref(&self) -> &D {
        &self.dst
    }
}

impl<T, D, Q: Queue<T>> Buffer<T, D, Q> {
    /// Number of elements in flight inside this buffer.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is in flight inside this buffer.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<T, D> Buffer<T, D, Fifo<T>> {
    /// Depth of the internal queue.
    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }
}

impl<T, D, Q> RPush<T> for Buffer<T, D, Q>
where
    D: RPush<T>,
    Q: Queue<T> + Component,
{
    fn push(&mut self, value: T) {
        if let Err(err) = self.queue.try_enq(value) {
            tracing::warn!(instance = %self.name, error = %err, "element dropped");
        }
    }

    fn clear(&mut self) {
        let dropped = self.queue.len();
        Queue::clear(&mut self.queue);
        self.dst.clear();
        tracing::debug!(instance = %self.name, dropped, "buffer cleared");
    }

    fn ready(&self) -> bool {
        self.queue.not_full()
    }
}

impl<T, D, Q> Component for Buffer<T, D, Q>
where
    D: RPush<T>,
    Q: Queue<T> + Component,
{
    fn fire(&mut self) -> usize {
        // downstream first, so a slot freed this cycle can be refilled
        let mut fired = self.dst.fire();

        if self.queue.not_empty() && self.dst.ready() {
            if let Some(head) = self.queue.deq() {
                tracing::trace!(instance = %self.name, "forwarding buffered element");
                self.dst.push(head);
                fired += 1;
            }
        }
        fired
    }

    fn commit(&mut self) {
        self.queue.commit();
        self.dst.commit();
    }
}

/// Build step that instantiates a [`Buffer`].
///
/// `M` makes the queue from the context's queue depth.
///
/// Created by [`buffer`], [`buffered`] or [`buffer_with`].
pub struct BufferStep<T, D, M = fn(usize) -> Fifo<T>> {
    make_queue: M,
    dst: D,
    _marker: PhantomData<fn(T)>,
}

impl<T, D, M> std::fmt::Debug for BufferStep<T, D, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferStep")
            .field("make_queue", &"<function>")
            .field("dst", &"<rpush>")
            .finish()
    }
}

impl<Cx, T, D, M, Q> Build<Cx> for BufferStep<T, D, M>
where
    Cx: BuildContext + ?Sized,
    D: RPush<T>,
    M: FnOnce(usize) -> Q,
    Q: Queue<T> + Component,
{
    type Output = Buffer<T, D, Q>;

    fn build(self, cx: &mut Cx) -> Self::Output {
        let name = cx.instantiate("buffer");
        Buffer {
            name,
            queue: (self.make_queue)(cx.fifo_depth()),
            dst: self.dst,
            _marker: PhantomData,
        }
    }
}

/// Instantiate a [`Buffer`] in front of `dst`.
///
/// The queue is a [`Fifo`] as deep as the context's
/// [`fifo_depth`](BuildContext::fifo_depth).
pub fn buffer<T, D>(dst: D) -> BufferStep<T, D>
where
    D: RPush<T>,
{
    buffer_with(Fifo::new as fn(usize) -> Fifo<T>, dst)
}

/// Instantiate a [`Buffer`] whose queue `make_queue` creates.
///
/// `make_queue` receives the context's queue depth. The queue is clocked
/// by the buffer, so it must not also be registered with the simulator.
///
/// # Example
///
/// ```rust
/// use rpush::fifo::Fifo;
/// use rpush::prelude::*;
///
/// let probe = Probe::<u8>::new(&Clock::new());
///
/// // twice the configured depth
/// let stage = elaborate(buffer_with(|depth| Fifo::new(depth * 2), probe));
/// assert_eq!(stage.capacity(), 4);
/// ```
pub fn buffer_with<T, D, M, Q>(make_queue: M, dst: D) -> BufferStep<T, D, M>
where
    D: RPush<T>,
    M: FnOnce(usize) -> Q,
    Q: Queue<T> + Component,
{
    BufferStep {
        make_queue,
        dst,
        _marker: PhantomData,
    }
}

/// Instantiate `buffer(apply(f, dst))`.
///
/// The queue holds values before `f` is applied. `f` runs once per
/// forwarded element, when it leaves the queue.
///
/// # Example
///
/// ```rust
/// use rpush::prelude::*;
///
/// let clock = Clock::new();
/// let probe = Probe::new(&clock);
/// let stage = elaborate(buffered(|x: u32| x * 2, probe.clone()));
/// let mut sim = Simulator::with_clock(clock, stage);
///
/// sim.step_with(|chain| chain.push(3));
/// sim.step();
///
/// assert_observations!(probe, [(1, 6)]);
/// ```
pub fn buffered<A, B, F, D>(f: F, dst: D) -> BufferStep<A, Apply<F, D>>
where
    F: FnMut(A) -> B,
    D: RPush<B>,
{
    buffer(apply(f, dst))
}
