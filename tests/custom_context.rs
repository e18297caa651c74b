//! Building chains outside the stock elaborator, with host-defined queues

use rpush::component::Component;
use rpush::fifo::Queue;
use rpush::prelude::*;
use rpush::FifoError;

/// A flat registry that numbers units in construction order.
struct Netlist {
    depth: usize,
    cells: Vec<String>,
}

impl Netlist {
    fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            cells: Vec::new(),
        }
    }
}

impl BuildContext for Netlist {
    fn instantiate(&mut self, kind: &str) -> String {
        let name = format!("{}@{}", kind, self.cells.len());
        self.cells.push(name.clone());
        name
    }

    fn fifo_depth(&self) -> usize {
        self.depth
    }
}

/// A one-element registered slot.
#[derive(Debug)]
struct Slot<T> {
    held: Option<T>,
    incoming: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            held: None,
            incoming: None,
        }
    }
}

impl<T> Queue<T> for Slot<T> {
    fn try_enq(&mut self, value: T) -> Result<(), FifoError> {
        if !self.not_full() {
            return Err(FifoError::Full { capacity: 1 });
        }
        self.incoming = Some(value);
        Ok(())
    }

    fn try_deq(&mut self) -> Result<T, FifoError> {
        self.held.take().ok_or(FifoError::Empty)
    }

    fn first(&self) -> Option<T>
    where
        T: Clone,
    {
        self.held.clone()
    }

    fn clear(&mut self) {
        self.held = None;
        self.incoming = None;
    }

    fn not_full(&self) -> bool {
        self.len() == 0
    }

    fn not_empty(&self) -> bool {
        self.held.is_some()
    }

    fn len(&self) -> usize {
        usize::from(self.held.is_some()) + usize::from(self.incoming.is_some())
    }
}

impl<T> Component for Slot<T> {
    fn fire(&mut self) -> usize {
        0
    }

    fn commit(&mut self) {
        if let Some(value) = self.incoming.take() {
            self.held = Some(value);
        }
    }
}

#[test]
fn default_buffer_takes_depth_and_name_from_host_context() {
    let mut cx = Netlist::with_depth(3);

    let stage = buffer::<u8, _>(Probe::new(&Clock::new())).build(&mut cx);

    assert_eq!(stage.name(), "buffer@0");
    assert_eq!(stage.capacity(), 3);
}

#[test]
fn chain_buffers_through_host_queue() {
    let clock = Clock::new();
    let probe = Probe::new(&clock);
    let mut cx = Netlist::with_depth(4);

    let chain = pipe(
        pass,
        buffer_with(
            |_depth| Slot::<u32>::default(),
            apply(|x: u32| x + 1, probe.clone()),
        ),
    )
    .build(&mut cx);

    assert_eq!(cx.cells, ["buffer@0", "pass@1"]);
    assert_eq!(chain.get_ref().queue().len(), 0);

    let mut sim = Simulator::with_clock(clock, chain);

    sim.step_with(|chain| chain.push(4));
    // the slot holds one element until it drains
    assert!(!sim.top().ready());

    sim.step();
    assert!(sim.top().ready());

    sim.step_with(|chain| chain.push(9));
    sim.step();

    assert_observations!(probe, [(1, 5), (3, 10)]);
}

#[test]
fn clear_empties_host_queue() {
    let mut cx = Netlist::with_depth(1);
    let probe = Probe::<u32>::new(&Clock::new());
    let mut stage = buffer_with(|_| Slot::default(), probe.clone()).build(&mut cx);

    stage.push(7);
    stage.clear();

    assert!(stage.is_empty());
    assert_eq!(probe.clear_count(), 1);
}

#[test]
fn elaborator_is_one_context_among_many() {
    let steps = || pipe(pass, buffer::<u8, _>(Probe::new(&Clock::new())));

    let stock = elaborate(steps());
    let hosted = steps().build(&mut Netlist::with_depth(2));

    assert_eq!(stock.name(), "top.pass0");
    assert_eq!(hosted.name(), "pass@1");
    assert_eq!(stock.get_ref().capacity(), hosted.get_ref().capacity());
}
