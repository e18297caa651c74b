//! End-to-end pipelines driven by the simulator

use rpush::config::BuildConfig;
use rpush::fifo::{Queue, SharedFifo};
use rpush::prelude::*;
use tracing_test::traced_test;

fn double(x: u32) -> u32 {
    x * 2
}

#[test]
fn buffered_double_arrives_next_cycle() {
    let clock = Clock::new();
    let probe = Probe::new(&clock);
    let mut sim = Simulator::with_clock(clock, elaborate(buffer(apply(double, probe.clone()))));

    sim.step_with(|chain| chain.push(3));
    assert_observations!(probe, []);

    sim.step();
    assert_observations!(probe, [(1, 6)]);
}

#[test]
fn clear_before_forwarding_rule_drops_value() {
    let clock = Clock::new();
    let probe = Probe::new(&clock);
    let mut sim = Simulator::with_clock(clock, elaborate(buffer(apply(double, probe.clone()))));

    sim.step_with(|chain| chain.push(3));
    sim.step_with(|chain| chain.clear());
    sim.run(4);

    assert_observations!(probe, []);
    assert_eq!(probe.clear_count(), 1);
}

#[test]
fn pipe_builds_right_to_left() {
    let clock = Clock::new();
    let probe = Probe::new(&clock);
    let mut cx = Elaborator::new();

    let chain = cx.build(pipe(
        |dst| passed(|x: u8| u32::from(x) + 1, dst),
        pipe(
            |dst| buffered(double, dst),
            built(tee(|x: &u32| assert!(x.is_multiple_of(2)), probe.clone())),
        ),
    ));
    let mut sim = Simulator::with_clock(clock, chain);

    sim.step_with(|chain| chain.push(4));
    sim.step();

    assert_observations!(probe, [(1, 10)]);
    assert_eq!(cx.instances(), ["top.buffer0", "top.pass0"]);
}

#[test]
fn generator_feeds_external_queue() {
    let queue = SharedFifo::new(2);
    let mut next = 0u64;
    let generator = elaborate(pipe(
        move |stage| {
            spew_with(
                move || {
                    next += 1;
                    next
                },
                stage,
            )
        },
        buffer(fifo_to_rpush(queue.clone())),
    ));
    let mut sim = Simulator::new((generator, queue.clone()));

    // nobody drains the queue, so back-pressure stalls the generator
    sim.run(10);

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.first(), Some(1));
    assert_eq!(sim.top().0.get_ref().len(), 2);

    // drain one element per cycle and the pipeline keeps moving in order
    let mut drained = Vec::new();
    for _ in 0..6 {
        drained.extend(queue.deq());
        sim.step();
    }
    assert_eq!(drained, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn independent_roots_share_one_clock() {
    let clock = Clock::new();
    let left = Probe::new(&clock);
    let right = Probe::new(&clock);
    let mut cx = Elaborator::with_config(BuildConfig::new().with_root("soc")).unwrap();

    let roots = (
        cx.scope("left", spew::<u8, _>(left.clone())),
        cx.scope("right", buffer::<u8, _>(right.clone())),
    );
    let mut sim = Simulator::with_clock(clock, roots);

    sim.step_with(|(_, buffered)| buffered.push(7));
    sim.step();

    assert_eq!(left.cycles(), vec![0, 1]);
    assert_observations!(right, [(1, 7)]);
    assert_eq!(sim.top().0.name(), "soc.left.spew0");
    assert_eq!(sim.top().1.name(), "soc.right.buffer0");
}

#[traced_test]
#[test]
fn overflow_is_logged() {
    let probe = Probe::<u8>::new(&Clock::new());
    let mut cx = Elaborator::with_config(BuildConfig::new().with_fifo_depth(1)).unwrap();
    let mut chain = cx.build(buffer(probe));

    chain.push(1);
    chain.push(2);

    assert!(logs_contain("enq on full fifo"));
    assert_eq!(chain.len(), 1);
}

#[traced_test]
#[test]
fn clear_is_logged_with_drop_count() {
    let probe = Probe::<u8>::new(&Clock::new());
    let mut chain = elaborate(buffer(probe));

    chain.push(1);
    chain.clear();

    assert!(logs_contain("buffer cleared"));
    assert!(logs_contain("dropped=1"));
}

#[test]
fn simulator_runs_with_fmt_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let mut sim = Simulator::new(elaborate(spew::<u8, _>(elaborate(sink()))));
    assert_eq!(sim.run(3), 3);
}
