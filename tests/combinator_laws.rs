//! Property-based tests for the combinator laws

use proptest::prelude::*;
use rpush::config::BuildConfig;
use rpush::prelude::*;

fn chain_of_depth(cx: &mut Elaborator, depth: usize, probe: Probe<u32>) -> BoxedRPush<'static, u32> {
    let mut chain = probe.boxed();
    for _ in 0..depth {
        chain = cx.build(buffer(chain)).boxed();
    }
    chain
}

/// Push `values` one per cycle, then run `drain` idle cycles.
fn drive<C: RPush<u32>>(sim: &mut Simulator<C>, values: &[u32], drain: u64) {
    for &value in values {
        sim.step_with(|chain| chain.push(value));
    }
    sim.run(drain);
}

proptest! {
    #[test]
    fn prop_apply_identity_is_transparent(values in prop::collection::vec(any::<i64>(), 0..50)) {
        let clock = Clock::new();
        let direct = Probe::new(&clock);
        let mapped = Probe::new(&clock);
        let mut via_direct = direct.clone();
        let mut via_apply = apply(|x: i64| x, mapped.clone());

        for value in values {
            via_direct.push(value);
            via_apply.push(value);
        }

        prop_assert_eq!(direct.observations(), mapped.observations());
    }

    #[test]
    fn prop_apply_composes(
        values in prop::collection::vec(any::<i32>(), 0..50),
        k in any::<i32>(),
    ) {
        let clock = Clock::new();
        let nested = Probe::new(&clock);
        let composed = Probe::new(&clock);
        let f = |x: i32| x.wrapping_mul(3);
        let g = move |x: i32| x.wrapping_add(k);

        let mut lhs = apply(f, apply(g, nested.clone()));
        let mut rhs = apply(move |x| g(f(x)), composed.clone());

        for value in values {
            lhs.push(value);
            rhs.push(value);
        }

        prop_assert_eq!(nested.values(), composed.values());
    }

    #[test]
    fn prop_tee_observes_once_and_forwards_unchanged(
        values in prop::collection::vec(any::<u8>(), 0..50),
    ) {
        let probe = Probe::new(&Clock::new());
        let mut observed = Vec::new();
        {
            let mut chain = tee(|x: &u8| observed.push(*x), probe.clone());
            for &value in &values {
                chain.push(value);
            }
        }

        prop_assert_eq!(&observed, &values);
        prop_assert_eq!(probe.values(), values);
    }

    #[test]
    fn prop_buffer_forwards_exactly_one_cycle_later(
        schedule in prop::collection::vec(prop::option::of(any::<u16>()), 0..40),
    ) {
        let clock = Clock::new();
        let probe = Probe::new(&clock);
        let mut sim = Simulator::with_clock(clock, elaborate(buffer(probe.clone())));

        for slot in &schedule {
            sim.step_with(|chain| {
                if let Some(value) = *slot {
                    chain.push(value);
                }
            });
        }
        sim.step();

        let expected: Vec<(u64, u16)> = schedule
            .iter()
            .enumerate()
            .filter_map(|(cycle, slot)| slot.map(|v| (cycle as u64 + 1, v)))
            .collect();
        prop_assert_eq!(probe.pairs(), expected);
    }

    #[test]
    fn prop_clear_resets_chain_of_any_depth(
        depth in 1usize..6,
        before in prop::collection::vec(any::<u32>(), 1..6),
        after in prop::collection::vec(any::<u32>(), 0..10),
    ) {
        let config = BuildConfig::new().with_fifo_depth(2);

        // used chain: fill, clear, then replay `after`
        let used_clock = Clock::new();
        let used = Probe::new(&used_clock);
        let mut cx = Elaborator::with_config(config.clone()).unwrap();
        let mut used_sim =
            Simulator::with_clock(used_clock, chain_of_depth(&mut cx, depth, used.clone()));
        for &value in before.iter().take(depth) {
            used_sim.step_with(|chain| chain.push(value));
        }
        used_sim.step_with(|chain| chain.clear());
        let restart = used_sim.cycle();
        used.take();
        drive(&mut used_sim, &after, depth as u64);

        // fresh chain: replay `after` only
        let fresh_clock = Clock::new();
        let fresh = Probe::new(&fresh_clock);
        let mut cx = Elaborator::with_config(config).unwrap();
        let mut fresh_sim =
            Simulator::with_clock(fresh_clock, chain_of_depth(&mut cx, depth, fresh.clone()));
        drive(&mut fresh_sim, &after, depth as u64);

        let replayed: Vec<(u64, u32)> = used
            .pairs()
            .into_iter()
            .map(|(cycle, value)| (cycle - restart, value))
            .collect();
        prop_assert_eq!(replayed, fresh.pairs());
        prop_assert_eq!(fresh.len(), after.len());
    }

    #[test]
    fn prop_sink_absorbs_everything(ops in prop::collection::vec(prop::option::of(any::<i64>()), 0..50)) {
        let mut sim = Simulator::new(elaborate(sink()));

        for op in ops {
            let report = sim.step_with(|s| match op {
                Some(value) => RPush::<i64>::push(s, value),
                None => RPush::<i64>::clear(s),
            });
            prop_assert_eq!(report.fired, 0);
            prop_assert!(RPush::<i64>::ready(sim.top()));
        }
    }
}
