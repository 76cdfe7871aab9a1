mod support;

use popin::{
    AnimationConfig, FixedMotionPreference, GroupConfig, GroupEvent, MotionPreference, PopGroup,
    StaggerDirection,
};
use support::{MockEngine, SharedState};

fn motion() -> Box<dyn MotionPreference> {
    Box::new(FixedMotionPreference(false))
}

fn group(
    config: AnimationConfig,
    group_config: GroupConfig,
    count: usize,
) -> (PopGroup<MockEngine>, Vec<SharedState>) {
    let mut states = Vec::new();
    let engines = (0..count)
        .map(|_| {
            let (engine, state) = MockEngine::new();
            states.push(state);
            engine
        })
        .collect();
    (PopGroup::new(config, group_config, engines, motion), states)
}

#[test]
fn edges_direction_delays_match_the_plan() {
    let (mut group, states) = group(
        AnimationConfig::default(),
        GroupConfig {
            stagger_delay_ms: 10.0,
            initial_delay_ms: 0.0,
            stagger_direction: StaggerDirection::Edges,
            ..GroupConfig::default()
        },
        5,
    );

    group.mount();
    let delays: Vec<f64> = states
        .iter()
        .map(|s| s.borrow().last_run().1.pre_delay_ms)
        .collect();
    assert_eq!(delays, vec![0.0, 10.0, 20.0, 10.0, 0.0]);
}

#[test]
fn forward_direction_with_initial_delay() {
    let (mut group, states) = group(
        AnimationConfig::default(),
        GroupConfig {
            stagger_delay_ms: 50.0,
            initial_delay_ms: 25.0,
            ..GroupConfig::default()
        },
        3,
    );

    group.mount();
    let delays: Vec<f64> = states
        .iter()
        .map(|s| s.borrow().last_run().1.pre_delay_ms)
        .collect();
    assert_eq!(delays, vec![25.0, 75.0, 125.0]);
}

#[test]
fn group_starts_once_from_child_zero() {
    let (mut group, _states) = group(AnimationConfig::default(), GroupConfig::default(), 4);
    let events = group.mount();
    assert_eq!(events, vec![GroupEvent::Started]);
}

#[test]
fn group_completes_when_every_child_finishes() {
    let (mut group, states) = group(AnimationConfig::default(), GroupConfig::default(), 3);
    group.mount();

    for (index, state) in states.iter().enumerate().take(2) {
        let (token, _) = state.borrow().last_run();
        let events = group.notify_child_run_done(index, token, true);
        assert!(events.is_empty(), "child {index} completed the group early");
    }

    let (token, _) = states[2].borrow().last_run();
    let events = group.notify_child_run_done(2, token, true);
    assert_eq!(events, vec![GroupEvent::EnterComplete]);
}

#[test]
fn completion_order_is_irrelevant() {
    let (mut group, states) = group(AnimationConfig::default(), GroupConfig::default(), 3);
    group.mount();

    for index in [2, 0, 1] {
        let (token, _) = states[index].borrow().last_run();
        let events = group.notify_child_run_done(index, token, true);
        if index == 1 {
            assert_eq!(events, vec![GroupEvent::EnterComplete]);
        } else {
            assert!(events.is_empty());
        }
    }
}

#[test]
fn cancelled_child_blocks_the_aggregate() {
    let (mut group, states) = group(AnimationConfig::default(), GroupConfig::default(), 2);
    group.mount();

    let (token, _) = states[0].borrow().last_run();
    assert!(group.notify_child_run_done(0, token, false).is_empty());

    let (token, _) = states[1].borrow().last_run();
    // The stopped child never reported, so the group must not complete.
    assert!(group.notify_child_run_done(1, token, true).is_empty());
}

#[test]
fn toggling_rearms_the_aggregate_callbacks() {
    let (mut group, states) = group(AnimationConfig::default(), GroupConfig::default(), 2);
    group.mount();
    for (index, state) in states.iter().enumerate() {
        let (token, _) = state.borrow().last_run();
        group.notify_child_run_done(index, token, true);
    }

    // Exit, all children finish: symmetric exit completion.
    assert!(group.set_visible(false).is_empty());
    for (index, state) in states.iter().enumerate() {
        let (token, _) = state.borrow().last_run();
        let events = group.notify_child_run_done(index, token, true);
        if index == 1 {
            assert_eq!(events, vec![GroupEvent::ExitComplete]);
        } else {
            assert!(events.is_empty());
        }
    }

    // Re-enter: started and completed fire again.
    let events = group.set_visible(true);
    assert_eq!(events, vec![GroupEvent::Started]);
    for (index, state) in states.iter().enumerate() {
        let (token, _) = state.borrow().last_run();
        let events = group.notify_child_run_done(index, token, true);
        if index == 1 {
            assert_eq!(events, vec![GroupEvent::EnterComplete]);
        } else {
            assert!(events.is_empty());
        }
    }
}

#[test]
fn zero_exit_interval_gives_every_child_the_flat_exit_delay() {
    let (mut group, states) = group(
        AnimationConfig {
            exit_delay_ms: Some(40.0),
            ..AnimationConfig::default()
        },
        GroupConfig {
            exit_stagger_delay_ms: 0.0,
            ..GroupConfig::default()
        },
        3,
    );
    group.mount();
    group.set_visible(false);

    for state in &states {
        let (_, plan) = state.borrow().last_run();
        assert_eq!(plan.pre_delay_ms, 40.0);
    }
}

#[test]
fn exit_stagger_defaults_to_reverse() {
    let (mut group, states) = group(
        AnimationConfig::default(),
        GroupConfig {
            exit_stagger_delay_ms: 10.0,
            ..GroupConfig::default()
        },
        3,
    );
    group.mount();
    group.set_visible(false);

    let delays: Vec<f64> = states
        .iter()
        .map(|s| s.borrow().last_run().1.pre_delay_ms)
        .collect();
    assert_eq!(delays, vec![20.0, 10.0, 0.0]);
}

#[test]
fn repeated_visibility_is_a_group_noop() {
    let (mut group, states) = group(AnimationConfig::default(), GroupConfig::default(), 2);
    group.mount();
    let runs: Vec<usize> = states.iter().map(|s| s.borrow().run_count()).collect();

    assert!(group.set_visible(true).is_empty());
    let after: Vec<usize> = states.iter().map(|s| s.borrow().run_count()).collect();
    assert_eq!(runs, after);
}
