//! Deterministic mock of the host animation engine. Records every plan,
//! snap, and timer so tests can drive completions by hand.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use popin::{AnimationEngine, Channel, RunPlan, RunToken, TimerToken};

pub type SharedState = Rc<RefCell<MockState>>;

#[derive(Default)]
pub struct MockState {
    next_token: u64,
    pub runs: Vec<(RunToken, RunPlan)>,
    pub active_runs: Vec<RunToken>,
    pub stopped_runs: Vec<RunToken>,
    pub timers: Vec<(TimerToken, f64)>,
    pub active_timers: Vec<TimerToken>,
    pub cancelled_timers: Vec<TimerToken>,
    pub channel_values: BTreeMap<&'static str, f64>,
}

impl MockState {
    pub fn last_run(&self) -> (RunToken, RunPlan) {
        self.runs.last().cloned().expect("no run started")
    }

    pub fn last_timer(&self) -> (TimerToken, f64) {
        *self.timers.last().expect("no timer scheduled")
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub fn channel(&self, channel: Channel) -> Option<f64> {
        self.channel_values.get(channel_key(channel)).copied()
    }
}

fn channel_key(channel: Channel) -> &'static str {
    match channel {
        Channel::Opacity => "opacity",
        Channel::Scale => "scale",
        Channel::Rotation => "rotation",
        Channel::TranslateX => "translateX",
        Channel::TranslateY => "translateY",
        Channel::Height => "height",
    }
}

/// Engine handle given to the crate; the shared state stays with the test.
pub struct MockEngine {
    state: Rc<RefCell<MockState>>,
}

impl MockEngine {
    pub fn new() -> (Self, Rc<RefCell<MockState>>) {
        let state = Rc::new(RefCell::new(MockState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl AnimationEngine for MockEngine {
    fn set_channel(&mut self, channel: Channel, value: f64) {
        self.state
            .borrow_mut()
            .channel_values
            .insert(channel_key(channel), value);
    }

    fn run(&mut self, plan: RunPlan) -> RunToken {
        let mut state = self.state.borrow_mut();
        state.next_token += 1;
        let token = RunToken(state.next_token);
        state.runs.push((token, plan));
        state.active_runs.push(token);
        token
    }

    fn stop(&mut self, token: RunToken) {
        let mut state = self.state.borrow_mut();
        state.active_runs.retain(|t| *t != token);
        state.stopped_runs.push(token);
    }

    fn schedule(&mut self, delay_ms: f64) -> TimerToken {
        let mut state = self.state.borrow_mut();
        state.next_token += 1;
        let token = TimerToken(state.next_token);
        state.timers.push((token, delay_ms));
        state.active_timers.push(token);
        token
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        let mut state = self.state.borrow_mut();
        state.active_timers.retain(|t| *t != token);
        state.cancelled_timers.push(token);
    }
}
