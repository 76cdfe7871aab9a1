//! Fan-out of one animation config over a list of children, with per-child
//! stagger delays and aggregated lifecycle events.

use crate::{
    config::{AnimationConfig, GroupConfig},
    director::PopEvent,
    engine::{AnimationEngine, MotionPreference, RunToken, TimerToken},
    pop::SinglePop,
    stagger::{child_delay, exit_child_delay},
};

/// Group-level lifecycle notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupEvent {
    /// Fired once per visibility toggle, from child index 0's start only.
    Started,
    /// Fired once all children reported enter completion.
    EnterComplete,
    /// Fired once all children reported exit completion.
    ExitComplete,
}

/// Renders one [`SinglePop`] per child with time-staggered delays and
/// aggregates their events (first-to-start via child 0, all-to-complete).
pub struct PopGroup<E: AnimationEngine> {
    children: Vec<SinglePop<E>>,
    group: GroupConfig,
    visible: bool,
    started: bool,
    enter_completed: usize,
    exit_completed: usize,
}

impl<E: AnimationEngine> PopGroup<E> {
    /// Build the group from one shared config and one engine per child.
    /// Each child's enter and exit delays are derived from its index via the
    /// stagger planner; everything else is the shared config.
    pub fn new(
        config: AnimationConfig,
        group: GroupConfig,
        engines: Vec<E>,
        mut motion: impl FnMut() -> Box<dyn MotionPreference>,
    ) -> Self {
        let count = engines.len();
        let visible = config.visible;
        let exit_offset = config.exit_delay_ms.unwrap_or(0.0);
        let children = engines
            .into_iter()
            .enumerate()
            .map(|(index, engine)| {
                let child_config = AnimationConfig {
                    delay_ms: child_delay(
                        index,
                        count,
                        group.stagger_delay_ms,
                        group.initial_delay_ms,
                        group.stagger_direction,
                    ),
                    exit_delay_ms: Some(exit_child_delay(
                        index,
                        count,
                        group.exit_stagger_delay_ms,
                        exit_offset,
                        group.exit_stagger_direction,
                    )),
                    ..config.clone()
                };
                SinglePop::new(engine, child_config, motion())
            })
            .collect();

        Self {
            children,
            group,
            visible,
            started: false,
            enter_completed: 0,
            exit_completed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn group_config(&self) -> &GroupConfig {
        &self.group
    }

    pub fn child(&self, index: usize) -> Option<&SinglePop<E>> {
        self.children.get(index)
    }

    pub fn mount(&mut self) -> Vec<GroupEvent> {
        let mut out = Vec::new();
        for index in 0..self.children.len() {
            let events = self.children[index].mount();
            out.extend(self.absorb(index, &events));
        }
        out
    }

    /// Toggle the whole group. Aggregation state re-arms on every actual
    /// transition so repeated toggles report again.
    pub fn set_visible(&mut self, visible: bool) -> Vec<GroupEvent> {
        if visible == self.visible {
            return Vec::new();
        }
        self.visible = visible;
        self.started = false;
        self.enter_completed = 0;
        self.exit_completed = 0;

        let mut out = Vec::new();
        for index in 0..self.children.len() {
            let events = self.children[index].set_visible(visible);
            out.extend(self.absorb(index, &events));
        }
        out
    }

    pub fn notify_child_run_done(
        &mut self,
        index: usize,
        token: RunToken,
        finished: bool,
    ) -> Vec<GroupEvent> {
        let Some(child) = self.children.get_mut(index) else {
            return Vec::new();
        };
        let events = child.notify_run_done(token, finished);
        self.absorb(index, &events)
    }

    pub fn notify_child_timer(&mut self, index: usize, token: TimerToken) -> Vec<GroupEvent> {
        let Some(child) = self.children.get_mut(index) else {
            return Vec::new();
        };
        let events = child.notify_timer(token);
        self.absorb(index, &events)
    }

    pub fn notify_child_layout(&mut self, index: usize, height: f64) {
        if let Some(child) = self.children.get_mut(index) {
            child.on_layout(height);
        }
    }

    pub fn unmount(&mut self) {
        for child in &mut self.children {
            child.unmount();
        }
    }

    fn absorb(&mut self, index: usize, events: &[PopEvent]) -> Vec<GroupEvent> {
        let mut out = Vec::new();
        for event in events {
            match event {
                // Child 0 is privileged: only its start arms the group.
                PopEvent::Started => {
                    if index == 0 && !self.started {
                        self.started = true;
                        out.push(GroupEvent::Started);
                    }
                }
                PopEvent::EnterComplete => {
                    self.enter_completed += 1;
                    if self.enter_completed == self.children.len() {
                        out.push(GroupEvent::EnterComplete);
                    }
                }
                PopEvent::ExitComplete => {
                    self.exit_completed += 1;
                    if self.exit_completed == self.children.len() {
                        out.push(GroupEvent::ExitComplete);
                    }
                }
            }
        }
        out
    }
}
