//! The per-subtree animation director: computes channel targets for a
//! requested direction, compiles them into a [`RunPlan`], and drives the
//! host engine through enter/exit/loop play-throughs.
//!
//! The derivation half (`hidden_targets`, `plan_run`) is pure; the
//! [`AnimationDirector`] adds the run/loop state machine on top: one run
//! slot, one timer slot, explicit cancellation.

use crate::{
    config::{AnimationConfig, ResolvedConfig},
    effect::EffectKind,
    engine::{
        AnimationEngine, Channel, ChannelTrack, Driver, MotionPreference, RunPlan, RunToken,
        TimerToken,
    },
    transform::{TransformOp, transform_ops},
};

/// Starting values for every channel in the hidden state. The element
/// animates from these on enter and back to them on exit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HiddenTargets {
    pub opacity: f64,
    pub scale: f64,
    pub rotation: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

/// The resting (fully visible) state, identical for every effect.
pub const RESTING: HiddenTargets = HiddenTargets {
    opacity: 1.0,
    scale: 1.0,
    rotation: 0.0,
    translate_x: 0.0,
    translate_y: 0.0,
};

/// Effective hidden-state targets for one effect under a config.
///
/// A custom override always wins and is exempt from intensity scaling and
/// the reverse sign-flip. Otherwise rotation/translation scale linearly with
/// intensity, and scale interpolates toward 1 as intensity drops (intensity
/// 0 leaves no visible starting offset at all).
pub fn hidden_targets(config: &AnimationConfig, effect: EffectKind) -> HiddenTargets {
    let base = effect.base_targets(config.reverse);
    let k = config.effective_intensity();
    HiddenTargets {
        opacity: config.initial_opacity.unwrap_or(0.0),
        scale: config
            .initial_scale
            .unwrap_or(1.0 - (1.0 - base.scale) * k),
        rotation: config.initial_rotate.unwrap_or(base.rotate_deg * k),
        translate_x: config.initial_translate_x.unwrap_or(base.translate_x * k),
        translate_y: config.initial_translate_y.unwrap_or(base.translate_y * k),
    }
}

/// Compile one play-through into a backend-agnostic plan.
///
/// `reset_to_hidden` snaps every participating channel back to its hidden
/// target before the run starts (loop re-arm). `reduced_motion` forces the
/// resolved duration to zero for this invocation only.
pub fn plan_run(
    config: &AnimationConfig,
    to_visible: bool,
    measured_height: Option<f64>,
    reduced_motion: bool,
    reset_to_hidden: bool,
) -> RunPlan {
    let resolved: ResolvedConfig = config.resolved(to_visible);
    let duration_ms = if reduced_motion { 0.0 } else { resolved.duration_ms };
    let effect = resolved.effect;
    let flags = effect.flags();
    let hidden = hidden_targets(config, effect);
    let base_curve = resolved.easing.curve();
    // Height is not an accelerable transform; height-reservation mode forces
    // the whole subtree onto the non-accelerated path, whether or not the
    // height is measured yet.
    let accelerated = config.skeleton;

    let mut tracks = Vec::new();
    let mut push = |channel: Channel, hidden_value: f64, resting_value: f64| {
        let curve_override = effect.channel_curve(channel);
        let driver = if config.use_spring
            && curve_override.is_none()
            && !matches!(channel, Channel::Opacity | Channel::Height)
        {
            Driver::Spring(config.spring)
        } else {
            Driver::Timing
        };
        tracks.push(ChannelTrack {
            channel,
            reset_to: reset_to_hidden.then_some(hidden_value),
            to: if to_visible { resting_value } else { hidden_value },
            duration_ms,
            curve: curve_override.unwrap_or(base_curve),
            driver,
            accelerated,
        });
    };

    // Opacity always animates, regardless of effect.
    push(Channel::Opacity, hidden.opacity, RESTING.opacity);
    if flags.has_scale {
        push(Channel::Scale, hidden.scale, RESTING.scale);
    }
    if flags.has_rotate || flags.has_flip {
        push(Channel::Rotation, hidden.rotation, RESTING.rotation);
    }
    if flags.has_translate_x {
        push(Channel::TranslateX, hidden.translate_x, RESTING.translate_x);
    }
    if flags.has_translate_y {
        push(Channel::TranslateY, hidden.translate_y, RESTING.translate_y);
    }
    if !config.skeleton
        && let Some(h) = measured_height
    {
        tracks.push(ChannelTrack {
            channel: Channel::Height,
            reset_to: reset_to_hidden.then_some(0.0),
            to: if to_visible { h } else { 0.0 },
            duration_ms,
            curve: base_curve,
            driver: Driver::Timing,
            accelerated: false,
        });
    }

    RunPlan {
        pre_delay_ms: resolved.delay_ms,
        tracks,
    }
}

/// Lifecycle notification produced by the director for its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopEvent {
    /// An enter play-through began (once per `animate(true)` call series,
    /// not per loop iteration).
    Started,
    /// The enter direction ran to completion (after the final loop
    /// iteration, when looping).
    EnterComplete,
    /// The exit direction ran to completion.
    ExitComplete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Entering { looping: bool },
    LoopDelayWait,
    Exiting,
}

/// Drives one animated subtree. Owns its engine and channel state
/// exclusively; never shared across subtrees.
pub struct AnimationDirector<E: AnimationEngine> {
    engine: E,
    motion: Box<dyn MotionPreference>,
    config: AnimationConfig,
    measured_height: Option<f64>,
    phase: Phase,
    run: Option<RunToken>,
    timer: Option<TimerToken>,
    loops_done: u32,
    detached: bool,
}

impl<E: AnimationEngine> AnimationDirector<E> {
    pub fn new(mut engine: E, config: AnimationConfig, motion: Box<dyn MotionPreference>) -> Self {
        // Prime channels so the first frame shows the correct state: resting
        // when starting visible without a mount animation, hidden otherwise.
        let start_hidden = !config.visible || config.animate_on_mount;
        let values = if start_hidden {
            hidden_targets(&config, config.effect)
        } else {
            RESTING
        };
        engine.set_channel(Channel::Opacity, values.opacity);
        engine.set_channel(Channel::Scale, values.scale);
        engine.set_channel(Channel::Rotation, values.rotation);
        engine.set_channel(Channel::TranslateX, values.translate_x);
        engine.set_channel(Channel::TranslateY, values.translate_y);

        Self {
            engine,
            motion,
            config,
            measured_height: None,
            phase: Phase::Idle,
            run: None,
            timer: None,
            loops_done: 0,
            detached: false,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Replace the configuration for subsequent play-throughs. In-flight work
    /// is cancelled so stale targets never land.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.cancel_in_flight();
        self.config = config;
    }

    pub fn measured_height(&self) -> Option<f64> {
        self.measured_height
    }

    /// Latch the measured height. Set at most once per mount cycle; later
    /// layout events are ignored until [`Self::remeasure`].
    pub fn set_measured_height(&mut self, height: f64) {
        if self.measured_height.is_some() || !height.is_finite() || height < 0.0 {
            return;
        }
        self.measured_height = Some(height);
    }

    pub fn remeasure(&mut self) {
        self.measured_height = None;
    }

    pub fn is_animating(&self) -> bool {
        self.run.is_some() || self.timer.is_some()
    }

    /// Transform list for the host style adapter under the current config
    /// and measurement.
    pub fn transforms(&self) -> Vec<TransformOp> {
        transform_ops(
            self.config.effect,
            self.config.anchor_point,
            self.measured_height,
        )
    }

    /// Start a play-through toward the requested direction. Any in-flight
    /// run or pending loop timer is cancelled first.
    #[tracing::instrument(skip(self))]
    pub fn animate(&mut self, to_visible: bool) -> Vec<PopEvent> {
        if self.detached {
            return Vec::new();
        }
        self.cancel_in_flight();

        let looping = to_visible && self.config.loop_spec.is_active();
        self.loops_done = 0;
        self.start_run(to_visible, looping);
        self.phase = if to_visible {
            Phase::Entering { looping }
        } else {
            Phase::Exiting
        };

        if to_visible {
            vec![PopEvent::Started]
        } else {
            Vec::new()
        }
    }

    /// Host delivery of a composed run's completion. `finished == false`
    /// (stopped early) never advances the loop counter, schedules a next
    /// iteration, or produces events.
    pub fn notify_run_done(&mut self, token: RunToken, finished: bool) -> Vec<PopEvent> {
        if self.detached || self.run != Some(token) {
            return Vec::new();
        }
        self.run = None;
        if !finished {
            self.phase = Phase::Idle;
            return Vec::new();
        }

        match self.phase {
            Phase::Exiting => {
                self.phase = Phase::Idle;
                vec![PopEvent::ExitComplete]
            }
            Phase::Entering { looping: false } => {
                self.phase = Phase::Idle;
                vec![PopEvent::EnterComplete]
            }
            Phase::Entering { looping: true } => {
                self.loops_done += 1;
                if self.config.loop_spec.wants_another(self.loops_done) {
                    if self.config.loop_delay_ms > 0.0 {
                        self.timer = Some(self.engine.schedule(self.config.loop_delay_ms));
                        self.phase = Phase::LoopDelayWait;
                    } else {
                        self.start_run(true, true);
                        self.phase = Phase::Entering { looping: true };
                    }
                    Vec::new()
                } else {
                    tracing::debug!(iterations = self.loops_done, "loop exhausted");
                    self.phase = Phase::Idle;
                    vec![PopEvent::EnterComplete]
                }
            }
            Phase::Idle | Phase::LoopDelayWait => Vec::new(),
        }
    }

    /// Host delivery of a timer expiry (inter-loop delay).
    pub fn notify_timer(&mut self, token: TimerToken) -> Vec<PopEvent> {
        if self.detached || self.timer != Some(token) {
            return Vec::new();
        }
        self.timer = None;
        if self.phase == Phase::LoopDelayWait {
            self.start_run(true, true);
            self.phase = Phase::Entering { looping: true };
        }
        Vec::new()
    }

    /// Stop everything and ignore all further notifications. Called on
    /// unmount; idempotent.
    pub fn detach(&mut self) {
        self.cancel_in_flight();
        self.detached = true;
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.run.take() {
            self.engine.stop(token);
        }
        if let Some(token) = self.timer.take() {
            self.engine.cancel_timer(token);
        }
        self.phase = Phase::Idle;
    }

    fn start_run(&mut self, to_visible: bool, reset_to_hidden: bool) {
        let reduced = self.config.respect_reduce_motion && self.motion.reduced_motion();
        let plan = plan_run(
            &self.config,
            to_visible,
            self.measured_height,
            reduced,
            reset_to_hidden,
        );
        self.run = Some(self.engine.run(plan));
    }
}
