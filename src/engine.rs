//! The seam between the pure animation core and the host UI runtime.
//!
//! The director compiles a requested transition into a backend-agnostic
//! [`RunPlan`] and hands it to an [`AnimationEngine`] implementation. The
//! host delivers completion and timer events back by calling the director's
//! `notify_*` methods with the tokens it was given.

use crate::ease::Curve;

/// One independently animatable numeric property of an animated subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    Opacity,
    Scale,
    Rotation,
    TranslateX,
    TranslateY,
    Height,
}

/// Spring driver parameters, passed through to the host's spring primitive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub speed: f64,
    pub bounciness: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 40.0,
            friction: 7.0,
            speed: 12.0,
            bounciness: 8.0,
        }
    }
}

/// How a channel track is executed by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Driver {
    Timing,
    Spring(SpringConfig),
}

/// One channel's contribution to a composed run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelTrack {
    pub channel: Channel,
    /// Snap the channel here before the run starts (loop re-arm).
    pub reset_to: Option<f64>,
    pub to: f64,
    pub duration_ms: f64,
    pub curve: Curve,
    pub driver: Driver,
    /// Whether the host may execute this track off the layout thread.
    pub accelerated: bool,
}

/// A composed animation: an optional leading delay followed by all tracks
/// running in parallel. The delay completes strictly before any track starts.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunPlan {
    pub pre_delay_ms: f64,
    pub tracks: Vec<ChannelTrack>,
}

impl RunPlan {
    pub fn track(&self, channel: Channel) -> Option<&ChannelTrack> {
        self.tracks.iter().find(|t| t.channel == channel)
    }

    pub fn has_channel(&self, channel: Channel) -> bool {
        self.track(channel).is_some()
    }
}

/// Handle to an in-flight composed run. Opaque to the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunToken(pub u64);

/// Handle to a pending cancellable timer. Opaque to the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Host animation runtime. One instance per animated subtree; the core never
/// shares an engine across subtrees.
///
/// `stop` and `cancel_timer` must be safe to call on already-finished work
/// (the core calls them unconditionally during cleanup).
pub trait AnimationEngine {
    /// Snap a channel scalar to a value without animating.
    fn set_channel(&mut self, channel: Channel, value: f64);

    /// Start a composed run. The host must eventually report completion with
    /// `finished = true` (ran to the end) or `false` (stopped early).
    fn run(&mut self, plan: RunPlan) -> RunToken;

    /// Best-effort cancel of an in-flight run.
    fn stop(&mut self, token: RunToken);

    /// Schedule a cancellable timer.
    fn schedule(&mut self, delay_ms: f64) -> TimerToken;

    fn cancel_timer(&mut self, token: TimerToken);
}

/// Read-only reduced-motion capability, injected so the core is testable
/// without a platform stub.
pub trait MotionPreference {
    fn reduced_motion(&self) -> bool;
}

/// A constant preference, for hosts without a platform setting and for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedMotionPreference(pub bool);

impl MotionPreference for FixedMotionPreference {
    fn reduced_motion(&self) -> bool {
        self.0
    }
}
