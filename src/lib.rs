//! Popin is the animation core of a declarative pop-in/pop-out component.
//!
//! Given a configuration (effect preset, duration, easing, intensity, anchor,
//! loop policy), the crate derives exact interpolation targets, per-child
//! stagger delays, and the state progression of a play-through, then drives a
//! host-provided [`AnimationEngine`] to execute it.
//!
//! # Architecture
//!
//! 1. **Tables**: [`EffectKind`] and [`AnchorPoint`] map names to base
//!    targets, capability flags, and pivot offsets.
//! 2. **Derive**: [`plan_run`] compiles a config + direction into a
//!    backend-agnostic [`RunPlan`].
//! 3. **Drive**: [`AnimationDirector`] owns the run/loop state machine;
//!    [`SinglePop`] adds mount/measurement semantics and [`PopGroup`] fans a
//!    config out over staggered children.
//!
//! The host adapter implements [`AnimationEngine`] and feeds completion and
//! timer events back through the `notify_*` methods.
#![forbid(unsafe_code)]

pub mod anchor;
pub mod config;
pub mod director;
pub mod ease;
pub mod effect;
pub mod engine;
pub mod error;
pub mod group;
pub mod pop;
pub mod stagger;
pub mod transform;

pub use anchor::{AnchorOffset, AnchorPoint};
pub use config::{AnimationConfig, GroupConfig, LoopSpec, ResolvedConfig};
pub use director::{AnimationDirector, HiddenTargets, PopEvent, RESTING, hidden_targets, plan_run};
pub use ease::{Curve, Ease};
pub use effect::{BaseTargets, EffectFlags, EffectKind};
pub use engine::{
    AnimationEngine, Channel, ChannelTrack, Driver, FixedMotionPreference, MotionPreference,
    RunPlan, RunToken, SpringConfig, TimerToken,
};
pub use error::{PopinError, PopinResult};
pub use group::{GroupEvent, PopGroup};
pub use pop::{RenderMode, SinglePop};
pub use stagger::{StaggerDirection, child_delay, exit_child_delay};
pub use transform::{FALLBACK_REFERENCE_SIZE, TransformOp, transform_ops};
