//! Declarative configuration for a single animated subtree and for groups.
//!
//! Configuration is caller-validated: `validate` rejects structurally broken
//! input (non-finite or negative timings), while soft misconfiguration
//! (out-of-range intensity, unknown names at the serde boundary) degrades
//! silently per the resilience contract.

use crate::{
    anchor::AnchorPoint,
    ease::Ease,
    effect::EffectKind,
    engine::SpringConfig,
    error::{PopinError, PopinResult},
    stagger::StaggerDirection,
};

/// Loop policy for the enter animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "LoopRepr", into = "LoopRepr")]
pub enum LoopSpec {
    #[default]
    Off,
    Infinite,
    Count(u32),
}

impl LoopSpec {
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Whether another iteration should run after `done` finished iterations.
    pub fn wants_another(self, done: u32) -> bool {
        match self {
            Self::Off => false,
            Self::Infinite => true,
            Self::Count(n) => done < n,
        }
    }
}

/// Wire shape: `true`/`false` or an integer count.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum LoopRepr {
    Flag(bool),
    Count(u32),
}

impl From<LoopRepr> for LoopSpec {
    fn from(repr: LoopRepr) -> Self {
        match repr {
            LoopRepr::Flag(false) | LoopRepr::Count(0) => Self::Off,
            LoopRepr::Flag(true) => Self::Infinite,
            LoopRepr::Count(n) => Self::Count(n),
        }
    }
}

impl From<LoopSpec> for LoopRepr {
    fn from(spec: LoopSpec) -> Self {
        match spec {
            LoopSpec::Off => Self::Flag(false),
            LoopSpec::Infinite => Self::Flag(true),
            LoopSpec::Count(n) => Self::Count(n),
        }
    }
}

/// Per-subtree animation configuration, immutable per render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    pub effect: EffectKind,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Ease,
    /// Reserve layout space immediately instead of growing height from zero.
    pub skeleton: bool,
    /// Initial visibility at mount; later changes arrive via `set_visible`.
    pub visible: bool,
    pub animate_on_mount: bool,
    #[serde(rename = "loop")]
    pub loop_spec: LoopSpec,
    pub loop_delay_ms: f64,
    pub respect_reduce_motion: bool,
    pub exit_effect: Option<EffectKind>,
    pub exit_duration_ms: Option<f64>,
    pub exit_easing: Option<Ease>,
    pub exit_delay_ms: Option<f64>,
    /// Custom starting values. An override always wins over the effect table
    /// and is exempt from intensity scaling and the reverse sign-flip.
    pub initial_opacity: Option<f64>,
    pub initial_scale: Option<f64>,
    pub initial_rotate: Option<f64>,
    pub initial_translate_x: Option<f64>,
    pub initial_translate_y: Option<f64>,
    pub reverse: bool,
    /// Intended domain [0,1]; anything else is clamped, never rejected.
    pub intensity: f64,
    pub anchor_point: AnchorPoint,
    pub use_spring: bool,
    pub spring: SpringConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            effect: EffectKind::default(),
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: Ease::default(),
            skeleton: true,
            visible: true,
            animate_on_mount: true,
            loop_spec: LoopSpec::Off,
            loop_delay_ms: 0.0,
            respect_reduce_motion: true,
            exit_effect: None,
            exit_duration_ms: None,
            exit_easing: None,
            exit_delay_ms: None,
            initial_opacity: None,
            initial_scale: None,
            initial_rotate: None,
            initial_translate_x: None,
            initial_translate_y: None,
            reverse: false,
            intensity: 1.0,
            anchor_point: AnchorPoint::Center,
            use_spring: false,
            spring: SpringConfig::default(),
        }
    }
}

/// Direction-resolved view of a config: exit fields fall back to their enter
/// counterparts when unset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub effect: EffectKind,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Ease,
}

impl AnimationConfig {
    pub fn from_json(s: &str) -> PopinResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PopinError::validation(format!("invalid animation config: {e}")))
    }

    /// Intensity clamped to [0,1]. A non-finite intensity is ignored and
    /// treated as full intensity.
    pub fn effective_intensity(&self) -> f64 {
        if self.intensity.is_finite() {
            self.intensity.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn resolved(&self, to_visible: bool) -> ResolvedConfig {
        if to_visible {
            ResolvedConfig {
                effect: self.effect,
                duration_ms: self.duration_ms,
                delay_ms: self.delay_ms,
                easing: self.easing,
            }
        } else {
            ResolvedConfig {
                effect: self.exit_effect.unwrap_or(self.effect),
                duration_ms: self.exit_duration_ms.unwrap_or(self.duration_ms),
                delay_ms: self.exit_delay_ms.unwrap_or(self.delay_ms),
                easing: self.exit_easing.unwrap_or(self.easing),
            }
        }
    }

    pub fn validate(&self) -> PopinResult<()> {
        for (name, value) in [
            ("durationMs", self.duration_ms),
            ("delayMs", self.delay_ms),
            ("loopDelayMs", self.loop_delay_ms),
        ] {
            check_timing(name, value)?;
        }
        for (name, value) in [
            ("exitDurationMs", self.exit_duration_ms),
            ("exitDelayMs", self.exit_delay_ms),
        ] {
            if let Some(v) = value {
                check_timing(name, v)?;
            }
        }
        for (name, value) in [
            ("initialOpacity", self.initial_opacity),
            ("initialScale", self.initial_scale),
            ("initialRotate", self.initial_rotate),
            ("initialTranslateX", self.initial_translate_x),
            ("initialTranslateY", self.initial_translate_y),
        ] {
            if let Some(v) = value
                && !v.is_finite()
            {
                return Err(PopinError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }
}

fn check_timing(name: &str, value: f64) -> PopinResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PopinError::validation(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Group-level configuration: stagger planning plus layout hints carried for
/// the host adapter.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupConfig {
    pub stagger_delay_ms: f64,
    pub initial_delay_ms: f64,
    pub stagger_direction: StaggerDirection,
    pub exit_stagger_delay_ms: f64,
    pub exit_stagger_direction: StaggerDirection,
    pub horizontal: bool,
    pub gap: f64,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            stagger_delay_ms: 100.0,
            initial_delay_ms: 0.0,
            stagger_direction: StaggerDirection::Forward,
            // Conceptually last-mounted exits first.
            exit_stagger_direction: StaggerDirection::Reverse,
            exit_stagger_delay_ms: 0.0,
            horizontal: false,
            gap: 0.0,
        }
    }
}

impl GroupConfig {
    pub fn validate(&self) -> PopinResult<()> {
        for (name, value) in [
            ("staggerDelayMs", self.stagger_delay_ms),
            ("initialDelayMs", self.initial_delay_ms),
            ("exitStaggerDelayMs", self.exit_stagger_delay_ms),
        ] {
            check_timing(name, value)?;
        }
        Ok(())
    }
}
