//! The effect table: named presets mapping to base starting values,
//! capability flags, and per-channel easing overrides.
//!
//! Base targets are the values an element animates *from* on enter and *to*
//! on exit. The resting state is always opacity 1, scale 1, rotation 0,
//! translation 0.

use crate::{ease::Curve, engine::Channel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectKind {
    Scale,
    Rotate,
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Bounce,
    Flip,
    Zoom,
    RotateScale,
    Shake,
    Pulse,
    Swing,
    Wobble,
    Elastic,
}

impl Default for EffectKind {
    fn default() -> Self {
        Self::Fade
    }
}

// Deserialization goes through `parse` so unknown effect names in host
// configuration degrade to `Fade` instead of rejecting the whole config.
impl<'de> serde::Deserialize<'de> for EffectKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// Base starting values for one effect. `rotate_deg` feeds either the Z or Y
/// rotation transform depending on the effect's flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseTargets {
    pub scale: f64,
    pub rotate_deg: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

/// Which transform channels participate in an effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectFlags {
    pub has_scale: bool,
    pub has_rotate: bool,
    pub has_flip: bool,
    pub has_translate_x: bool,
    pub has_translate_y: bool,
}

impl EffectKind {
    /// Forgiving name lookup. Unknown names degrade to `Fade` (opacity-only,
    /// the safest preset) rather than failing, so forward-incompatible
    /// configuration stays playable.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "scale" => Self::Scale,
            "rotate" => Self::Rotate,
            "fade" => Self::Fade,
            "slideup" | "slide_up" | "slide-up" => Self::SlideUp,
            "slidedown" | "slide_down" | "slide-down" => Self::SlideDown,
            "slideleft" | "slide_left" | "slide-left" => Self::SlideLeft,
            "slideright" | "slide_right" | "slide-right" => Self::SlideRight,
            "bounce" => Self::Bounce,
            "flip" => Self::Flip,
            "zoom" => Self::Zoom,
            "rotatescale" | "rotate_scale" | "rotate-scale" => Self::RotateScale,
            "shake" => Self::Shake,
            "pulse" => Self::Pulse,
            "swing" => Self::Swing,
            "wobble" => Self::Wobble,
            "elastic" => Self::Elastic,
            other => {
                tracing::warn!(name = other, "unknown effect name, falling back to fade");
                Self::Fade
            }
        }
    }

    /// Base starting values. `reverse` negates rotation and translation,
    /// never scale.
    pub fn base_targets(self, reverse: bool) -> BaseTargets {
        let (scale, rotate_deg, translate_x, translate_y) = match self {
            Self::Scale => (0.0, 0.0, 0.0, 0.0),
            Self::Rotate => (1.0, -360.0, 0.0, 0.0),
            Self::Fade => (1.0, 0.0, 0.0, 0.0),
            Self::SlideUp => (1.0, 0.0, 0.0, 50.0),
            Self::SlideDown => (1.0, 0.0, 0.0, -50.0),
            Self::SlideLeft => (1.0, 0.0, 100.0, 0.0),
            Self::SlideRight => (1.0, 0.0, -100.0, 0.0),
            Self::Bounce => (0.3, 0.0, 0.0, 30.0),
            Self::Flip => (0.8, -180.0, 0.0, 0.0),
            Self::Zoom => (0.5, 0.0, 0.0, 0.0),
            Self::RotateScale => (0.0, -180.0, 0.0, 0.0),
            Self::Shake => (1.0, 0.0, -10.0, 0.0),
            Self::Pulse => (0.6, 0.0, 0.0, 0.0),
            Self::Swing => (1.0, -15.0, 0.0, 0.0),
            Self::Wobble => (1.0, -5.0, -25.0, 0.0),
            Self::Elastic => (0.0, 0.0, 0.0, 0.0),
        };
        let sign = if reverse { -1.0 } else { 1.0 };
        BaseTargets {
            scale,
            rotate_deg: rotate_deg * sign,
            translate_x: translate_x * sign,
            translate_y: translate_y * sign,
        }
    }

    pub fn flags(self) -> EffectFlags {
        EffectFlags {
            has_scale: matches!(
                self,
                Self::Scale
                    | Self::Bounce
                    | Self::Zoom
                    | Self::RotateScale
                    | Self::Flip
                    | Self::Pulse
                    | Self::Elastic
            ),
            has_rotate: matches!(
                self,
                Self::Rotate | Self::RotateScale | Self::Swing | Self::Wobble
            ),
            has_flip: matches!(self, Self::Flip),
            has_translate_x: matches!(
                self,
                Self::SlideLeft | Self::SlideRight | Self::Shake | Self::Wobble
            ),
            has_translate_y: matches!(self, Self::SlideUp | Self::SlideDown | Self::Bounce),
        }
    }

    /// Per-effect easing override for one transform channel. Opacity and
    /// height never take overrides; channels without one use the caller's
    /// easing.
    pub fn channel_curve(self, channel: Channel) -> Option<Curve> {
        match (self, channel) {
            (Self::Bounce, Channel::Scale) => Some(Curve::Bounce),
            (Self::Elastic, Channel::Scale) => Some(Curve::Elastic { amplitude: 1.5 }),
            (Self::Pulse, Channel::Scale) => Some(Curve::Back { overshoot: 3.0 }),
            (Self::Swing, Channel::Rotation) => Some(Curve::Elastic { amplitude: 1.2 }),
            (Self::Wobble, Channel::Rotation | Channel::TranslateX) => {
                Some(Curve::Elastic { amplitude: 1.5 })
            }
            (Self::Shake, Channel::TranslateX) => Some(Curve::Elastic { amplitude: 3.0 }),
            _ => None,
        }
    }

    pub const ALL: [Self; 16] = [
        Self::Scale,
        Self::Rotate,
        Self::Fade,
        Self::SlideUp,
        Self::SlideDown,
        Self::SlideLeft,
        Self::SlideRight,
        Self::Bounce,
        Self::Flip,
        Self::Zoom,
        Self::RotateScale,
        Self::Shake,
        Self::Pulse,
        Self::Swing,
        Self::Wobble,
        Self::Elastic,
    ];
}
