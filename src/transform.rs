//! Derives the transform list a host style adapter should apply for an
//! effect, including anchor pivot wrapping.
//!
//! Channel-driven ops name the scalar that feeds them; fixed translations
//! carry pixel values. The rotation scalar feeds Z-rotation (degrees) for
//! rotating effects and Y-rotation (degrees) for the flip effect; both read
//! the same underlying channel.

use crate::{anchor::AnchorPoint, effect::EffectKind, engine::Channel};

/// Reference size used for anchor pixel offsets until a measurement arrives.
pub const FALLBACK_REFERENCE_SIZE: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Fixed translation in pixels (anchor pivot shifting).
    Offset { x: f64, y: f64 },
    /// Translation driven by [`Channel::TranslateX`] / [`Channel::TranslateY`].
    TranslateX,
    TranslateY,
    /// Uniform scale driven by [`Channel::Scale`].
    Scale,
    /// Z-axis rotation in degrees driven by [`Channel::Rotation`].
    RotateZ,
    /// Y-axis rotation in degrees driven by [`Channel::Rotation`].
    RotateY,
}

impl TransformOp {
    /// The channel feeding this op, if any.
    pub fn channel(self) -> Option<Channel> {
        match self {
            Self::Offset { .. } => None,
            Self::TranslateX => Some(Channel::TranslateX),
            Self::TranslateY => Some(Channel::TranslateY),
            Self::Scale => Some(Channel::Scale),
            Self::RotateZ | Self::RotateY => Some(Channel::Rotation),
        }
    }
}

/// Ordered transform list for one animated subtree.
///
/// Anchor wrapping applies only when the anchor is off-center and the effect
/// actually scales, rotates, or flips; translation-only and fade effects are
/// never wrapped.
pub fn transform_ops(
    effect: EffectKind,
    anchor: AnchorPoint,
    measured_height: Option<f64>,
) -> Vec<TransformOp> {
    let flags = effect.flags();
    let mut ops = Vec::new();

    if flags.has_translate_x {
        ops.push(TransformOp::TranslateX);
    }
    if flags.has_translate_y {
        ops.push(TransformOp::TranslateY);
    }

    let pivots = flags.has_scale || flags.has_rotate || flags.has_flip;
    let wrap = pivots && anchor != AnchorPoint::Center;
    let (ox, oy) = if wrap {
        let reference = measured_height.unwrap_or(FALLBACK_REFERENCE_SIZE);
        let offset = anchor.offset();
        (offset.x * reference, offset.y * reference)
    } else {
        (0.0, 0.0)
    };

    if wrap {
        ops.push(TransformOp::Offset { x: -ox, y: -oy });
    }
    if flags.has_scale {
        ops.push(TransformOp::Scale);
    }
    if flags.has_rotate {
        ops.push(TransformOp::RotateZ);
    }
    if flags.has_flip {
        ops.push(TransformOp::RotateY);
    }
    if wrap {
        ops.push(TransformOp::Offset { x: ox, y: oy });
    }

    ops
}
