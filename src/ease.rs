use std::f64::consts::TAU;

/// Caller-facing easing selection for an animation config.
///
/// `Spring` and `Bounce` are permitted to overshoot outside [0,1] transiently;
/// every curve still maps 0 -> 0 and 1 -> 1 exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
    Bounce,
}

impl Default for Ease {
    fn default() -> Self {
        Self::EaseOut
    }
}

// Unknown easing names degrade to the default, mirroring `EffectKind`.
impl<'de> serde::Deserialize<'de> for Ease {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

impl Ease {
    /// Forgiving name lookup for forward-compatible host configuration.
    /// Unknown names degrade to the default rather than failing.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" => Self::Linear,
            "easein" | "ease_in" | "ease-in" | "in" => Self::EaseIn,
            "easeout" | "ease_out" | "ease-out" | "out" => Self::EaseOut,
            "easeinout" | "ease_in_out" | "ease-in-out" | "inout" => Self::EaseInOut,
            "spring" => Self::Spring,
            "bounce" => Self::Bounce,
            other => {
                tracing::warn!(name = other, "unknown easing name, falling back to easeOut");
                Self::default()
            }
        }
    }

    pub fn curve(self) -> Curve {
        match self {
            Self::Linear => Curve::Linear,
            Self::EaseIn => Curve::EaseIn,
            Self::EaseOut => Curve::EaseOut,
            Self::EaseInOut => Curve::EaseInOut,
            Self::Spring => Curve::Spring,
            Self::Bounce => Curve::Bounce,
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        self.curve().apply(t)
    }
}

/// Resolved per-channel curve. Effects may override a channel's caller easing
/// with one of the parameterized overshooting curves (elastic, back).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
    Bounce,
    /// Exponentially decaying oscillation; `amplitude` scales oscillation count.
    Elastic { amplitude: f64 },
    /// Ease-in that first pulls back past the origin by `overshoot`.
    Back { overshoot: f64 },
}

impl Curve {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::Spring => {
                // Damped oscillation with exact endpoints; the (1 - t) factor
                // kills the residual at t = 1.
                1.0 - (1.0 - t) * (-6.0 * t).exp() * (TAU * 1.5 * t).cos()
            }
            Self::Bounce => {
                let n1 = 7.5625;
                let d1 = 2.75;
                if t < 1.0 / d1 {
                    n1 * t * t
                } else if t < 2.0 / d1 {
                    let t = t - 1.5 / d1;
                    n1 * t * t + 0.75
                } else if t < 2.5 / d1 {
                    let t = t - 2.25 / d1;
                    n1 * t * t + 0.9375
                } else {
                    let t = t - 2.625 / d1;
                    n1 * t * t + 0.984375
                }
            }
            Self::Elastic { amplitude } => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let a = amplitude.max(0.1);
                    let c = TAU / 3.0;
                    (2.0f64).powf(-10.0 * t) * ((t * 10.0 * a - 0.75) * c).sin() + 1.0
                }
            }
            Self::Back { overshoot } => {
                let s = overshoot.max(0.0);
                t * t * ((s + 1.0) * t - s)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EASES: [Ease; 6] = [
        Ease::Linear,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::Spring,
        Ease::Bounce,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL_EASES {
            assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
        for curve in [
            Curve::Elastic { amplitude: 1.5 },
            Curve::Back { overshoot: 3.0 },
        ] {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-9, "{curve:?} at 1");
        }
    }

    #[test]
    fn monotonic_spot_check_for_plain_curves() {
        for ease in [Ease::Linear, Ease::EaseIn, Ease::EaseOut, Ease::EaseInOut] {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b && b < c, "{ease:?} not monotonic");
        }
    }

    #[test]
    fn back_dips_below_zero_before_rising() {
        let curve = Curve::Back { overshoot: 3.0 };
        assert!(curve.apply(0.3) < 0.0);
        assert!(curve.apply(0.95) > 0.5);
    }

    #[test]
    fn elastic_overshoots_past_one() {
        let curve = Curve::Elastic { amplitude: 1.5 };
        let overshoots = (1..100).any(|i| curve.apply(f64::from(i) / 100.0) > 1.0);
        assert!(overshoots);
    }

    #[test]
    fn parse_falls_back_to_default() {
        assert_eq!(Ease::parse("ease-in-out"), Ease::EaseInOut);
        assert_eq!(Ease::parse("SPRING"), Ease::Spring);
        assert_eq!(Ease::parse("wiggle"), Ease::default());
    }

    #[test]
    fn apply_clamps_input() {
        assert_eq!(Ease::EaseIn.apply(-5.0), 0.0);
        assert_eq!(Ease::EaseIn.apply(7.0), 1.0);
    }
}
