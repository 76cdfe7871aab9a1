//! The anchor table: named pivot points for scale/rotate transforms.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorPoint {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for AnchorPoint {
    fn default() -> Self {
        Self::Center
    }
}

impl<'de> serde::Deserialize<'de> for AnchorPoint {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

/// Fractional offset from the element's center, per axis, in [-0.5, 0.5].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorOffset {
    pub x: f64,
    pub y: f64,
}

impl AnchorPoint {
    /// Forgiving name lookup; unknown names degrade to `Center` (no pivot
    /// re-centering).
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" => Self::Center,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "topleft" | "top_left" | "top-left" => Self::TopLeft,
            "topright" | "top_right" | "top-right" => Self::TopRight,
            "bottomleft" | "bottom_left" | "bottom-left" => Self::BottomLeft,
            "bottomright" | "bottom_right" | "bottom-right" => Self::BottomRight,
            other => {
                tracing::warn!(name = other, "unknown anchor name, falling back to center");
                Self::default()
            }
        }
    }

    pub fn offset(self) -> AnchorOffset {
        let (x, y) = match self {
            Self::Center => (0.0, 0.0),
            Self::Top => (0.0, -0.5),
            Self::Bottom => (0.0, 0.5),
            Self::Left => (-0.5, 0.0),
            Self::Right => (0.5, 0.0),
            Self::TopLeft => (-0.5, -0.5),
            Self::TopRight => (0.5, -0.5),
            Self::BottomLeft => (-0.5, 0.5),
            Self::BottomRight => (0.5, 0.5),
        };
        AnchorOffset { x, y }
    }
}
