//! Per-child delay planning for group animations.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StaggerDirection {
    /// First child animates first.
    Forward,
    /// Last child animates first.
    Reverse,
    /// Middle child(ren) animate first.
    Center,
    /// Outer children animate first.
    Edges,
}

impl Default for StaggerDirection {
    fn default() -> Self {
        Self::Forward
    }
}

impl<'de> serde::Deserialize<'de> for StaggerDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

impl StaggerDirection {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "forward" => Self::Forward,
            "reverse" => Self::Reverse,
            "center" => Self::Center,
            "edges" => Self::Edges,
            other => {
                tracing::warn!(name = other, "unknown stagger direction, falling back to forward");
                Self::default()
            }
        }
    }
}

/// Enter-side delay for one child: `initial_delay` plus a direction-dependent
/// multiple of `base_delay`.
pub fn child_delay(
    index: usize,
    child_count: usize,
    base_delay_ms: f64,
    initial_delay_ms: f64,
    direction: StaggerDirection,
) -> f64 {
    if child_count == 0 {
        return initial_delay_ms;
    }
    let index = index.min(child_count - 1);
    let last = (child_count - 1) as f64;
    let i = index as f64;
    let c = last / 2.0;
    let steps = match direction {
        StaggerDirection::Forward => i,
        StaggerDirection::Reverse => last - i,
        StaggerDirection::Center => (i - c).abs(),
        StaggerDirection::Edges => c - (i - c).abs(),
    };
    initial_delay_ms + steps * base_delay_ms
}

/// Exit-side delay planning: same four directions over an independent base
/// interval and offset. A zero interval yields the flat `exit_delay` for
/// every child regardless of direction.
pub fn exit_child_delay(
    index: usize,
    child_count: usize,
    exit_base_delay_ms: f64,
    exit_delay_ms: f64,
    direction: StaggerDirection,
) -> f64 {
    if exit_base_delay_ms == 0.0 {
        return exit_delay_ms;
    }
    child_delay(index, child_count, exit_base_delay_ms, exit_delay_ms, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_is_index_times_base() {
        for i in 0..5 {
            assert_eq!(
                child_delay(i, 5, 10.0, 7.0, StaggerDirection::Forward),
                7.0 + i as f64 * 10.0
            );
        }
    }

    #[test]
    fn forward_and_reverse_are_mirror_images() {
        let n = 6;
        for i in 0..n {
            let fwd = child_delay(i, n, 10.0, 0.0, StaggerDirection::Forward);
            let rev = child_delay(n - 1 - i, n, 10.0, 0.0, StaggerDirection::Reverse);
            assert_eq!(fwd, rev, "index {i}");
        }
    }

    #[test]
    fn center_and_edges_sum_to_a_constant() {
        for n in [1, 2, 5, 8] {
            let total: Vec<f64> = (0..n)
                .map(|i| {
                    child_delay(i, n, 10.0, 0.0, StaggerDirection::Center)
                        + child_delay(i, n, 10.0, 0.0, StaggerDirection::Edges)
                })
                .collect();
            for pair in total.windows(2) {
                assert_eq!(pair[0], pair[1], "child_count {n}");
            }
        }
    }

    #[test]
    fn edges_scenario_five_children() {
        let delays: Vec<f64> = (0..5)
            .map(|i| child_delay(i, 5, 10.0, 0.0, StaggerDirection::Edges))
            .collect();
        assert_eq!(delays, vec![0.0, 10.0, 20.0, 10.0, 0.0]);
    }

    #[test]
    fn center_with_even_count_uses_fractional_midpoint() {
        let delays: Vec<f64> = (0..4)
            .map(|i| child_delay(i, 4, 10.0, 0.0, StaggerDirection::Center))
            .collect();
        assert_eq!(delays, vec![15.0, 5.0, 5.0, 15.0]);
    }

    #[test]
    fn zero_exit_interval_is_flat() {
        for i in 0..4 {
            assert_eq!(
                exit_child_delay(i, 4, 0.0, 40.0, StaggerDirection::Edges),
                40.0
            );
        }
    }

    #[test]
    fn nonzero_exit_interval_staggers() {
        assert_eq!(
            exit_child_delay(0, 3, 10.0, 5.0, StaggerDirection::Reverse),
            25.0
        );
        assert_eq!(
            exit_child_delay(2, 3, 10.0, 5.0, StaggerDirection::Reverse),
            5.0
        );
    }

    #[test]
    fn empty_group_is_just_the_initial_delay() {
        assert_eq!(child_delay(0, 0, 10.0, 3.0, StaggerDirection::Forward), 3.0);
    }
}
