//! One animated subtree: a director plus mount/visibility/measurement
//! semantics.

use crate::{
    config::AnimationConfig,
    director::{AnimationDirector, PopEvent},
    engine::{AnimationEngine, MotionPreference, RunToken, TimerToken},
    transform::TransformOp,
};

/// What the host should render for this subtree right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Height-reservation mode before the size is known: render a hidden
    /// probe so the layout callback can fire.
    MeasureProbe,
    /// The animated container.
    Animated,
}

/// A single animated subtree. Owns its director (and through it the engine)
/// exclusively.
pub struct SinglePop<E: AnimationEngine> {
    director: AnimationDirector<E>,
    visible: bool,
    mounted: bool,
}

impl<E: AnimationEngine> SinglePop<E> {
    pub fn new(engine: E, config: AnimationConfig, motion: Box<dyn MotionPreference>) -> Self {
        let visible = config.visible;
        Self {
            director: AnimationDirector::new(engine, config, motion),
            visible,
            mounted: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn config(&self) -> &AnimationConfig {
        self.director.config()
    }

    pub fn is_animating(&self) -> bool {
        self.director.is_animating()
    }

    pub fn render_mode(&self) -> RenderMode {
        if !self.config().skeleton && self.director.measured_height().is_none() {
            RenderMode::MeasureProbe
        } else {
            RenderMode::Animated
        }
    }

    pub fn transforms(&self) -> Vec<TransformOp> {
        self.director.transforms()
    }

    /// First mount: plays the enter animation once when configured to and
    /// currently visible. Idempotent.
    pub fn mount(&mut self) -> Vec<PopEvent> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        if self.config().animate_on_mount && self.visible {
            self.director.animate(true)
        } else {
            Vec::new()
        }
    }

    /// Prop-driven visibility change. Only actual transitions animate; a
    /// repeated value or a pre-mount call is a no-op.
    pub fn set_visible(&mut self, visible: bool) -> Vec<PopEvent> {
        if visible == self.visible {
            return Vec::new();
        }
        self.visible = visible;
        if !self.mounted {
            return Vec::new();
        }
        self.director.animate(visible)
    }

    /// Replace the animation configuration. A visibility difference embedded
    /// in the new config is applied as a transition.
    pub fn set_config(&mut self, config: AnimationConfig) -> Vec<PopEvent> {
        let target_visible = config.visible;
        self.director.set_config(config);
        self.set_visible(target_visible)
    }

    /// Layout measurement callback; latches the first measurement only.
    pub fn on_layout(&mut self, height: f64) {
        self.director.set_measured_height(height);
    }

    pub fn measured_height(&self) -> Option<f64> {
        self.director.measured_height()
    }

    pub fn notify_run_done(&mut self, token: RunToken, finished: bool) -> Vec<PopEvent> {
        self.director.notify_run_done(token, finished)
    }

    pub fn notify_timer(&mut self, token: TimerToken) -> Vec<PopEvent> {
        self.director.notify_timer(token)
    }

    /// Unmount: stop in-flight work, clear timers, drop the measurement.
    /// No events fire after this.
    pub fn unmount(&mut self) {
        self.director.detach();
        self.director.remeasure();
        self.mounted = false;
    }
}
