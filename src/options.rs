use std::sync::Arc;

use crate::{RenderCommand, ScrollUpdate};

/// A callback fired whenever the committed scroll offset changes.
pub type OnScrollCallback = Arc<dyn Fn(ScrollUpdate) + Send + Sync>;

/// A callback through which rendering side effects are delivered.
///
/// The engine is headless: it never touches the content element itself.
/// Whenever the content must move (immediately or via a declarative
/// transition), the command is handed to this callback for the host to apply.
pub type OnRenderCallback = Arc<dyn Fn(RenderCommand) + Send + Sync>;

/// Configuration for [`crate::Scrollable`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct ScrollerOptions {
    /// Constant deceleration applied to fling velocity, in px/ms².
    pub friction: f64,

    /// Prefer the continuous-timeline strategy when the capability probe
    /// reports transition support. Off by default: discrete polling behaves
    /// identically everywhere, the timeline path exists for hosts that want
    /// to offload playback to their animation primitive.
    pub use_transition: bool,

    /// Polling rate for the discrete fallback strategy. The engine does not
    /// own a timer; hosts read [`crate::Scrollable::tick_interval_ms`] and
    /// schedule `tick` themselves.
    pub fps: u32,

    /// A velocity sample older than this at gesture end is considered stale
    /// (the finger rested before lifting) and the end event's own velocity is
    /// used instead.
    pub pan_stop_interval_ms: u64,

    /// Global kill switch. When disabled, every operation is a no-op and the
    /// host's native behavior passes through.
    pub enabled: bool,

    /// Optional scroll-changed notification.
    pub on_scroll: Option<OnScrollCallback>,

    /// Optional render-command sink.
    pub on_render: Option<OnRenderCallback>,
}

pub(crate) const DEFAULT_FRICTION: f64 = 0.001;
pub(crate) const MIN_FRICTION: f64 = 1e-6;
pub(crate) const DEFAULT_FPS: u32 = 60;
pub(crate) const DEFAULT_PAN_STOP_INTERVAL_MS: u64 = 100;

impl Default for ScrollerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollerOptions {
    pub fn new() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            use_transition: false,
            fps: DEFAULT_FPS,
            pan_stop_interval_ms: DEFAULT_PAN_STOP_INTERVAL_MS,
            enabled: true,
            on_scroll: None,
            on_render: None,
        }
    }

    /// Floored at a small positive minimum: zero friction would never stop
    /// (infinite stopping time), negative friction would accelerate.
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction.max(MIN_FRICTION);
        self
    }

    pub fn with_use_transition(mut self, use_transition: bool) -> Self {
        self.use_transition = use_transition;
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    pub fn with_pan_stop_interval_ms(mut self, interval_ms: u64) -> Self {
        self.pan_stop_interval_ms = interval_ms;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollUpdate) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_render(
        mut self,
        on_render: Option<impl Fn(RenderCommand) + Send + Sync + 'static>,
    ) -> Self {
        self.on_render = on_render.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for ScrollerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("friction", &self.friction)
            .field("use_transition", &self.use_transition)
            .field("fps", &self.fps)
            .field("pan_stop_interval_ms", &self.pan_stop_interval_ms)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
