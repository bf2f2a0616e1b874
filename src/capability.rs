/// Which positioning primitive the host environment supports for moving the
/// content element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// `transform: translate(..)` positioning (hardware-accelerated path).
    Transform,
    /// Legacy `left`/`top` offset positioning.
    Offsets,
}

/// Result of the host's one-time feature probe.
///
/// Computed once at startup and passed by value into [`crate::Scrollable::new`];
/// the engine never re-probes or switches strategies at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    /// Usable positioning primitive, or `None` when the probe failed entirely
    /// (the instance then constructs disabled).
    pub positioning: Option<RenderMode>,
    /// Whether a declarative transition primitive (duration + timing function
    /// + completion events) is usable.
    pub transition: bool,
}

impl Capabilities {
    /// Transform positioning with declarative transitions.
    pub const FULL: Capabilities = Capabilities {
        positioning: Some(RenderMode::Transform),
        transition: true,
    };

    /// Transform positioning without transition support.
    pub const TRANSFORM_ONLY: Capabilities = Capabilities {
        positioning: Some(RenderMode::Transform),
        transition: false,
    };

    /// Offset positioning only, no transitions.
    pub const LEGACY: Capabilities = Capabilities {
        positioning: Some(RenderMode::Offsets),
        transition: false,
    };

    /// No usable primitive at all.
    pub const UNSUPPORTED: Capabilities = Capabilities {
        positioning: None,
        transition: false,
    };

    pub fn with_transition(mut self, transition: bool) -> Self {
        self.transition = transition;
        self
    }

    /// The continuous-timeline strategy needs both transform positioning and
    /// transition support; everything else falls back to polling.
    pub(crate) fn timeline_usable(&self) -> bool {
        self.positioning == Some(RenderMode::Transform) && self.transition
    }
}
