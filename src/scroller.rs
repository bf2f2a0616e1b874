use crate::metrics::Metrics;
use crate::options::ScrollerOptions;
use crate::{Axis, RenderCommand, ScrollTarget, ScrollUpdate, Vec2};

/// Outcome of a scroll request after clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Applied {
    /// The final committed offset (not necessarily what was requested).
    pub offset: Vec2,
    /// Whether the committed offset differs from the previous one.
    pub changed: bool,
}

/// Owns the committed scroll offset.
///
/// Every write to the offset goes through this controller: requests are
/// clamped to `[0, scroll_max]` per axis, applied to the rendered position
/// (delivered as a [`RenderCommand`] through the configured sink), and
/// announced through the scroll-changed notification. No other component
/// mutates the offset directly.
#[derive(Clone, Debug)]
pub struct Scroller {
    options: ScrollerOptions,
    metrics: Metrics,
    offset: Vec2,
}

impl Scroller {
    pub fn new(options: ScrollerOptions) -> Self {
        Self {
            options,
            metrics: Metrics::default(),
            offset: Vec2::ZERO,
        }
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    pub(crate) fn options_mut(&mut self) -> &mut ScrollerOptions {
        &mut self.options
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Installs freshly computed metrics. The caller is expected to re-apply
    /// the current offset afterwards (see [`crate::Scrollable::init_size`]);
    /// clamping against the new range happens there.
    pub(crate) fn set_metrics(&mut self, metrics: Metrics) {
        self.metrics = metrics;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn scroll_max(&self) -> Vec2 {
        self.metrics.scroll_max
    }

    /// Clamps and commits a requested offset, emitting a
    /// [`RenderCommand::Place`] when the rendered position must move.
    ///
    /// - Axes omitted from `target` keep their current value.
    /// - `force` re-renders even when the clamped result equals the current
    ///   offset (used after metrics changes, where the same offset maps to a
    ///   new position).
    /// - `inertial` tags the change notification so consumers can tell
    ///   momentum coasting from user-driven scrolling.
    pub fn apply(&mut self, target: ScrollTarget, force: bool, inertial: bool) -> Applied {
        let applied = self.commit_clamped(target, inertial);
        if applied.changed || force {
            self.render(RenderCommand::Place(
                self.metrics.offset_to_position(self.offset),
            ));
        }
        applied
    }

    /// Like [`Self::apply`], but without a render side effect.
    ///
    /// Used by the timeline strategy when a keyframe's declarative playback
    /// already moved the content and only the canonical offset needs to catch
    /// up.
    pub(crate) fn commit(&mut self, target: ScrollTarget) -> Applied {
        self.commit_clamped(target, true)
    }

    fn commit_clamped(&mut self, target: ScrollTarget, inertial: bool) -> Applied {
        if !self.options.enabled {
            return Applied {
                offset: self.offset,
                changed: false,
            };
        }

        let mut next = self.offset;
        for axis in Axis::BOTH {
            // Clamp the current value too: the range may have shrunk since it
            // was committed.
            let requested = target.get(axis).unwrap_or(next.get(axis));
            next.set(axis, self.metrics.clamp_offset(axis, requested));
        }

        let changed = next != self.offset;
        if changed {
            otrace!(x = next.x, y = next.y, inertial, "scroll offset committed");
            self.offset = next;
            self.notify(inertial);
        }
        Applied {
            offset: self.offset,
            changed,
        }
    }

    pub(crate) fn render(&self, command: RenderCommand) {
        if let Some(cb) = &self.options.on_render {
            cb(command);
        }
    }

    fn notify(&self, inertial: bool) {
        if let Some(cb) = &self.options.on_scroll {
            cb(ScrollUpdate {
                offset: self.offset,
                inertial,
            });
        }
    }
}
