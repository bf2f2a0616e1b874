use crate::capability::{Capabilities, RenderMode};
use crate::engine::{InertiaEngine, PollingEngine, TimelineEngine};
use crate::gesture::{DragState, PanEvent, PanPhase};
use crate::metrics::{ContentBox, Metrics, ViewBox};
use crate::options::ScrollerOptions;
use crate::scroller::Scroller;
use crate::state::ScrollSnapshot;
use crate::trajectory::Fling;
use crate::{ScrollTarget, StopReason, Vec2};

/// A headless scrollable viewport/content pair.
///
/// This is the wiring layer: it owns the scroll state controller, the
/// inertial engine selected by the capability probe, and the gesture
/// bookkeeping. The host drives it by:
///
/// - calling [`Self::init_size`] whenever viewport or content dimensions
///   change,
/// - forwarding pan events to [`Self::on_pan`],
/// - calling [`Self::tick`] at its own cadence (see
///   [`Self::tick_interval_ms`]),
/// - forwarding declarative completion signals to
///   [`Self::notify_transition_end`] when running in timeline mode,
///
/// and applies the [`crate::RenderCommand`]s delivered through the configured
/// `on_render` sink to its content element.
#[derive(Debug)]
pub struct Scrollable {
    scroller: Scroller,
    engine: Box<dyn InertiaEngine>,
    capabilities: Capabilities,
    drag: Option<DragState>,
}

impl Scrollable {
    /// Creates a scrollable from options and the host's one-time capability
    /// probe result.
    ///
    /// A probe with no usable positioning primitive produces a permanently
    /// disabled instance (native behavior passes through); this degrades
    /// rather than fails. The animation strategy is fixed here and never
    /// switched at runtime.
    pub fn new(mut options: ScrollerOptions, capabilities: Capabilities) -> Self {
        if capabilities.positioning.is_none() {
            owarn!("no usable positioning primitive; scrolling disabled");
            options.enabled = false;
        }

        let engine: Box<dyn InertiaEngine> =
            if options.use_transition && capabilities.timeline_usable() {
                Box::new(TimelineEngine::new())
            } else {
                Box::new(PollingEngine::new())
            };
        odebug!(
            ?capabilities,
            timeline = options.use_transition && capabilities.timeline_usable(),
            "scrollable created"
        );

        Self {
            scroller: Scroller::new(options),
            engine,
            capabilities,
            drag: None,
        }
    }

    pub fn options(&self) -> &ScrollerOptions {
        self.scroller.options()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn render_mode(&self) -> Option<RenderMode> {
        self.capabilities.positioning
    }

    pub fn metrics(&self) -> &Metrics {
        self.scroller.metrics()
    }

    pub fn enabled(&self) -> bool {
        self.scroller.options().enabled
    }

    /// Global kill switch. Disabling interrupts any in-flight session.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.capabilities.positioning.is_none() {
            return;
        }
        if !enabled {
            self.interrupt();
            self.drag = None;
        }
        self.scroller.options_mut().enabled = enabled;
    }

    /// Whether an inertial session is currently playing.
    pub fn is_coasting(&self) -> bool {
        self.engine.is_running()
    }

    /// Suggested polling interval for hosts scheduling [`Self::tick`].
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.scroller.options().fps.max(1))
    }

    /// Recomputes the scroll range from fresh box measurements and re-applies
    /// the current offset.
    ///
    /// Must be called on every viewport/content size change. The offset is
    /// re-clamped against the new range and force-rendered (the same offset
    /// maps to a different position under new metrics); any resulting change
    /// notification is tagged as non-inertial.
    pub fn init_size(&mut self, view: &ViewBox, content: &ContentBox) {
        if !self.enabled() {
            return;
        }
        let Some(mode) = self.capabilities.positioning else {
            return;
        };
        self.interrupt();
        let metrics = Metrics::compute(view, content, mode);
        odebug!(
            scroll_max_x = metrics.scroll_max.x,
            scroll_max_y = metrics.scroll_max.y,
            "metrics recomputed"
        );
        self.scroller.set_metrics(metrics);
        self.scroller
            .apply(ScrollTarget::default(), true, false);
    }

    pub fn offset(&self) -> Vec2 {
        self.scroller.offset()
    }

    pub fn scroll_max(&self) -> Vec2 {
        self.scroller.scroll_max()
    }

    pub fn scroll_x(&self) -> f64 {
        self.scroller.offset().x
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroller.offset().y
    }

    /// Programmatic scroll. Interrupts any inertial session, clamps, and
    /// returns the final committed offset.
    pub fn scroll_to(&mut self, target: ScrollTarget) -> Vec2 {
        self.scroll_to_with_rendered(target, None)
    }

    /// Like [`Self::scroll_to`], with the host's measured content position so
    /// an interrupted timeline session reconciles before the new offset
    /// applies.
    pub fn scroll_to_with_rendered(&mut self, target: ScrollTarget, rendered: Option<Vec2>) -> Vec2 {
        self.interrupt_with(rendered);
        self.scroller.apply(target, false, false).offset
    }

    pub fn set_scroll_x(&mut self, x: f64) -> f64 {
        self.scroll_to(ScrollTarget::horizontal(x)).x
    }

    pub fn set_scroll_y(&mut self, y: f64) -> f64 {
        self.scroll_to(ScrollTarget::vertical(y)).y
    }

    /// Gesture entry point: `Ready -> Dragging -> Ready`, with inertial
    /// coasting taking over after the end event.
    pub fn on_pan(&mut self, event: &PanEvent) {
        self.on_pan_with_rendered(event, None);
    }

    /// Like [`Self::on_pan`], with the host's measured content position.
    ///
    /// In timeline mode a pan start lands mid-transition: the content is
    /// somewhere between the last committed offset and the playing keyframe's
    /// target. Passing the measured position here makes the interrupted
    /// session commit it, so the drag starts from where the content actually
    /// is instead of teleporting back.
    pub fn on_pan_with_rendered(&mut self, event: &PanEvent, rendered: Option<Vec2>) {
        if !self.enabled() {
            return;
        }
        match event.phase {
            PanPhase::Start => {
                // A touch always wins over a playing fling, synchronously.
                self.interrupt_with(rendered);
                self.drag = Some(DragState::new(event.point(), self.scroller.offset()));
            }
            PanPhase::Move => {
                let Some(mut drag) = self.drag else {
                    return;
                };
                // Dragging content left scrolls right: the delta is inverted.
                let target = ScrollTarget::both(
                    drag.start_offset.x + drag.start_point.x - event.x,
                    drag.start_offset.y + drag.start_point.y - event.y,
                );
                self.scroller.apply(target, false, false);
                drag.record_sample(event.velocity(), event.timestamp_ms);
                self.drag = Some(drag);
            }
            PanPhase::End => {
                let Some(drag) = self.drag.take() else {
                    return;
                };
                let stale_after = self.scroller.options().pan_stop_interval_ms;
                let velocity = drag.release_velocity(event, stale_after);
                if velocity.x == 0.0 && velocity.y == 0.0 {
                    return;
                }
                let fling =
                    Fling::from_velocity(velocity.x, velocity.y, self.scroller.options().friction);
                self.engine
                    .start(&mut self.scroller, fling, event.timestamp_ms);
            }
        }
    }

    /// Host cadence hook: advances polling playback and checks the timeline
    /// backstop.
    pub fn tick(&mut self, now_ms: u64) {
        self.tick_with_rendered(now_ms, None);
    }

    /// Like [`Self::tick`], with the host's measured content position for
    /// backstop finalization.
    pub fn tick_with_rendered(&mut self, now_ms: u64, rendered: Option<Vec2>) {
        if !self.enabled() {
            return;
        }
        self.engine.tick(&mut self.scroller, now_ms, rendered);
    }

    /// Forwards a declarative-transition completion signal (timeline mode).
    ///
    /// `rendered` is the content position the host measured at completion
    /// time, used to reconcile canonical state when the session finalizes.
    pub fn notify_transition_end(&mut self, now_ms: u64, rendered: Option<Vec2>) {
        if !self.enabled() {
            return;
        }
        self.engine
            .on_transition_end(&mut self.scroller, now_ms, rendered);
    }

    /// Public interrupt: halts any inertial session and snaps the rendered
    /// position to the canonical offset.
    pub fn stop(&mut self) {
        self.interrupt();
    }

    /// Like [`Self::stop`], with the host's measured content position; a
    /// timeline session commits it before snapping, so nothing is lost
    /// mid-keyframe.
    pub fn stop_with_rendered(&mut self, rendered: Option<Vec2>) {
        self.interrupt_with(rendered);
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            offset: self.scroller.offset(),
            coasting: self.engine.is_running(),
        }
    }

    /// Restores a previously captured snapshot, re-clamping against the
    /// current metrics. Any in-flight session is interrupted first.
    pub fn restore(&mut self, snapshot: ScrollSnapshot) {
        self.interrupt();
        self.scroller
            .apply(ScrollTarget::from_vec2(snapshot.offset), true, false);
    }

    fn interrupt(&mut self) {
        self.interrupt_with(None);
    }

    fn interrupt_with(&mut self, rendered: Option<Vec2>) {
        self.engine
            .stop(&mut self.scroller, StopReason::Interrupted, rendered);
    }
}
