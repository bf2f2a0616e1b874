//! The two interchangeable inertial playback strategies.
//!
//! Both consume a [`Fling`] and drive the [`Scroller`] until velocity decays
//! to zero or a boundary absorbs the remaining momentum. The polling strategy
//! integrates the kinematics itself on host-driven ticks; the timeline
//! strategy precomputes a keyframe trajectory and replays it through the
//! host's declarative transition primitive, advancing on completion signals.

use std::collections::VecDeque;

use crate::scroller::Scroller;
use crate::trajectory::{self, AxisFling, Fling, Keyframe};
use crate::{Axis, RenderCommand, ScrollTarget, StopReason, Vec2};

/// An inertial animation strategy.
///
/// One implementation is selected at construction from the capability probe
/// and never switched afterwards. The host owns all timing: `tick` is its
/// frame/timer callback, `on_transition_end` forwards the declarative
/// primitive's completion signal, and `rendered` is the content position it
/// measured (used to finalize from real state when signals go missing).
pub trait InertiaEngine: core::fmt::Debug + Send + Sync {
    fn start(&mut self, scroller: &mut Scroller, fling: Fling, now_ms: u64);

    fn tick(&mut self, scroller: &mut Scroller, now_ms: u64, rendered: Option<Vec2>);

    fn on_transition_end(&mut self, scroller: &mut Scroller, now_ms: u64, rendered: Option<Vec2>);

    fn stop(&mut self, scroller: &mut Scroller, reason: StopReason, rendered: Option<Vec2>);

    fn is_running(&self) -> bool;
}

/// Discrete-polling strategy: the always-available fallback.
///
/// `Idle -> Running -> Idle`. Each tick integrates displacement for the
/// elapsed interval under constant deceleration and feeds it through the
/// controller; a clamped result means a boundary was hit and that axis's
/// velocity is zeroed on the spot (no bounce).
#[derive(Debug, Default)]
pub struct PollingEngine {
    running: bool,
    last_tick_ms: u64,
    x: AxisFling,
    y: AxisFling,
}

impl PollingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn axis(&mut self, axis: Axis) -> &mut AxisFling {
        match axis {
            Axis::Horizontal => &mut self.x,
            Axis::Vertical => &mut self.y,
        }
    }
}

impl InertiaEngine for PollingEngine {
    fn start(&mut self, scroller: &mut Scroller, fling: Fling, now_ms: u64) {
        self.x = fling.x;
        self.y = fling.y;

        // A release at a boundary with outward velocity has nowhere to go.
        for axis in Axis::BOTH {
            let offset = scroller.offset().get(axis);
            let max = scroller.scroll_max().get(axis);
            let af = self.axis(axis);
            let outward = (af.direction > 0.0 && offset >= max)
                || (af.direction < 0.0 && offset <= 0.0);
            if outward {
                af.velocity = 0.0;
            }
        }

        if self.x.velocity == 0.0 && self.y.velocity == 0.0 {
            return;
        }
        odebug!(
            vx = self.x.velocity,
            vy = self.y.velocity,
            "polling fling started"
        );
        self.last_tick_ms = now_ms;
        self.running = true;
    }

    fn tick(&mut self, scroller: &mut Scroller, now_ms: u64, _rendered: Option<Vec2>) {
        if !self.running {
            return;
        }
        let elapsed = now_ms.saturating_sub(self.last_tick_ms) as f64;
        if elapsed == 0.0 {
            return;
        }
        self.last_tick_ms = now_ms;

        let mut target = ScrollTarget::default();
        for axis in Axis::BOTH {
            let offset = scroller.offset().get(axis);
            let af = self.axis(axis);
            if af.velocity == 0.0 {
                continue;
            }
            // Bias the friction window by one tick: discrete sampling tends
            // to overshoot the continuous model, so trade a slight undershoot
            // for never crossing the resting point.
            let friction_time = elapsed - 1.0;
            let friction_sum = af.friction * friction_time * friction_time / 2.0
                + af.friction * friction_time / 2.0;
            let move_len = af.velocity * elapsed - friction_sum;
            if move_len > 0.0 {
                let requested = offset + move_len * af.direction;
                af.velocity -= af.friction * elapsed;
                if af.velocity < af.friction {
                    af.velocity = 0.0;
                }
                match axis {
                    Axis::Horizontal => target.x = Some(requested),
                    Axis::Vertical => target.y = Some(requested),
                }
            } else {
                af.velocity = 0.0;
            }
        }

        let applied = scroller.apply(target, false, true);
        for axis in Axis::BOTH {
            // Clamped short of the request: a boundary absorbed the rest.
            if let Some(requested) = target.get(axis) {
                if requested != applied.offset.get(axis) {
                    self.axis(axis).velocity = 0.0;
                }
            }
        }

        if self.x.velocity == 0.0 && self.y.velocity == 0.0 {
            odebug!("polling fling completed");
            self.running = false;
        }
    }

    fn on_transition_end(&mut self, _scroller: &mut Scroller, _now_ms: u64, _rendered: Option<Vec2>) {
        // No declarative playback in this strategy; nothing to advance.
    }

    fn stop(&mut self, _scroller: &mut Scroller, _reason: StopReason, _rendered: Option<Vec2>) {
        if self.running {
            otrace!("polling fling stopped");
        }
        self.running = false;
        self.x.velocity = 0.0;
        self.y.velocity = 0.0;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

/// Continuous-timeline strategy: precomputed keyframes played back through a
/// declarative transition primitive.
///
/// Playback advances on the host's completion signals. Because those signals
/// are not reliable in every environment, `start` also arms a backstop
/// deadline; a `tick` past it forcibly finalizes the session from the
/// measured content position.
#[derive(Debug, Default)]
pub struct TimelineEngine {
    running: bool,
    /// Guards against completion signals re-entering while a finalize is
    /// already mutating state.
    finishing: bool,
    current: Option<Keyframe>,
    queue: VecDeque<Keyframe>,
    deadline_ms: Option<u64>,
}

impl TimelineEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn play(&mut self, scroller: &mut Scroller, keyframe: Keyframe) {
        scroller.render(RenderCommand::Animate {
            position: scroller.metrics().offset_to_position(keyframe.target),
            duration_ms: keyframe.duration_ms,
            easing: keyframe.easing,
        });
        self.current = Some(keyframe);
    }

    /// Ends the session and reconciles canonical state with what is actually
    /// on screen: the measured position wins when available, the last
    /// committed offset otherwise. Always snaps the rendered position back to
    /// the canonical (clamped) offset so nothing is left mid-transition.
    fn finalize(&mut self, scroller: &mut Scroller, rendered: Option<Vec2>) {
        if self.finishing {
            return;
        }
        self.finishing = true;
        self.running = false;
        self.current = None;
        self.queue.clear();
        self.deadline_ms = None;

        if let Some(position) = rendered {
            let offset = scroller.metrics().position_to_offset(position);
            scroller.commit(ScrollTarget::from_vec2(offset));
        }
        scroller.render(RenderCommand::Place(
            scroller.metrics().offset_to_position(scroller.offset()),
        ));
        self.finishing = false;
    }
}

impl InertiaEngine for TimelineEngine {
    fn start(&mut self, scroller: &mut Scroller, fling: Fling, now_ms: u64) {
        let trajectory = trajectory::build(scroller.offset(), scroller.scroll_max(), &fling);
        if trajectory.is_empty() {
            return;
        }
        odebug!(
            keyframes = trajectory.keyframes.len(),
            total_ms = trajectory.total_ms,
            "timeline fling started"
        );

        self.queue = trajectory.keyframes.into();
        self.deadline_ms = Some(now_ms.saturating_add(trajectory.total_ms.ceil() as u64));
        self.running = true;
        if let Some(first) = self.queue.pop_front() {
            self.play(scroller, first);
        }
    }

    fn tick(&mut self, scroller: &mut Scroller, now_ms: u64, rendered: Option<Vec2>) {
        if !self.running {
            return;
        }
        if let Some(deadline) = self.deadline_ms {
            if now_ms >= deadline {
                // The completion signal never came; recover from real state.
                owarn!("transition completion signal missed; forcing finalize");
                self.finalize(scroller, rendered);
            }
        }
    }

    fn on_transition_end(&mut self, scroller: &mut Scroller, _now_ms: u64, rendered: Option<Vec2>) {
        if !self.running || self.finishing {
            return;
        }
        // The declarative playback already moved the content; bring the
        // canonical offset up to date without re-rendering.
        if let Some(done) = self.current.take() {
            scroller.commit(ScrollTarget::from_vec2(done.target));
        }
        if let Some(next) = self.queue.pop_front() {
            self.play(scroller, next);
        } else {
            odebug!("timeline fling completed");
            self.finalize(scroller, rendered);
        }
    }

    fn stop(&mut self, scroller: &mut Scroller, _reason: StopReason, rendered: Option<Vec2>) {
        if !self.running {
            return;
        }
        otrace!("timeline fling stopped");
        self.finalize(scroller, rendered);
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
