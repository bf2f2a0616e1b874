//! A headless inertial-scrolling engine.
//!
//! This crate turns single-pointer pan gestures into touch-style momentum
//! scrolling for hosts whose platform lacks it: it owns the scroll offset,
//! clamps it to the range derived from viewport/content measurements, and on
//! gesture release computes a friction-based deceleration trajectory, played
//! back either as precomputed declarative-transition keyframes (split at
//! scroll boundaries by cubic-Bezier bisection) or through a discrete
//! polling fallback.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - box measurements (client size, padding, margins) via [`Scrollable::init_size`]
//! - pan-gesture events with velocities via [`Scrollable::on_pan`]
//! - a timer cadence via [`Scrollable::tick`]
//! - transition completion signals via [`Scrollable::notify_transition_end`]
//!
//! and applies the resulting [`RenderCommand`]s to its content element.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod bezier;
mod capability;
mod engine;
mod gesture;
mod metrics;
mod options;
mod scrollable;
mod scroller;
mod state;
mod trajectory;
mod types;

#[cfg(test)]
mod tests;

pub use bezier::{CubicBezier, DECELERATION_CURVE, Easing, Point, cubic_roots};
pub use capability::{Capabilities, RenderMode};
pub use engine::{InertiaEngine, PollingEngine, TimelineEngine};
pub use gesture::{PanEvent, PanPhase};
pub use metrics::{ContentBox, EdgeInsets, Metrics, ViewBox};
pub use options::{OnRenderCallback, OnScrollCallback, ScrollerOptions};
pub use scrollable::Scrollable;
pub use scroller::{Applied, Scroller};
pub use state::ScrollSnapshot;
pub use trajectory::{AxisFling, Fling, Keyframe, Trajectory, build as build_trajectory};
pub use types::{Axis, RenderCommand, ScrollTarget, ScrollUpdate, StopReason, Vec2};
