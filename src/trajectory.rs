//! Deceleration trajectory construction.
//!
//! Given a release velocity and per-axis friction, computes the closed-form
//! unconstrained travel (`v·T/2 + f·T/2` with `T = v/f`), clamps it at the
//! scroll boundaries, and carves the canonical deceleration curve into
//! back-to-back keyframe segments at each boundary crossing. Pure math, no
//! state.

use crate::bezier::{DECELERATION_CURVE, Easing};
use crate::{Axis, Vec2};

/// Per-axis fling parameters captured at gesture release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisFling {
    /// Speed magnitude in px/ms.
    pub velocity: f64,
    /// Signed direction, `1.0` or `-1.0`.
    pub direction: f64,
    /// Deceleration magnitude in px/ms².
    pub friction: f64,
}

/// A release velocity vector with its friction split.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fling {
    pub x: AxisFling,
    pub y: AxisFling,
}

impl Fling {
    /// Builds a fling from signed release velocities and the global scalar
    /// friction constant.
    ///
    /// A diagonal fling models one combined friction, not two independent
    /// ones: the constant is projected onto the velocity direction
    /// (`cos`/`sin` of the velocity angle), so a diagonal release decelerates
    /// along a straight line. Single-axis flings take the whole constant.
    pub fn from_velocity(velocity_x: f64, velocity_y: f64, friction: f64) -> Self {
        let dir_x = if velocity_x > 0.0 { 1.0 } else { -1.0 };
        let dir_y = if velocity_y > 0.0 { 1.0 } else { -1.0 };
        let vx = velocity_x.abs();
        let vy = velocity_y.abs();

        let (fx, fy) = if vx != 0.0 && vy != 0.0 {
            let angle = vy.atan2(vx);
            (angle.cos() * friction, angle.sin() * friction)
        } else {
            (
                if vx != 0.0 { friction } else { 0.0 },
                if vy != 0.0 { friction } else { 0.0 },
            )
        };

        Fling {
            x: AxisFling {
                velocity: vx,
                direction: dir_x,
                friction: fx,
            },
            y: AxisFling {
                velocity: vy,
                direction: dir_y,
                friction: fy,
            },
        }
    }

    pub fn get(&self, axis: Axis) -> AxisFling {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x.velocity == 0.0 && self.y.velocity == 0.0
    }
}

/// One timed segment of a computed trajectory.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    pub duration_ms: f64,
    pub easing: Easing,
    /// Absolute scroll offset at the end of the segment.
    pub target: Vec2,
}

/// An ordered keyframe sequence for one fling.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub keyframes: Vec<Keyframe>,
    /// Sum of segment durations; the backstop deadline is armed with this.
    pub total_ms: f64,
}

impl Trajectory {
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// The resting offset at the end of playback, if any travel happens.
    pub fn final_offset(&self) -> Option<Vec2> {
        self.keyframes.last().map(|k| k.target)
    }
}

/// Merge tolerance for distance ratios: two axes crossing their boundaries at
/// ratios this close share one keyframe.
const RATIO_EPS: f64 = 1e-9;

/// Computes the fling trajectory from `offset` within `[0, scroll_max]`.
///
/// Axes whose clamped travel is zero or negative (released at a boundary with
/// outward velocity) contribute no segment; if no axis travels, the trajectory
/// is empty and no session should be created.
pub fn build(offset: Vec2, scroll_max: Vec2, fling: &Fling) -> Trajectory {
    if fling.is_zero() {
        return Trajectory::default();
    }

    // The friction split keeps v/f identical across moving axes, so either
    // axis yields the same time-to-stop.
    let mut total_time = 0.0;
    let mut full = Vec2::ZERO;
    // (distance ratio, axis, clamped travel), at most one entry per axis.
    let mut crossings: Vec<(f64, Axis, f64)> = Vec::new();

    for axis in Axis::BOTH {
        let af = fling.get(axis);
        if af.velocity == 0.0 {
            continue;
        }
        if total_time == 0.0 {
            total_time = af.velocity / af.friction;
        }
        let move_len = af.velocity * total_time / 2.0 + af.friction * total_time / 2.0;
        if move_len <= 0.0 {
            continue;
        }

        let unclamped = offset.get(axis) + move_len * af.direction;
        let bounded = if unclamped > scroll_max.get(axis) {
            scroll_max.get(axis) - offset.get(axis)
        } else if unclamped < 0.0 {
            offset.get(axis)
        } else {
            move_len
        };
        // Released at (or pushed past) a boundary with outward velocity:
        // nothing to play on this axis.
        if bounded <= 0.0 {
            continue;
        }

        full.set(axis, move_len);
        let ratio = bounded / move_len;
        crossings.push((ratio, axis, bounded));
    }

    if crossings.is_empty() {
        return Trajectory::default();
    }
    crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

    odebug!(
        segments = crossings.len(),
        total_time,
        "building fling trajectory"
    );

    let mut keyframes = Vec::new();
    let mut remaining = DECELERATION_CURVE;
    let mut consumed_x = 0.0;
    let mut pinned: [Option<f64>; 2] = [None, None];

    let mut i = 0;
    while i < crossings.len() {
        let ratio = crossings[i].0;

        let (duration_ms, easing) = if ratio >= 1.0 - RATIO_EPS {
            (total_time * (1.0 - consumed_x), remaining.normalized())
        } else if let Some(&t) = remaining.intersect_horizontal(ratio).first() {
            let (head, tail) = remaining.split(t);
            let split_x = head.p3.x;
            let duration = total_time * (split_x - consumed_x);
            let easing = head.normalized();
            remaining = tail;
            consumed_x = split_x;
            (duration, easing)
        } else {
            // Root finding failed on a degenerate sub-curve; degrade to a
            // proportional linear segment instead of dropping the fling.
            owarn!(ratio, "no curve intersection for boundary ratio");
            let duration = total_time * (ratio - consumed_x).max(0.0);
            consumed_x = ratio;
            (duration, Easing::LINEAR)
        };

        let mut target = offset;
        for axis in Axis::BOTH {
            let af = fling.get(axis);
            let idx = axis as usize;
            let in_group = crossings[i..]
                .iter()
                .take_while(|c| c.0 - ratio <= RATIO_EPS)
                .find(|c| c.1 == axis);
            let travel = if let Some(&(_, _, bounded)) = in_group {
                pinned[idx] = Some(bounded);
                bounded
            } else if let Some(bounded) = pinned[idx] {
                // Already resting at its boundary.
                bounded
            } else {
                // Advances proportionally along the shared timeline until its
                // own segment fixes it. Zero for non-moving axes.
                full.get(axis) * ratio
            };
            target.set(axis, offset.get(axis) + travel * af.direction);
        }
        keyframes.push(Keyframe {
            duration_ms,
            easing,
            target,
        });

        // Skip the rest of a merged group.
        while i < crossings.len() && crossings[i].0 - ratio <= RATIO_EPS {
            i += 1;
        }
    }

    let total_ms = keyframes.iter().map(|k| k.duration_ms).sum();
    Trajectory {
        keyframes,
        total_ms,
    }
}
