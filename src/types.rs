use crate::bezier::Easing;

/// A scroll axis.
///
/// All scroll quantities come in per-axis pairs; `Axis::BOTH` is handy for the
/// common "do the same thing on both axes" loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// A pair of per-axis pixel values (offset, position, size, delta...).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
    }
}

/// A per-axis partial scroll request.
///
/// An axis left as `None` keeps its current value, so one-axis updates don't
/// have to read-modify-write the other axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTarget {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ScrollTarget {
    pub fn both(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn horizontal(x: f64) -> Self {
        Self { x: Some(x), y: None }
    }

    pub fn vertical(y: f64) -> Self {
        Self { x: None, y: Some(y) }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self::both(v.x, v.y)
    }

    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Why an inertial session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// A new interaction (gesture, programmatic scroll) cut the session short.
    Interrupted,
    /// The trajectory played out: velocity decayed to zero or a boundary
    /// absorbed the remaining momentum.
    Completed,
}

/// A rendering side effect for the host to apply to its content element.
///
/// Positions are content-box coordinates already converted from the canonical
/// scroll offset, so the host applies them verbatim to its positioning
/// primitive (`transform: translate(..)` or `left`/`top`, per the capability
/// probe's render mode).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderCommand {
    /// Set the content position immediately (zero duration).
    Place(Vec2),
    /// Play one declarative transition segment toward `position`.
    Animate {
        position: Vec2,
        duration_ms: f64,
        easing: Easing,
    },
}

/// Payload of the scroll-changed notification.
///
/// `inertial` distinguishes momentum coasting from user-driven scrolling;
/// consumers like scrollbar decorations key their show/hide logic off it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollUpdate {
    pub offset: Vec2,
    pub inertial: bool,
}
