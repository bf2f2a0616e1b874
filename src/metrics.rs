use crate::capability::RenderMode;
use crate::{Axis, Vec2};

/// Per-side pixel insets (padding or margin), as measured by the host's
/// layout layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl EdgeInsets {
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }
}

/// Measured geometry of the viewport element: padding-box size plus padding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    /// Client (padding-box) size.
    pub client: Vec2,
    pub padding: EdgeInsets,
}

/// Measured geometry of the content element: border-box size plus margin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentBox {
    /// Offset (border-box) size.
    pub size: Vec2,
    pub margin: EdgeInsets,
}

/// Scrollable geometry derived from a viewport/content measurement pair.
///
/// `position_*` describe where the content element may sit inside the
/// viewport; `scroll_max` is the resulting per-axis scroll range
/// (`scroll offset` is always within `[0, scroll_max]`). Recompute whenever
/// either box changes size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    pub client: Vec2,
    /// Content size as seen by the scroll range: border-box + margins +
    /// viewport padding.
    pub scroll_size: Vec2,
    pub position_min: Vec2,
    pub position_max: Vec2,
    /// Fixed part of the content position that is not scroll-dependent.
    /// Includes the start padding in `Transform` mode (translate is relative
    /// to the padding box); excludes it in `Offsets` mode (`left`/`top`
    /// already are).
    pub position_offset: Vec2,
    pub scroll_max: Vec2,
}

impl Metrics {
    pub fn compute(view: &ViewBox, content: &ContentBox, mode: RenderMode) -> Self {
        let mut m = Metrics::default();
        m.client = view.client;

        for axis in Axis::BOTH {
            let client = view.client.get(axis);
            let size = content.size.get(axis);

            m.scroll_size.set(
                axis,
                size + content.margin.start(axis)
                    + content.margin.end(axis)
                    + view.padding.start(axis)
                    + view.padding.end(axis),
            );

            let mut min = client - size - view.padding.end(axis) - content.margin.end(axis);
            let max = view.padding.start(axis) + content.margin.start(axis);
            let offset = match mode {
                RenderMode::Transform => max,
                RenderMode::Offsets => content.margin.start(axis),
            };
            // Content fits inside the viewport: the axis has no range.
            if min > max {
                min = max;
            }

            m.position_min.set(axis, min);
            m.position_max.set(axis, max);
            m.position_offset.set(axis, offset);
            m.scroll_max.set(axis, max - min);
        }

        m
    }

    /// Converts a canonical scroll offset to a content position.
    pub fn offset_to_position(&self, offset: Vec2) -> Vec2 {
        let mut p = Vec2::ZERO;
        for axis in Axis::BOTH {
            p.set(
                axis,
                self.position_max.get(axis) - offset.get(axis) - self.position_offset.get(axis),
            );
        }
        p
    }

    /// Converts a rendered content position back to a canonical scroll offset.
    pub fn position_to_offset(&self, position: Vec2) -> Vec2 {
        let mut o = Vec2::ZERO;
        for axis in Axis::BOTH {
            o.set(
                axis,
                self.position_max.get(axis) - position.get(axis) - self.position_offset.get(axis),
            );
        }
        o
    }

    /// Clamps a requested per-axis offset into `[0, scroll_max]`.
    pub fn clamp_offset(&self, axis: Axis, value: f64) -> f64 {
        value.clamp(0.0, self.scroll_max.get(axis))
    }
}
