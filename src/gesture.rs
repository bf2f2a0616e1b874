use crate::Vec2;

/// Phase of a single-pointer pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanPhase {
    Start,
    Move,
    End,
}

/// One pan-gesture event, as reported by the host's gesture recognizer.
///
/// Velocities are in px/ms, signed. The recognizer is trusted: no smoothing
/// or re-derivation happens here.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanEvent {
    pub phase: PanPhase,
    pub x: f64,
    pub y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub timestamp_ms: u64,
}

impl PanEvent {
    pub fn start(x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self {
            phase: PanPhase::Start,
            x,
            y,
            velocity_x: 0.0,
            velocity_y: 0.0,
            timestamp_ms,
        }
    }

    pub fn moved(x: f64, y: f64, velocity_x: f64, velocity_y: f64, timestamp_ms: u64) -> Self {
        Self {
            phase: PanPhase::Move,
            x,
            y,
            velocity_x,
            velocity_y,
            timestamp_ms,
        }
    }

    pub fn end(x: f64, y: f64, velocity_x: f64, velocity_y: f64, timestamp_ms: u64) -> Self {
        Self {
            phase: PanPhase::End,
            x,
            y,
            velocity_x,
            velocity_y,
            timestamp_ms,
        }
    }

    pub fn point(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.velocity_x, self.velocity_y)
    }
}

/// In-flight drag bookkeeping between pan start and pan end.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DragState {
    pub start_point: Vec2,
    pub start_offset: Vec2,
    /// Latest velocity sample from a move event, with its timestamp.
    sample: Option<(Vec2, u64)>,
}

impl DragState {
    pub fn new(start_point: Vec2, start_offset: Vec2) -> Self {
        Self {
            start_point,
            start_offset,
            sample: None,
        }
    }

    pub fn record_sample(&mut self, velocity: Vec2, timestamp_ms: u64) {
        self.sample = Some((velocity, timestamp_ms));
    }

    /// Picks the release velocity for a fling.
    ///
    /// A cached move sample older than `stale_after_ms` means the finger
    /// rested before lifting (fast motion, then a pause); the end event's own
    /// velocity is the honest reading in that case. Same when no move was
    /// ever observed.
    pub fn release_velocity(&self, end: &PanEvent, stale_after_ms: u64) -> Vec2 {
        match self.sample {
            Some((velocity, sampled_at))
                if end.timestamp_ms.saturating_sub(sampled_at) <= stale_after_ms =>
            {
                velocity
            }
            _ => end.velocity(),
        }
    }
}
