use crate::Vec2;

/// A lightweight, serializable snapshot of the scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Restoring a snapshot re-clamps the offset against the current metrics;
/// an in-flight inertial session is never resumed, only observed via
/// `coasting`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub offset: Vec2,
    pub coasting: bool,
}
