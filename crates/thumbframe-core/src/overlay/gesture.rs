//! Gesture modes and the rotate anchor.

use super::geometry::Point;
use super::handle::{Corner, Handle, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Angle of `pointer` around `center`, in degrees.
///
/// Screen y points down, so increasing angles run clockwise.
#[inline]
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

/// Reference captured when a rotate gesture begins.
///
/// `angle` is the pointer angle at the start minus the rotation at the
/// start, so the rotation during the gesture is simply the current pointer
/// angle minus `angle`. The center is never re-measured mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotateAnchor {
    pub angle: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl RotateAnchor {
    /// Capture an anchor for a pointer press at `pointer` around `center`
    /// while the rectangle is rotated by `rotation` degrees.
    pub fn capture(pointer: Point, center: Point, rotation: f64) -> Self {
        Self {
            angle: pointer_angle(center, pointer) - rotation,
            center_x: center.x,
            center_y: center.y,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Rotation for a pointer at `pointer`.
    #[inline]
    pub fn rotation_at(&self, pointer: Point) -> f64 {
        pointer_angle(self.center(), pointer) - self.angle
    }
}

/// The gesture currently in progress, with its handle or anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureMode {
    #[default]
    None,
    Move,
    Corner(Corner),
    Side(Side),
    Rotate(RotateAnchor),
}

/// Payload-free label of a [`GestureMode`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    #[default]
    None,
    Move,
    Corner,
    Side,
    Rotate,
}

impl GestureMode {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureMode::None => GestureKind::None,
            GestureMode::Move => GestureKind::Move,
            GestureMode::Corner(_) => GestureKind::Corner,
            GestureMode::Side(_) => GestureKind::Side,
            GestureMode::Rotate(_) => GestureKind::Rotate,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, GestureMode::None)
    }

    /// The handle being dragged, if the gesture was started from one.
    pub fn active_handle(&self) -> Option<Handle> {
        match self {
            GestureMode::Corner(c) => Some(Handle::Corner(*c)),
            GestureMode::Side(s) => Some(Handle::Side(*s)),
            GestureMode::Rotate(_) => Some(Handle::Rotate),
            GestureMode::None | GestureMode::Move => None,
        }
    }

    pub fn rotate_anchor(&self) -> Option<&RotateAnchor> {
        match self {
            GestureMode::Rotate(anchor) => Some(anchor),
            _ => None,
        }
    }
}

impl GestureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GestureKind::None => "none",
            GestureKind::Move => "move",
            GestureKind::Corner => "corner",
            GestureKind::Side => "side",
            GestureKind::Rotate => "rotate",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
