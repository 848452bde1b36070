//! Input events consumed by the reducer.

use super::geometry::Point;
use super::handle::{Corner, Side};

/// Everything that can change editor state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    /// The image collaborator reports natural pixel dimensions.
    ImageLoaded {
        natural_width: u32,
        natural_height: u32,
    },
    /// The image collaborator reports a load failure.
    ImageLoadFailed,
    /// External zoom control.
    SetScale(f64),
    /// Pointer pressed on the interior pan surface.
    BeginPan,
    /// Pointer pressed on a corner handle.
    BeginResize(Corner),
    /// Pointer pressed on a side handle.
    BeginCrop(Side),
    /// Pointer pressed on the rotate grip. `center` is the rectangle's
    /// on-screen center, measured once by the rendering side.
    BeginRotate { pointer: Point, center: Point },
    /// Pointer moved by `(dx, dy)` since the previous event, now at `pointer`.
    PointerMove { dx: f64, dy: f64, pointer: Point },
    /// Pointer released anywhere.
    EndGesture,
    /// The pointer capture was lost (e.g. the browser cancelled it).
    PointerCaptureLost,
}

impl EditorEvent {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::ImageLoaded { .. } => "image-loaded",
            EditorEvent::ImageLoadFailed => "image-load-failed",
            EditorEvent::SetScale(_) => "set-scale",
            EditorEvent::BeginPan => "begin-pan",
            EditorEvent::BeginResize(_) => "begin-resize",
            EditorEvent::BeginCrop(_) => "begin-crop",
            EditorEvent::BeginRotate { .. } => "begin-rotate",
            EditorEvent::PointerMove { .. } => "pointer-move",
            EditorEvent::EndGesture => "end-gesture",
            EditorEvent::PointerCaptureLost => "pointer-capture-lost",
        }
    }

    /// Begin events start a new gesture.
    pub fn is_begin(&self) -> bool {
        matches!(
            self,
            EditorEvent::BeginPan
                | EditorEvent::BeginResize(_)
                | EditorEvent::BeginCrop(_)
                | EditorEvent::BeginRotate { .. }
        )
    }
}
