//! Render projection and hit-testing.
//!
//! [`RenderLayout`] is what a paint layer needs to draw the overlay: the
//! composed transforms, CSS strings for DOM rendering, and where each handle
//! sits. It is a pure function of state and config.
//!
//! # CSS Composition
//!
//! The surface element is scaled with `transform-origin: 0 0`. The rectangle
//! is positioned at the surface origin with its own width/height and the
//! default (center) transform origin, so `translate(..) rotate(..)` turns it
//! about its own center. The image fills the rectangle.

use super::affine::Affine2;
use super::editor::ScreenMeasure;
use super::geometry::{Geometry, Point};
use super::gesture::GestureKind;
use super::handle::{Corner, Handle, Side};
use super::reducer::EditorState;
use crate::config::EditorConfig;
use serde::Serialize;

/// One drag handle, in rectangle-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleLayout {
    pub handle: Handle,
    /// Center of the handle
    pub x: f64,
    pub y: f64,
    /// Side length of the square hit area
    pub size: f64,
    /// Whether this handle is being dragged
    pub active: bool,
}

impl HandleLayout {
    fn contains(&self, p: Point) -> bool {
        let half = self.size / 2.0;
        (p.x - self.x).abs() <= half && (p.y - self.y).abs() <= half
    }
}

/// Everything the paint layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderLayout {
    pub scale: f64,
    pub geometry: Geometry,
    pub rotation: f64,
    pub gesture: GestureKind,
    pub active_handle: Option<Handle>,
    /// False while a gesture is running so the pan surface does not pick up
    /// the drag as a fresh pan.
    pub pan_surface_interactive: bool,
    /// Surface zoom
    pub surface_transform: Affine2,
    /// Rectangle-local to unscaled surface coordinates
    pub rect_transform: Affine2,
    /// Rectangle-local to scaled surface coordinates
    pub image_to_surface: Affine2,
    pub surface_css: String,
    pub rect_css: String,
    pub handles: Vec<HandleLayout>,
}

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Handle(Handle),
    Interior,
    Outside,
}

impl HitTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitTarget::Handle(h) => h.as_str(),
            HitTarget::Interior => "interior",
            HitTarget::Outside => "outside",
        }
    }
}

/// Center of a handle in rectangle-local coordinates.
pub(crate) fn handle_position(handle: Handle, geometry: &Geometry, rotate_offset: f64) -> Point {
    let (w, h) = (geometry.width, geometry.height);
    match handle {
        Handle::Corner(Corner::Nw) => Point::new(0.0, 0.0),
        Handle::Corner(Corner::Ne) => Point::new(w, 0.0),
        Handle::Corner(Corner::Sw) => Point::new(0.0, h),
        Handle::Corner(Corner::Se) => Point::new(w, h),
        Handle::Side(Side::N) => Point::new(w / 2.0, 0.0),
        Handle::Side(Side::E) => Point::new(w, h / 2.0),
        Handle::Side(Side::S) => Point::new(w / 2.0, h),
        Handle::Side(Side::W) => Point::new(0.0, h / 2.0),
        Handle::Rotate => Point::new(w / 2.0, -rotate_offset),
    }
}

impl RenderLayout {
    pub fn from_state(state: &EditorState, config: &EditorConfig) -> Self {
        let g = state.geometry;
        let surface_transform = Affine2::scale(state.scale);
        let rect_transform = Affine2::translate(g.x, g.y)
            * Affine2::rotate_about(state.rotation, Point::new(g.width / 2.0, g.height / 2.0));
        let image_to_surface = surface_transform * rect_transform;

        let active_handle = state.gesture.active_handle();
        let handles = Handle::ALL
            .into_iter()
            .map(|handle| {
                let p = handle_position(handle, &g, config.rotate_handle_offset);
                HandleLayout {
                    handle,
                    x: p.x,
                    y: p.y,
                    size: config.handle_size,
                    active: active_handle == Some(handle),
                }
            })
            .collect();

        Self {
            scale: state.scale,
            geometry: g,
            rotation: state.rotation,
            gesture: state.gesture.kind(),
            active_handle,
            pan_surface_interactive: !state.gesture.is_active(),
            surface_transform,
            rect_transform,
            image_to_surface,
            surface_css: format!("scale({})", state.scale),
            rect_css: format!(
                "translate({}px, {}px) rotate({}deg)",
                g.x, g.y, state.rotation
            ),
            handles,
        }
    }

    /// Rectangle-local rect the image content is drawn into.
    pub fn image_rect(&self) -> Geometry {
        Geometry::new(0.0, 0.0, self.geometry.width, self.geometry.height)
    }

    pub fn handle(&self, handle: Handle) -> Option<&HandleLayout> {
        self.handles.iter().find(|h| h.handle == handle)
    }
}

impl ScreenMeasure for RenderLayout {
    fn rect_center(&self) -> Point {
        let g = self.geometry;
        self.image_to_surface
            .apply(Point::new(g.width / 2.0, g.height / 2.0))
    }
}

/// Hit-test a point in scaled surface coordinates.
///
/// Handles win over the interior: the rotate grip first, then corners, then
/// sides. Only if no handle is hit does the interior count as a pan target.
pub fn hit_test(layout: &RenderLayout, surface_point: Point) -> HitTarget {
    let Some(inverse) = layout.image_to_surface.inverse() else {
        return HitTarget::Outside;
    };
    let local = inverse.apply(surface_point);

    let priority = |h: &HandleLayout| match h.handle {
        Handle::Rotate => 0,
        Handle::Corner(_) => 1,
        Handle::Side(_) => 2,
    };
    let mut candidates: Vec<&HandleLayout> =
        layout.handles.iter().filter(|h| h.contains(local)).collect();
    candidates.sort_by_key(|h| priority(*h));

    if let Some(hit) = candidates.first() {
        return HitTarget::Handle(hit.handle);
    }
    if layout.geometry.contains_local(local) {
        HitTarget::Interior
    } else {
        HitTarget::Outside
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
