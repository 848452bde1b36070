//! Overlay editor WASM bindings.
//!
//! `JsTransformEditor` owns one editor instance. Pointer coordinates passed
//! to `pointer_down`, `begin_rotate` and `pointer_move` must all be in the
//! same space (offset within the scaled surface element); deltas are the
//! browser's `movementX`/`movementY`.

use crate::release::WindowRelease;
use crate::types::JsEditorConfig;
use std::cell::RefCell;
use std::rc::Rc;
use thumbframe_core::{Corner, Editor, EditorError, EditorEvent, Point, ScreenMeasure, Side};
use wasm_bindgen::prelude::*;

fn to_js_error(err: EditorError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Transform overlay editor for JavaScript.
#[wasm_bindgen]
pub struct JsTransformEditor {
    inner: Rc<RefCell<Editor>>,
    release: Option<WindowRelease>,
}

impl Default for JsTransformEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl JsTransformEditor {
    fn from_editor(editor: Editor) -> Self {
        Self {
            inner: Rc::new(RefCell::new(editor)),
            release: None,
        }
    }

    fn dispatch(&self, event: EditorEvent) {
        self.inner.borrow_mut().dispatch(event);
    }

    fn begin_resize_inner(&self, corner: &str) -> Result<(), EditorError> {
        let corner: Corner = corner.parse()?;
        self.inner.borrow_mut().begin_resize(corner);
        Ok(())
    }

    fn begin_crop_inner(&self, side: &str) -> Result<(), EditorError> {
        let side: Side = side.parse()?;
        self.inner.borrow_mut().begin_crop(side);
        Ok(())
    }
}

#[wasm_bindgen]
impl JsTransformEditor {
    /// Create an editor with default config.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsTransformEditor {
        Self::from_editor(Editor::default())
    }

    /// Create an editor from a config object (see `JsEditorConfig`).
    pub fn with_config(config: JsValue) -> Result<JsTransformEditor, JsValue> {
        let js: JsEditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))?;
        let editor = Editor::new(js.into()).map_err(to_js_error)?;
        Ok(Self::from_editor(editor))
    }

    /// Listen for pointer release on `window` so drags end anywhere.
    pub fn attach_window_release(&mut self) -> Result<(), JsValue> {
        if self.release.is_none() {
            self.release = Some(WindowRelease::attach(&self.inner)?);
        }
        Ok(())
    }

    /// Remove the window listeners (also done when the editor is freed).
    pub fn detach_window_release(&mut self) {
        self.release = None;
    }

    /// The image finished loading with the given natural size.
    pub fn image_loaded(&self, natural_width: u32, natural_height: u32) {
        self.dispatch(EditorEvent::ImageLoaded {
            natural_width,
            natural_height,
        });
    }

    /// The image failed to load; geometry is left as it was.
    pub fn image_load_failed(&self, reason: &str) {
        log::warn!("thumbnail image load failed: {}", reason);
        self.dispatch(EditorEvent::ImageLoadFailed);
    }

    /// External zoom control.
    pub fn set_scale(&self, scale: f64) {
        self.dispatch(EditorEvent::SetScale(scale));
    }

    /// Pointer pressed on the surface. Returns what was hit: a handle id,
    /// "interior" or "outside".
    pub fn pointer_down(&self, x: f64, y: f64) -> String {
        self.inner
            .borrow_mut()
            .pointer_down(Point::new(x, y))
            .as_str()
            .to_string()
    }

    /// Pointer pressed on the pan surface.
    pub fn begin_pan(&self) {
        self.dispatch(EditorEvent::BeginPan);
    }

    /// Pointer pressed on a corner handle ("nw", "ne", "sw", "se").
    pub fn begin_resize(&self, corner: &str) -> Result<(), JsValue> {
        self.begin_resize_inner(corner).map_err(to_js_error)
    }

    /// Pointer pressed on a side handle ("n", "e", "s", "w").
    pub fn begin_crop(&self, side: &str) -> Result<(), JsValue> {
        self.begin_crop_inner(side).map_err(to_js_error)
    }

    /// Pointer pressed on the rotate grip, with the rectangle's on-screen
    /// center as measured by the caller (e.g. from getBoundingClientRect).
    pub fn begin_rotate(&self, pointer_x: f64, pointer_y: f64, center_x: f64, center_y: f64) {
        self.inner
            .borrow_mut()
            .begin_rotate(Point::new(pointer_x, pointer_y), &Point::new(center_x, center_y));
    }

    /// Pointer moved by (dx, dy), now at (x, y).
    pub fn pointer_move(&self, dx: f64, dy: f64, x: f64, y: f64) {
        self.inner.borrow_mut().pointer_move(dx, dy, Point::new(x, y));
    }

    /// Pointer released.
    pub fn end_gesture(&self) {
        self.dispatch(EditorEvent::EndGesture);
    }

    /// Pointer capture lost (`lostpointercapture`).
    pub fn lost_pointer_capture(&self) {
        self.dispatch(EditorEvent::PointerCaptureLost);
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.borrow().state().geometry.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.borrow().state().geometry.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.borrow().state().geometry.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.borrow().state().geometry.height
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.inner.borrow().state().rotation
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.borrow().state().scale
    }

    /// Current gesture: "none", "move", "corner", "side" or "rotate".
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        self.inner.borrow().state().gesture.kind().to_string()
    }

    /// Id of the handle being dragged, if any.
    #[wasm_bindgen(getter)]
    pub fn active_handle(&self) -> Option<String> {
        self.inner
            .borrow()
            .state()
            .gesture
            .active_handle()
            .map(|h| h.to_string())
    }

    /// Whether the pan surface should receive pointer events right now.
    #[wasm_bindgen(getter)]
    pub fn pan_surface_interactive(&self) -> bool {
        !self.inner.borrow().state().gesture.is_active()
    }

    /// CSS transform for the surface element.
    pub fn surface_css(&self) -> String {
        self.inner.borrow().layout().surface_css
    }

    /// CSS transform for the rectangle element.
    pub fn rect_css(&self) -> String {
        self.inner.borrow().layout().rect_css
    }

    /// On-screen center of the rectangle in surface coordinates, as [x, y].
    pub fn rect_center(&self) -> Vec<f64> {
        let c = self.inner.borrow().layout().rect_center();
        vec![c.x, c.y]
    }

    /// Ids of all handles in paint order.
    pub fn handle_ids(&self) -> js_sys::Array {
        self.inner
            .borrow()
            .layout()
            .handles
            .iter()
            .map(|h| JsValue::from_str(h.handle.as_str()))
            .collect()
    }

    /// Full render layout as a plain JS object.
    pub fn layout(&self) -> Result<JsValue, JsValue> {
        let layout = self.inner.borrow().layout();
        serde_wasm_bindgen::to_value(&layout)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize layout: {}", e)))
    }
}
