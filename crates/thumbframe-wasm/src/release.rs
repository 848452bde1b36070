//! Window-level pointer release.
//!
//! A drag has to end even when the pointer is released outside the overlay,
//! so `pointerup` and `pointercancel` are listened for on `window` instead of
//! on the overlay elements. The listeners are removed when this guard drops.

use std::cell::RefCell;
use std::rc::Rc;
use thumbframe_core::{Editor, EditorEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const RELEASE_EVENTS: [(&str, EditorEvent); 2] = [
    ("pointerup", EditorEvent::EndGesture),
    ("pointercancel", EditorEvent::PointerCaptureLost),
];

pub(crate) struct WindowRelease {
    window: web_sys::Window,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

impl WindowRelease {
    pub(crate) fn attach(editor: &Rc<RefCell<Editor>>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;
        let mut listeners = Vec::with_capacity(RELEASE_EVENTS.len());

        for (name, event) in RELEASE_EVENTS {
            let editor = Rc::clone(editor);
            let callback = Closure::<dyn FnMut()>::new(move || {
                // Skip if a dispatch is already in progress
                if let Ok(mut editor) = editor.try_borrow_mut() {
                    editor.dispatch(event);
                }
            });
            window.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
            listeners.push((name, callback));
        }

        log::debug!("window release listeners attached");
        Ok(Self { window, listeners })
    }
}

impl Drop for WindowRelease {
    fn drop(&mut self) {
        for (name, callback) in &self.listeners {
            let _ = self
                .window
                .remove_event_listener_with_callback(name, callback.as_ref().unchecked_ref());
        }
        log::debug!("window release listeners detached");
    }
}
