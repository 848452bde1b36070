//! Thumbframe WASM - WebAssembly bindings for the thumbnail overlay editor
//!
//! This crate exposes the thumbframe-core editor to the web front end that
//! frames video thumbnails.
//!
//! # Module Structure
//!
//! - `editor` - `JsTransformEditor`, the editor object used from TypeScript
//! - `types` - JS-facing config type
//! - `release` - window-level pointer release listeners
//! - `logging` - `log` backend that writes to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsTransformEditor } from '@thumbframe/wasm';
//!
//! await init();
//!
//! const editor = new JsTransformEditor();
//! editor.attach_window_release();
//! img.onload = () => editor.image_loaded(img.naturalWidth, img.naturalHeight);
//!
//! surface.addEventListener('pointerdown', (e) => editor.pointer_down(e.offsetX, e.offsetY));
//! surface.addEventListener('pointermove', (e) =>
//!   editor.pointer_move(e.movementX, e.movementY, e.offsetX, e.offsetY));
//!
//! rect.style.transform = editor.rect_css();
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod logging;
mod release;
mod types;

// Re-export public types
pub use editor::JsTransformEditor;
pub use types::JsEditorConfig;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logging::init(log::LevelFilter::Info);
}

/// Raise or lower console log verbosity ("error", "warn", "info", "debug", "trace").
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
