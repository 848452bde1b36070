//! JS-facing configuration type.
//!
//! Passed from TypeScript as a plain object via serde_wasm_bindgen. Every
//! field is optional; missing fields take the core defaults.

use serde::{Deserialize, Serialize};
use thumbframe_core::{EditorConfig, Normalization, RotationPolicy, SizePolicy};

/// JavaScript-compatible editor config.
///
/// ```typescript
/// const editor = JsTransformEditor.with_config({
///   handle_size: 12,
///   size_policy: 'flip',
///   rotation_policy: 'wrap',
/// });
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsEditorConfig {
    #[serde(default)]
    pub handle_size: Option<f64>,
    #[serde(default)]
    pub rotate_handle_offset: Option<f64>,
    /// "preserve", "clamp_to_zero" or "flip"
    #[serde(default)]
    pub size_policy: Option<SizePolicy>,
    /// "unbounded" or "wrap"
    #[serde(default)]
    pub rotation_policy: Option<RotationPolicy>,
}

impl From<JsEditorConfig> for EditorConfig {
    fn from(js: JsEditorConfig) -> Self {
        let defaults = EditorConfig::default();
        EditorConfig {
            handle_size: js.handle_size.unwrap_or(defaults.handle_size),
            rotate_handle_offset: js
                .rotate_handle_offset
                .unwrap_or(defaults.rotate_handle_offset),
            normalization: Normalization {
                size: js.size_policy.unwrap_or(defaults.normalization.size),
                rotation: js
                    .rotation_policy
                    .unwrap_or(defaults.normalization.rotation),
            },
        }
    }
}
