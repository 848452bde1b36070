//! Editor configuration.
//!
//! The config is plain data so it can be deserialized from whatever the host
//! hands over (a JS object via serde-wasm-bindgen in the browser). Missing
//! fields fall back to [`EditorConfig::default`].

use crate::error::EditorError;
use crate::overlay::Normalization;
use serde::{Deserialize, Serialize};

/// Default side length of a drag handle, in rectangle-local units.
pub const DEFAULT_HANDLE_SIZE: f64 = 10.0;

/// Default distance of the rotate grip above the top edge.
pub const DEFAULT_ROTATE_HANDLE_OFFSET: f64 = 24.0;

/// Tunables for the overlay editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side length of the square hit area around each handle
    pub handle_size: f64,
    /// Distance from the top edge midpoint to the rotate grip
    pub rotate_handle_offset: f64,
    /// Normalization applied to geometry and rotation when a gesture ends
    pub normalization: Normalization,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle_size: DEFAULT_HANDLE_SIZE,
            rotate_handle_offset: DEFAULT_ROTATE_HANDLE_OFFSET,
            normalization: Normalization::default(),
        }
    }
}

impl EditorConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that all values are usable.
    ///
    /// Handle size must be finite and positive; the rotate offset must be
    /// finite and non-negative.
    pub fn validate(&self) -> Result<(), EditorError> {
        if !self.handle_size.is_finite() || self.handle_size <= 0.0 {
            return Err(EditorError::InvalidConfig(format!(
                "handle_size must be a positive number, got {}",
                self.handle_size
            )));
        }
        if !self.rotate_handle_offset.is_finite() || self.rotate_handle_offset < 0.0 {
            return Err(EditorError::InvalidConfig(format!(
                "rotate_handle_offset must be a non-negative number, got {}",
                self.rotate_handle_offset
            )));
        }
        Ok(())
    }
}
